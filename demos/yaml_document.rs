use rule_tree::{from_file, NameRegistry, RegistryConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let config = RegistryConfig::from_file("demos/registry.yaml").expect("failed to load registry config");
    let registry = NameRegistry::from_config(config);

    let tree = from_file("demos/rules.yaml", &registry).expect("failed to load rules");

    println!("{tree}");
    println!(
        "{}",
        serde_json::to_string_pretty(&tree).expect("failed to serialize tree")
    );
}
