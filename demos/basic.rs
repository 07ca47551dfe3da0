use rule_tree::{NameRegistry, NodeBody, RuleNode};
use serde_json::json;

fn print_tree(node: &RuleNode) {
    let indent = "  ".repeat(node.level());
    match node.body() {
        NodeBody::Leaf => println!("{indent}{}", node.name()),
        NodeBody::Children(children) => {
            println!("{indent}{}:", node.name());
            for child in children {
                print_tree(child);
            }
        }
        NodeBody::Arguments(args) => println!("{indent}{} {args}", node.name()),
    }
}

fn main() {
    let registry = NameRegistry::with_names([
        "or",
        "and",
        "user",
        "service",
        "opening-hours",
        "relationship",
    ]);

    let expression = json!({
        "or": [
            "user",
            {"and": ["service", {"opening-hours": {"opening": "10:00", "closing": "20:00"}}]}
        ]
    });

    match registry.parse(&expression) {
        Ok(tree) => {
            println!("{tree}");
            print_tree(&tree);
        }
        Err(err) => eprintln!("{} error: {err}", err.kind()),
    }
}
