use std::sync::{Arc, RwLock};
use std::thread;

use rule_tree::NameRegistry;
use serde_json::json;

fn main() {
    let registry = Arc::new(RwLock::new(NameRegistry::with_names(["and", "user"])));

    // Registration happens up front; parses only take the read lock.
    registry
        .write()
        .expect("registry lock poisoned")
        .add(["service", "location"]);

    let inputs = [
        json!("user"),
        json!({"and": ["user", "service"]}),
        json!({"location": {"region": "uk"}}),
        json!({"or": ["user"]}),
    ];

    let handles: Vec<_> = inputs
        .into_iter()
        .enumerate()
        .map(|(i, input)| {
            let reg = Arc::clone(&registry);
            thread::spawn(move || {
                let result = reg.read().expect("registry lock poisoned").parse(&input);
                match result {
                    Ok(tree) => println!("Thread {i}: {tree}"),
                    Err(err) => println!("Thread {i}: {err}"),
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
