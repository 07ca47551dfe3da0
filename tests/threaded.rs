use std::sync::{Arc, RwLock};
use std::thread;

use rule_tree::{ErrorKind, NameRegistry, RuleNode};
use serde_json::json;

#[test]
fn parse_across_threads() {
    let registry = Arc::new(NameRegistry::with_names([
        "or",
        "and",
        "user",
        "service",
        "location",
    ]));

    let inputs = vec![
        json!("user"),
        json!({"and": ["user", "service"]}),
        json!({"or": ["user", {"location": {"region": "uk"}}]}),
        json!("invalid"),
    ];

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            let reg = Arc::clone(&registry);
            thread::spawn(move || reg.parse(&input).map_err(|e| e.kind()))
        })
        .collect();

    let results: Vec<Result<RuleNode, ErrorKind>> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results[0].as_ref().unwrap().to_string(), "user");
    assert_eq!(results[1].as_ref().unwrap().to_string(), "and(user, service)");
    assert_eq!(
        results[2].as_ref().unwrap().to_string(),
        r#"or(user, location{"region":"uk"})"#
    );
    assert_eq!(results[3].as_ref().unwrap_err(), &ErrorKind::NotFound);
}

#[test]
fn same_input_same_tree_on_every_thread() {
    let registry = Arc::new(NameRegistry::with_names(["and", "or", "user", "service"]));
    let input = Arc::new(json!({"or": ["user", {"and": ["service", "user"]}]}));

    let trees: Vec<RuleNode> = (0..8)
        .map(|_| {
            let reg = Arc::clone(&registry);
            let input = Arc::clone(&input);
            thread::spawn(move || reg.parse(&input).unwrap())
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();

    assert!(trees.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn locked_registry_updates_are_seen_by_later_parses() {
    let registry = Arc::new(RwLock::new(NameRegistry::with_names(["user"])));
    let input = json!("service");

    let reg = Arc::clone(&registry);
    let before = thread::spawn(move || reg.read().unwrap().parse(&input).is_ok())
        .join()
        .unwrap();
    assert!(!before);

    registry.write().unwrap().add(["service"]);

    let reg = Arc::clone(&registry);
    let after = thread::spawn(move || reg.read().unwrap().parse(&json!("service")).is_ok())
        .join()
        .unwrap();
    assert!(after);
}
