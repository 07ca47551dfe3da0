use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rule_tree::parse::parse;
use rule_tree::{from_yaml_str, NameRegistry};
use serde_json::{json, Value};

fn registry() -> NameRegistry {
    NameRegistry::with_names([
        "or",
        "and",
        "user",
        "service",
        "location",
        "opening-hours",
        "relationship",
    ])
    .max_depth(8)
}

/// A full binary tree of alternating combinators, `depth` levels deep.
fn balanced(depth: usize) -> Value {
    if depth == 0 {
        return json!({"location": {"region": "uk"}});
    }
    let name = if depth % 2 == 0 { "and" } else { "or" };
    json!({ name: [balanced(depth - 1), "user", balanced(depth - 1)] })
}

fn bench_parse(c: &mut Criterion) {
    let reg = registry();
    let mut group = c.benchmark_group("parse");

    let leaf = json!("user");
    group.bench_function("leaf", |b| b.iter(|| parse(black_box(&leaf), &reg)));

    let args = json!({"opening-hours": {"opening": "10:00", "closing": "20:00"}});
    group.bench_function("arguments", |b| b.iter(|| parse(black_box(&args), &reg)));

    for depth in [2, 4, 6] {
        let tree = balanced(depth);
        group.bench_function(format!("balanced_depth_{depth}"), |b| {
            b.iter(|| parse(black_box(&tree), &reg));
        });
    }

    group.finish();
}

fn bench_yaml_document(c: &mut Criterion) {
    let reg = registry();
    let yaml = r"
rule:
  or:
    - user
    - and:
        - service
        - opening-hours:
            opening: 10:00
            closing: 20:00
        - relationship:
            levels:
              - comprehensive
              - parent
";
    c.bench_function("yaml_document", |b| {
        b.iter(|| from_yaml_str(black_box(yaml), &reg));
    });
}

criterion_group!(benches, bench_parse, bench_yaml_document);
criterion_main!(benches);
