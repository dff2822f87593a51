//! Declarative filter example
//!
//! This example demonstrates:
//! - Writing a filter as a YAML document
//! - Compiling it into a predicate tree
//! - Evaluating the tree against in-memory parameters

use sift_compiler::from_yaml;
use sift_core::Condition;
use std::collections::HashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== YAML Filter Example ===\n");

    let document = r#"
all:
  - { key: date, op: after, value: "2014-01-01" }
  - any:
      - { key: lang, op: eq, value: EN }
      - not: { key: audience, op: eq, value: internal }
"#;

    println!("Filter definition:{}", document);

    let filter = from_yaml(document)?;

    let posts: [(&str, &[(&str, &str)]); 3] = [
        ("english post", &[("date", "2014-06-15"), ("lang", "EN")]),
        ("public german post", &[("date", "2014-06-15"), ("lang", "DE")]),
        (
            "internal german post",
            &[
                ("date", "2014-06-15"),
                ("lang", "DE"),
                ("audience", "internal"),
            ],
        ),
    ];

    for (label, pairs) in posts {
        let params: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        println!("  {:22} -> {}", label, filter.eval(&params));
    }

    Ok(())
}
