//! Query parameter filtering example
//!
//! This example demonstrates:
//! - Building a predicate tree with the fluent API
//! - Parsing URL query strings into a parameter source
//! - Evaluating one tree against several parameter sets

use sift_core::{Compare, Condition, ConditionExt, Contains, QueryParams};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Query Filter Example ===\n");

    // (date >= 2014-01-01) AND ((lang == EN) OR NOT (tags contains draft))
    let filter = Compare::ge("date", "2014-01-01")
        .and(Compare::eq("lang", "EN").or(Contains::new("tags", "draft").not()));

    let queries = [
        "date=2014-01-01&lang=EN",
        "date=2014-10-10&lang=DE&tags=news",
        "date=2013-12-12&lang=EN",
        "date=2014-10-10&lang=DE&tags=draft%2Cwip",
    ];

    for query in queries {
        let params = QueryParams::parse(query);
        println!("{:45} -> {}", query, filter.eval(&params));
    }
}
