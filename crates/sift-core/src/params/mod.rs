//! Parameter lookup abstraction
//!
//! Evaluation only ever needs "give me the string value for this key". The
//! `Params` trait is that single capability, so any key-value store can back
//! an evaluation without the predicates knowing about it.

mod query;

pub use query::QueryParams;

use std::collections::{BTreeMap, HashMap};

/// Read-only lookup of string parameters by key
pub trait Params {
    /// Look up a parameter value, returning `None` when the key is absent
    fn get(&self, key: &str) -> Option<&str>;
}

impl Params for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

impl Params for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }
}
