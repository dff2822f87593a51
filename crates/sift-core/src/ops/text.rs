//! Substring, prefix and suffix predicates

use crate::node::Condition;
use crate::params::Params;

/// Leaf predicate matching when the parameter value contains a substring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contains {
    key: String,
    needle: String,
}

impl Contains {
    /// Create a substring predicate
    pub fn new(key: impl Into<String>, needle: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            needle: needle.into(),
        }
    }
}

impl Condition for Contains {
    fn eval(&self, params: &dyn Params) -> bool {
        match params.get(&self.key) {
            Some(v) => v.contains(self.needle.as_str()),
            None => {
                tracing::debug!("Parameter not found: {}, returning false", self.key);
                false
            }
        }
    }
}

/// Leaf predicate matching when the parameter value starts with a prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartsWith {
    key: String,
    prefix: String,
}

impl StartsWith {
    /// Create a prefix predicate
    pub fn new(key: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prefix: prefix.into(),
        }
    }
}

impl Condition for StartsWith {
    fn eval(&self, params: &dyn Params) -> bool {
        match params.get(&self.key) {
            Some(v) => v.starts_with(self.prefix.as_str()),
            None => {
                tracing::debug!("Parameter not found: {}, returning false", self.key);
                false
            }
        }
    }
}

/// Leaf predicate matching when the parameter value ends with a suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndsWith {
    key: String,
    suffix: String,
}

impl EndsWith {
    /// Create a suffix predicate
    pub fn new(key: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            suffix: suffix.into(),
        }
    }
}

impl Condition for EndsWith {
    fn eval(&self, params: &dyn Params) -> bool {
        match params.get(&self.key) {
            Some(v) => v.ends_with(self.suffix.as_str()),
            None => {
                tracing::debug!("Parameter not found: {}, returning false", self.key);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_contains_match() {
        let p = params(&[("email", "alice@example.com")]);
        assert!(Contains::new("email", "@example.").eval(&p));
        assert!(!Contains::new("email", "@other.").eval(&p));
    }

    #[test]
    fn test_contains_missing_key() {
        let p = params(&[]);
        assert!(!Contains::new("email", "@").eval(&p));
    }

    #[test]
    fn test_contains_empty_needle_matches_present_key() {
        let p = params(&[("email", "alice@example.com")]);
        assert!(Contains::new("email", "").eval(&p));
    }

    #[test]
    fn test_starts_with() {
        let p = params(&[("path", "/api/v1/users")]);
        assert!(StartsWith::new("path", "/api/").eval(&p));
        assert!(!StartsWith::new("path", "/admin/").eval(&p));
    }

    #[test]
    fn test_starts_with_missing_key() {
        let p = params(&[]);
        assert!(!StartsWith::new("path", "/api/").eval(&p));
    }

    #[test]
    fn test_ends_with() {
        let p = params(&[("file", "report.csv")]);
        assert!(EndsWith::new("file", ".csv").eval(&p));
        assert!(!EndsWith::new("file", ".json").eval(&p));
    }

    #[test]
    fn test_ends_with_missing_key() {
        let p = params(&[]);
        assert!(!EndsWith::new("file", ".csv").eval(&p));
    }
}
