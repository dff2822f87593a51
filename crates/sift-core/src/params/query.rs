//! Query-string parameter adapter

use super::Params;
use std::collections::HashMap;

/// Parameters parsed from an URL-encoded query string.
///
/// Query strings are multi-maps; this adapter keeps the first value seen
/// for each key, so `a=1&a=2` looks up as `a -> "1"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    /// Parse a query string such as `date=2014-01-01&lang=EN`.
    ///
    /// A leading `?` is tolerated, `+` decodes to a space, and pairs whose
    /// percent-escapes do not decode to UTF-8 are skipped.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut values = HashMap::new();

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = match pair.split_once('=') {
                Some((k, v)) => (k, v),
                None => (pair, ""),
            };

            let key = match urlencoding::decode(&raw_key.replace('+', " ")) {
                Ok(k) => k.into_owned(),
                Err(_) => {
                    tracing::debug!("Skipping undecodable query key: {}", raw_key);
                    continue;
                }
            };
            let value = match urlencoding::decode(&raw_value.replace('+', " ")) {
                Ok(v) => v.into_owned(),
                Err(_) => {
                    tracing::debug!("Skipping undecodable query value for key: {}", key);
                    continue;
                }
            };

            // First value per key wins
            values.entry(key).or_insert(value);
        }

        Self { values }
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no parameters were parsed
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Params for QueryParams {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}
