//! Date comparison predicates
//!
//! Values are interpreted as ISO dates (`%Y-%m-%d`). Both the parameter
//! value and the literal are parsed per evaluation; if either side fails to
//! parse the predicate is false, never an error.

use crate::node::Condition;
use crate::params::Params;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Leaf predicate matching when the parameter date is strictly before a literal date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Before {
    key: String,
    value: String,
}

impl Before {
    /// Create a before-date predicate; `value` should be a `YYYY-MM-DD` date
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Condition for Before {
    fn eval(&self, params: &dyn Params) -> bool {
        match lookup_dates(&self.key, &self.value, params) {
            Some((actual, limit)) => actual < limit,
            None => false,
        }
    }
}

/// Leaf predicate matching when the parameter date is strictly after a literal date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct After {
    key: String,
    value: String,
}

impl After {
    /// Create an after-date predicate; `value` should be a `YYYY-MM-DD` date
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Condition for After {
    fn eval(&self, params: &dyn Params) -> bool {
        match lookup_dates(&self.key, &self.value, params) {
            Some((actual, limit)) => actual > limit,
            None => false,
        }
    }
}

/// Look up `key` and parse both sides as dates, logging why a side dropped out
fn lookup_dates(key: &str, value: &str, params: &dyn Params) -> Option<(NaiveDate, NaiveDate)> {
    let raw = match params.get(key) {
        Some(v) => v,
        None => {
            tracing::debug!("Parameter not found: {}, returning false", key);
            return None;
        }
    };

    let actual = match parse_date(raw) {
        Some(d) => d,
        None => {
            tracing::debug!("Unparsable date '{}' for parameter {}, returning false", raw, key);
            return None;
        }
    };

    let limit = match parse_date(value) {
        Some(d) => d,
        None => {
            tracing::debug!("Unparsable date literal '{}', returning false", value);
            return None;
        }
    };

    Some((actual, limit))
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
    fn test_before() {
        let p = params(&[("date", "2013-12-12")]);
        assert!(Before::new("date", "2014-01-01").eval(&p));
        assert!(!After::new("date", "2014-01-01").eval(&p));
    }

    #[test]
    fn test_after() {
        let p = params(&[("date", "2014-10-10")]);
        assert!(After::new("date", "2014-01-01").eval(&p));
        assert!(!Before::new("date", "2014-01-01").eval(&p));
    }

    #[test]
    fn test_equal_dates_match_neither() {
        let p = params(&[("date", "2014-01-01")]);
        assert!(!Before::new("date", "2014-01-01").eval(&p));
        assert!(!After::new("date", "2014-01-01").eval(&p));
    }

    #[test]
    fn test_missing_key() {
        let p = params(&[]);
        assert!(!Before::new("date", "2014-01-01").eval(&p));
        assert!(!After::new("date", "2014-01-01").eval(&p));
    }

    #[test]
    fn test_unparsable_parameter_value() {
        let p = params(&[("date", "last tuesday")]);
        assert!(!Before::new("date", "2014-01-01").eval(&p));
        assert!(!After::new("date", "2014-01-01").eval(&p));
    }

    #[test]
    fn test_unparsable_literal() {
        let p = params(&[("date", "2014-01-01")]);
        assert!(!Before::new("date", "someday").eval(&p));
        assert!(!After::new("date", "someday").eval(&p));
    }

    #[test]
    fn test_date_ordering_across_months() {
        let p = params(&[("date", "2014-02-03")]);
        assert!(Before::new("date", "2014-10-01").eval(&p));
        assert!(After::new("date", "2014-01-31").eval(&p));
    }
}
