//! Equality and ordering predicates

use crate::error::{CoreError, Result};
use crate::node::Condition;
use crate::operator::Operator;
use crate::params::Params;

/// Leaf predicate comparing one parameter against a literal string.
///
/// `Eq`/`Ne` use exact, case-sensitive string equality. `Gt`/`Ge`/`Lt`/`Le`
/// use lexicographic string ordering: fixed-width or ISO-8601 values
/// (`2014-01-01`) order correctly, unpadded numerics do not (`"9" > "10"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compare {
    key: String,
    op: Operator,
    value: String,
}

impl Compare {
    /// Create a comparison predicate, rejecting non-comparison operators
    pub fn new(key: impl Into<String>, op: Operator, value: impl Into<String>) -> Result<Self> {
        if !op.is_comparison() {
            return Err(CoreError::InvalidCondition(format!(
                "operator '{}' is not a comparison",
                op
            )));
        }
        Ok(Self {
            key: key.into(),
            op,
            value: value.into(),
        })
    }

    /// Create an equality predicate (key == value)
    pub fn eq(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            op: Operator::Eq,
            value: value.into(),
        }
    }

    /// Create an inequality predicate (key != value)
    pub fn ne(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            op: Operator::Ne,
            value: value.into(),
        }
    }

    /// Create a greater-than predicate (key > value)
    pub fn gt(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            op: Operator::Gt,
            value: value.into(),
        }
    }

    /// Create a greater-or-equal predicate (key >= value)
    pub fn ge(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            op: Operator::Ge,
            value: value.into(),
        }
    }

    /// Create a less-than predicate (key < value)
    pub fn lt(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            op: Operator::Lt,
            value: value.into(),
        }
    }

    /// Create a less-or-equal predicate (key <= value)
    pub fn le(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            op: Operator::Le,
            value: value.into(),
        }
    }

    /// The parameter key this predicate inspects
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The comparison operator
    pub fn operator(&self) -> Operator {
        self.op
    }

    /// The literal the parameter is compared against
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Condition for Compare {
    fn eval(&self, params: &dyn Params) -> bool {
        let actual = match params.get(&self.key) {
            Some(v) => v,
            None => {
                tracing::debug!("Parameter not found: {}, returning false", self.key);
                return false;
            }
        };

        match self.op {
            Operator::Eq => actual == self.value,
            Operator::Ne => actual != self.value,
            Operator::Gt => actual > self.value.as_str(),
            Operator::Ge => actual >= self.value.as_str(),
            Operator::Lt => actual < self.value.as_str(),
            Operator::Le => actual <= self.value.as_str(),
            // Compare::new rejects everything else at construction
            _ => unreachable!("non-comparison operator in Compare"),
        }
    }
}
