//! Logical combinators
//!
//! Combinators hold no comparison logic of their own; they recurse into
//! their children and combine the results. Children are evaluated left to
//! right and evaluation short-circuits: `And` skips its right child when
//! the left is false, `Or` skips its right child when the left is true.
//! Recursion depth equals tree height.

use crate::node::Condition;
use crate::params::Params;

/// Combinator that is true when both children are true
#[derive(Debug)]
pub struct And {
    left: Box<dyn Condition>,
    right: Box<dyn Condition>,
}

impl And {
    /// Create an AND combinator over two children
    pub fn new(left: impl Condition + 'static, right: impl Condition + 'static) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Condition for And {
    fn eval(&self, params: &dyn Params) -> bool {
        self.left.eval(params) && self.right.eval(params)
    }
}

/// Combinator that is true when at least one child is true
#[derive(Debug)]
pub struct Or {
    left: Box<dyn Condition>,
    right: Box<dyn Condition>,
}

impl Or {
    /// Create an OR combinator over two children
    pub fn new(left: impl Condition + 'static, right: impl Condition + 'static) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Condition for Or {
    fn eval(&self, params: &dyn Params) -> bool {
        self.left.eval(params) || self.right.eval(params)
    }
}

/// Combinator that inverts its single child
#[derive(Debug)]
pub struct Not {
    inner: Box<dyn Condition>,
}

impl Not {
    /// Create a NOT combinator over one child
    pub fn new(inner: impl Condition + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Condition for Not {
    fn eval(&self, params: &dyn Params) -> bool {
        !self.inner.eval(params)
    }
}

/// Fluent tree construction for any condition.
///
/// ```
/// use sift_core::{Compare, Condition, ConditionExt};
/// use std::collections::HashMap;
///
/// let filter = Compare::eq("lang", "EN").or(Compare::eq("foo", "bar").not());
///
/// let mut params = HashMap::new();
/// params.insert("lang".to_string(), "EN".to_string());
/// assert!(filter.eval(&params));
/// ```
pub trait ConditionExt: Condition + Sized + 'static {
    /// Combine with another condition under AND
    fn and(self, other: impl Condition + 'static) -> And {
        And::new(self, other)
    }

    /// Combine with another condition under OR
    fn or(self, other: impl Condition + 'static) -> Or {
        Or::new(self, other)
    }

    /// Invert this condition
    fn not(self) -> Not {
        Not::new(self)
    }
}

impl<T: Condition + 'static> ConditionExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{False, True};
    use std::collections::HashMap;

    fn empty_params() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn test_and_truth_table() {
        let p = empty_params();
        assert!(And::new(True, True).eval(&p));
        assert!(!And::new(True, False).eval(&p));
        assert!(!And::new(False, True).eval(&p));
        assert!(!And::new(False, False).eval(&p));
    }

    #[test]
    fn test_or_truth_table() {
        let p = empty_params();
        assert!(Or::new(True, True).eval(&p));
        assert!(Or::new(True, False).eval(&p));
        assert!(Or::new(False, True).eval(&p));
        assert!(!Or::new(False, False).eval(&p));
    }

    #[test]
    fn test_not_inversion() {
        let p = empty_params();
        assert!(!Not::new(True).eval(&p));
        assert!(Not::new(False).eval(&p));
    }

    #[test]
    fn test_double_negation() {
        let p = empty_params();
        assert!(Not::new(Not::new(True)).eval(&p));
    }

    #[test]
    fn test_fluent_construction() {
        let p = empty_params();
        assert!(True.and(True).eval(&p));
        assert!(False.or(True).eval(&p));
        assert!(False.not().eval(&p));
        assert!(True.and(True.or(False)).and(False.not()).eval(&p));
    }

    #[test]
    fn test_nested_combinators() {
        let p = empty_params();
        // (true AND (false OR NOT false)) -> true
        let tree = And::new(True, Or::new(False, Not::new(False)));
        assert!(tree.eval(&p));
    }
}
