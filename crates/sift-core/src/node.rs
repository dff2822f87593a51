//! The condition node contract and constant nodes

use crate::params::Params;
use std::fmt;

/// A node in a predicate tree.
///
/// Every node, leaf or combinator, evaluates to a boolean given a set of
/// parameters. Evaluation is a pure function of the node's own fields, its
/// children and the supplied parameters: nodes are immutable once built, so
/// the same tree can be evaluated repeatedly, and concurrently from multiple
/// threads as long as the `Params` implementation supports concurrent reads.
///
/// New predicates are added by implementing this trait on a new type; the
/// evaluator never dispatches on a closed list of node kinds.
pub trait Condition: fmt::Debug + Send + Sync {
    /// Evaluate this node against the given parameters
    fn eval(&self, params: &dyn Params) -> bool;
}

impl Condition for Box<dyn Condition> {
    fn eval(&self, params: &dyn Params) -> bool {
        self.as_ref().eval(params)
    }
}

/// Constant node that always evaluates to `true`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct True;

impl Condition for True {
    fn eval(&self, _params: &dyn Params) -> bool {
        true
    }
}

/// Constant node that always evaluates to `false`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct False;

impl Condition for False {
    fn eval(&self, _params: &dyn Params) -> bool {
        false
    }
}
