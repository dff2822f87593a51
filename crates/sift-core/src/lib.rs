//! Sift Core - Predicate trees over string key-value parameters
//!
//! This crate provides the building blocks for boolean filters:
//! - The `Condition` trait every tree node implements
//! - Leaf predicates comparing one parameter against a literal
//! - Logical combinators (and/or/not) with short-circuit evaluation
//! - The `Params` lookup abstraction and reference adapters

pub mod error;
pub mod logic;
pub mod node;
pub mod operator;
pub mod ops;
pub mod params;

// Re-export commonly used types
pub use error::CoreError;
pub use logic::{And, ConditionExt, Not, Or};
pub use node::{Condition, False, True};
pub use operator::Operator;
pub use ops::compare::Compare;
pub use ops::date::{After, Before};
pub use ops::text::{Contains, EndsWith, StartsWith};
pub use params::{Params, QueryParams};
