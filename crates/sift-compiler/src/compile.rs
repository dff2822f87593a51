//! Compiles filter definitions into predicate trees

use crate::definition::{FilterDef, GroupDef, LeafDef};
use crate::error::{CompileError, Result};
use sift_core::{
    After, And, Before, Compare, Condition, Contains, EndsWith, Not, Operator, Or, StartsWith,
};

/// Compile a YAML document into a predicate tree
pub fn from_yaml(input: &str) -> Result<Box<dyn Condition>> {
    let def: FilterDef = serde_yaml::from_str(input)?;
    compile(&def)
}

/// Compile a JSON document into a predicate tree
pub fn from_json(input: &str) -> Result<Box<dyn Condition>> {
    let def: FilterDef = serde_json::from_str(input)?;
    compile(&def)
}

/// Compile a filter definition into a predicate tree.
///
/// Malformed definitions (groups with zero or multiple variants, empty
/// condition lists, operator/leaf mismatches) fail here, before any tree is
/// handed out for evaluation.
pub fn compile(def: &FilterDef) -> Result<Box<dyn Condition>> {
    match def {
        FilterDef::Leaf(leaf) => compile_leaf(leaf),
        FilterDef::Group(group) => compile_group(group),
    }
}

fn compile_leaf(leaf: &LeafDef) -> Result<Box<dyn Condition>> {
    let key = leaf.key.as_str();
    let value = leaf.value.as_str();

    let condition: Box<dyn Condition> = match leaf.op {
        Operator::Eq
        | Operator::Ne
        | Operator::Gt
        | Operator::Ge
        | Operator::Lt
        | Operator::Le => Box::new(Compare::new(key, leaf.op, value)?),
        Operator::Contains => Box::new(Contains::new(key, value)),
        Operator::StartsWith => Box::new(StartsWith::new(key, value)),
        Operator::EndsWith => Box::new(EndsWith::new(key, value)),
        Operator::Before => Box::new(Before::new(key, value)),
        Operator::After => Box::new(After::new(key, value)),
    };
    Ok(condition)
}

fn compile_group(group: &GroupDef) -> Result<Box<dyn Condition>> {
    match (&group.all, &group.any, &group.not) {
        (Some(items), None, None) => {
            fold_group(items, "all", |left, right| Box::new(And::new(left, right)))
        }
        (None, Some(items), None) => {
            fold_group(items, "any", |left, right| Box::new(Or::new(left, right)))
        }
        (None, None, Some(item)) => Ok(Box::new(Not::new(compile(item)?))),
        (None, None, None) => Err(CompileError::InvalidGroup(
            "group defines none of all/any/not".to_string(),
        )),
        _ => Err(CompileError::InvalidGroup(
            "group defines more than one of all/any/not".to_string(),
        )),
    }
}

/// Fold a non-empty list of definitions into a left-associated chain
fn fold_group<F>(items: &[FilterDef], variant: &str, combine: F) -> Result<Box<dyn Condition>>
where
    F: Fn(Box<dyn Condition>, Box<dyn Condition>) -> Box<dyn Condition>,
{
    let (first, rest) = match items.split_first() {
        Some(split) => split,
        None => return Err(CompileError::EmptyGroup(variant.to_string())),
    };

    let mut tree = compile(first)?;
    for item in rest {
        tree = combine(tree, compile(item)?);
    }
    Ok(tree)
}
