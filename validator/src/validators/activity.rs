//! Activity constraints.
//!
//! Activities are matched by type, then narrowed by each semantic
//! sub-constraint in turn. The survivors are counted against the occurrence
//! range, and each must carry the required annotations. Every constraint
//! yields exactly one assertion.

use crate::assertion::Assertion;
use crate::component::{Activity, Annotated, Component};
use crate::error::Result;
use crate::profile::{ActivityConstraint, BoundCheck};

use super::semantic::SemanticSatisfier;

/// Validates one activity constraint.
///
/// # Errors
///
/// Propagates semantic checker errors (undeclared ontologies).
pub fn validate(
    component: &Component,
    constraint: &ActivityConstraint,
    satisfier: &SemanticSatisfier<'_>,
) -> Result<Assertion> {
    let mut selected: Vec<&Activity> = component
        .activities
        .iter()
        .filter(|a| {
            constraint
                .activity_type
                .map_or(true, |kind| a.type_marker == kind.marker())
        })
        .collect();

    for semantic in &constraint.semantic {
        let mut kept = Vec::with_capacity(selected.len());
        for activity in selected {
            if satisfier.matches(activity, semantic)? {
                kept.push(activity);
            }
        }
        selected = kept;
    }

    let what = constraint.describe();
    let count = selected.len();
    let occurs = constraint.occurs;
    match occurs.check(u32::try_from(count).unwrap_or(u32::MAX)) {
        BoundCheck::Below => {
            return Ok(Assertion::fail(format!(
                "found {count} {what}, fewer than the minimum {}",
                occurs.min
            )))
        }
        BoundCheck::Above => {
            return Ok(Assertion::fail(format!(
                "found {count} {what}, more than the maximum {}",
                occurs.max
            )))
        }
        BoundCheck::Within => {}
    }

    if !constraint.semantic.is_empty() && selected.is_empty() {
        return Ok(Assertion::warn(format!(
            "no {what} satisfy the semantic constraints"
        )));
    }

    if let Some(kind) = constraint
        .annotations
        .iter()
        .find(|kind| selected.iter().any(|a| !a.annotations().has(**kind)))
    {
        return Ok(Assertion::fail(format!(
            "{what} are missing {kind} annotation"
        )));
    }
    Ok(Assertion::pass(format!(
        "{count} {what} within {occurs} with required annotations"
    )))
}
