//! Port constraints.
//!
//! A named constraint is checked against the port with exactly that name.
//! An unnamed constraint selects ports by their semantic annotations:
//! - criteria are the semantic constraints with `minOccurs >= 1`, which make
//!   the selection mandatory;
//! - if there are none, the optional ones (`minOccurs = 0`, `maxOccurs != 0`)
//!   are used instead;
//! - with no semantic constraints at all, every port is selected.
//!
//! Annotation and depth checks then run over exactly the selected ports.

use crate::assertion::{Assertion, ValidationReport};
use crate::component::{Annotated, Component, Port, PortDirection};
use crate::error::Result;
use crate::profile::{BoundCheck, Bounds, PortConstraint, SemanticConstraint};

use super::annotation;
use super::semantic::{self, SemanticSatisfier};

/// Validates the constraints on the ports of one direction.
///
/// # Errors
///
/// Propagates semantic checker errors (undeclared ontologies).
pub fn validate(
    component: &Component,
    direction: PortDirection,
    constraints: &[PortConstraint],
    satisfier: &SemanticSatisfier<'_>,
) -> Result<ValidationReport> {
    let mut report = ValidationReport::new();
    let ports = component.ports(direction);
    for constraint in constraints {
        match &constraint.name {
            Some(name) => validate_named(ports, direction, name, constraint, satisfier, &mut report)?,
            None => validate_selected(ports, direction, constraint, satisfier, &mut report)?,
        }
    }
    Ok(report)
}

fn validate_named(
    ports: &[Port],
    direction: PortDirection,
    name: &str,
    constraint: &PortConstraint,
    satisfier: &SemanticSatisfier<'_>,
    report: &mut ValidationReport,
) -> Result<()> {
    let Some(port) = ports.iter().find(|p| p.name == name) else {
        let description = format!("{direction} port \"{name}\"");
        if constraint.occurs.min > 0 {
            report.push(Assertion::fail(format!("required {description} is missing")));
        } else {
            report.push(Assertion::pass(format!("optional {description} is absent")));
        }
        for kind in &constraint.annotations {
            report.push(annotation::unchecked(&description, *kind));
        }
        for semantic in &constraint.semantic {
            report.push(semantic::unchecked(&description, semantic));
        }
        return Ok(());
    };

    report.push(Assertion::pass(format!("{} is present", port.describe())));
    for kind in &constraint.annotations {
        report.push(annotation::check(port, *kind));
    }
    for semantic in &constraint.semantic {
        satisfier.check(port, semantic, report)?;
    }
    report.push(check_depth(port, constraint.depth));
    Ok(())
}

fn validate_selected(
    ports: &[Port],
    direction: PortDirection,
    constraint: &PortConstraint,
    satisfier: &SemanticSatisfier<'_>,
    report: &mut ValidationReport,
) -> Result<()> {
    let (criteria, mandatory) = selection_criteria(&constraint.semantic);

    let mut selected = Vec::new();
    'ports: for port in ports {
        for criterion in &criteria {
            if !satisfier.matches(port, criterion)? {
                continue 'ports;
            }
        }
        selected.push(port);
    }

    if mandatory && selected.is_empty() {
        report.push(Assertion::fail(format!(
            "no {direction} port matches semantic constraints"
        )));
        return Ok(());
    }

    for port in selected {
        for kind in &constraint.annotations {
            report.push(annotation::check(port, *kind));
        }
        report.push(check_depth(port, constraint.depth));
    }
    Ok(())
}

/// Picks the semantic constraints that select ports, and whether the
/// selection is mandatory.
#[must_use]
pub fn selection_criteria(semantic: &[SemanticConstraint]) -> (Vec<&SemanticConstraint>, bool) {
    let mandatory: Vec<_> = semantic.iter().filter(|c| c.occurs.min >= 1).collect();
    if !mandatory.is_empty() {
        return (mandatory, true);
    }
    let optional = semantic
        .iter()
        .filter(|c| c.occurs.min == 0 && !c.occurs.forbids_all())
        .collect();
    (optional, false)
}

/// Checks a port's depth against the allowed range. A port without a
/// recorded depth only warns.
#[must_use]
pub fn check_depth(port: &Port, depth: Bounds) -> Assertion {
    let description = port.describe();
    let Some(actual) = port.depth else {
        return Assertion::warn(format!("{description} has no recorded depth"));
    };
    match depth.check(actual) {
        BoundCheck::Within => {
            Assertion::pass(format!("{description} has depth {actual}, within {depth}"))
        }
        BoundCheck::Below => Assertion::fail(format!(
            "{description} has depth {actual}, below the minimum {}",
            depth.min
        )),
        BoundCheck::Above => Assertion::fail(format!(
            "{description} has depth {actual}, above the maximum {}",
            depth.max
        )),
    }
}
