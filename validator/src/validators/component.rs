//! One profile layer against one component.

use tracing::debug;

use crate::assertion::ValidationReport;
use crate::component::{Component, PortDirection};
use crate::error::Result;
use crate::ontology::LayerOntologies;
use crate::profile::Profile;

use super::semantic::SemanticSatisfier;
use super::{activity, annotation, port};

/// Validates `component` against a single profile layer.
///
/// Assertions come in a fixed order: component annotations, component
/// semantic annotations, input ports, output ports, activities.
///
/// # Errors
///
/// Returns an error only if a semantic constraint names an ontology that is
/// missing from `ontologies`.
pub fn validate(
    component: &Component,
    profile: &Profile,
    ontologies: &LayerOntologies,
) -> Result<ValidationReport> {
    let constraints = &profile.component;
    let satisfier = SemanticSatisfier::new(&profile.id, ontologies, &component.location);
    let mut report = ValidationReport::new();

    for kind in &constraints.annotations {
        report.push(annotation::check(component, *kind));
    }
    for semantic in &constraints.semantic {
        satisfier.check(component, semantic, &mut report)?;
    }
    report.extend(port::validate(
        component,
        PortDirection::Input,
        &constraints.input_ports,
        &satisfier,
    )?);
    report.extend(port::validate(
        component,
        PortDirection::Output,
        &constraints.output_ports,
        &satisfier,
    )?);
    for constraint in &constraints.activities {
        report.push(activity::validate(component, constraint, &satisfier)?);
    }

    debug!(
        profile = %profile.id,
        assertions = report.len(),
        failures = report.failure_count(),
        "layer validated"
    );
    Ok(report)
}
