//! Semantic annotation checks.
//!
//! An entity's semantic annotation is an RDF fragment. A constraint is
//! satisfied when the fragment has a statement with the constraint's
//! predicate and either the fixed object value, or a first object that
//! belongs to the required class. Class membership is decided in two steps:
//! the fragment itself, then the layer's ontology.

use sophia_api::term::{SimpleTerm, Term};
use tracing::warn;

use crate::assertion::{Assertion, ValidationReport};
use crate::component::Annotated;
use crate::error::{Result, ValidatorError};
use crate::ontology::LayerOntologies;
use crate::profile::{BoundCheck, SemanticConstraint};
use crate::rdf::Graph;

/// Outcome of reading an entity's fragment.
enum Fragment {
    Absent,
    Empty,
    Unreadable,
    Parsed(Graph),
}

/// Checks semantic constraints of one profile layer.
pub struct SemanticSatisfier<'a> {
    profile: &'a str,
    ontologies: &'a LayerOntologies,
    base: &'a str,
}

impl<'a> SemanticSatisfier<'a> {
    /// Creates a satisfier for the layer `profile`, resolving fragments'
    /// relative IRIs against `base` (the component's location).
    #[must_use]
    pub fn new(profile: &'a str, ontologies: &'a LayerOntologies, base: &'a str) -> Self {
        Self {
            profile,
            ontologies,
            base,
        }
    }

    /// Checks `constraint` against `entity`, appending one assertion, or two
    /// when the constraint is satisfied (match and cardinality).
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::UndeclaredOntology`] if the constraint's
    /// ontology is not part of this layer.
    pub fn check(
        &self,
        entity: &dyn Annotated,
        constraint: &SemanticConstraint,
        report: &mut ValidationReport,
    ) -> Result<()> {
        let ontology = self.ontology(constraint)?;
        let description = entity.describe();
        match self.fragment(entity) {
            Fragment::Absent => report.push(unchecked(&description, constraint)),
            Fragment::Empty => report.push(Assertion::fail(format!(
                "{description} has an empty semantic annotation, cannot satisfy {constraint}"
            ))),
            Fragment::Unreadable => report.push(Assertion::fail(format!(
                "{description} has an unreadable semantic annotation, cannot satisfy {constraint}"
            ))),
            Fragment::Parsed(graph) if satisfies(&graph, constraint, ontology) => {
                report.push(Assertion::pass(format!("{description} satisfies {constraint}")));
                report.push(cardinality(&description, &graph, constraint));
            }
            Fragment::Parsed(_) => report.push(Assertion::fail(format!(
                "{description} does not satisfy {constraint}"
            ))),
        }
        Ok(())
    }

    /// Returns true if `entity` has a readable fragment satisfying
    /// `constraint`. Used to select ports and activities; entities without a
    /// usable fragment never match.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::UndeclaredOntology`] if the constraint's
    /// ontology is not part of this layer.
    pub fn matches(&self, entity: &dyn Annotated, constraint: &SemanticConstraint) -> Result<bool> {
        let ontology = self.ontology(constraint)?;
        Ok(match self.fragment(entity) {
            Fragment::Parsed(graph) => satisfies(&graph, constraint, ontology),
            Fragment::Absent | Fragment::Empty | Fragment::Unreadable => false,
        })
    }

    fn ontology(&self, constraint: &SemanticConstraint) -> Result<&Graph> {
        self.ontologies
            .get(&constraint.ontology)
            .map(|graph| graph.as_ref())
            .ok_or_else(|| ValidatorError::UndeclaredOntology {
                profile: self.profile.to_string(),
                ontology: constraint.ontology.clone(),
            })
    }

    fn fragment(&self, entity: &dyn Annotated) -> Fragment {
        let Some(annotation) = entity.annotations().semantic() else {
            return Fragment::Absent;
        };
        let text = annotation.text();
        if text.trim().is_empty() {
            return Fragment::Empty;
        }
        match Graph::parse(text, annotation.syntax(), Some(self.base), &entity.describe()) {
            Ok(graph) => Fragment::Parsed(graph),
            Err(err) => {
                warn!(entity = %entity.describe(), error = %err, "cannot parse semantic annotation");
                Fragment::Unreadable
            }
        }
    }
}

/// Warning for a constraint that cannot be checked because the entity has
/// no semantic annotation.
#[must_use]
pub fn unchecked(entity: &str, constraint: &SemanticConstraint) -> Assertion {
    Assertion::warn(format!(
        "{entity}: cannot check {constraint}, no semantic annotations present"
    ))
}

/// The match test: does `fragment` satisfy `constraint`?
#[must_use]
pub fn satisfies(fragment: &Graph, constraint: &SemanticConstraint, ontology: &Graph) -> bool {
    if let Some(value) = &constraint.value {
        return fragment.contains(&constraint.predicate, value);
    }
    let Some(first) = fragment.objects(&constraint.predicate).next() else {
        return false;
    };
    match &constraint.class {
        Some(class) => is_member(fragment, first, class, ontology),
        None => true,
    }
}

/// Two-step class membership of `object`.
///
/// A literal is a member when its datatype is `class`. A resource is a
/// member when the fragment types it as `class`, or failing that when it is
/// an individual of the ontology whose asserted types are `class` or a
/// subclass of it.
#[must_use]
pub fn is_member(fragment: &Graph, object: &SimpleTerm<'_>, class: &str, ontology: &Graph) -> bool {
    if object.is_literal() {
        return object.datatype().is_some_and(|datatype| datatype.as_str() == class);
    }
    fragment.has_type(object, class) || is_individual_of(ontology, object, class)
}

fn is_individual_of(ontology: &Graph, resource: &SimpleTerm<'_>, class: &str) -> bool {
    if resource.is_blank_node() || !ontology.is_typed(resource) {
        warn!(?resource, class, "resource is not an individual of the ontology");
        return false;
    }
    ontology.is_instance_of(resource, class)
}

/// Checks how many statements match `constraint` against its occurrence
/// range.
#[must_use]
pub fn cardinality(entity: &str, fragment: &Graph, constraint: &SemanticConstraint) -> Assertion {
    let count = fragment.count(&constraint.predicate, constraint.value.as_deref());
    let counted = u32::try_from(count).unwrap_or(u32::MAX);
    let occurs = constraint.occurs;
    match occurs.check(counted) {
        BoundCheck::Within => Assertion::pass(format!(
            "{entity} has {count} <{}> statements, within {occurs}",
            constraint.predicate
        )),
        BoundCheck::Below => Assertion::fail(format!(
            "{entity} has too few <{}> statements: {count}, minimum {}",
            constraint.predicate, occurs.min
        )),
        BoundCheck::Above => Assertion::fail(format!(
            "{entity} has too many <{}> statements: {count}, maximum {}",
            constraint.predicate, occurs.max
        )),
    }
}
