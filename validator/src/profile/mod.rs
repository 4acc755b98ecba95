//! Component profiles: layered constraint documents.
//!
//! A profile declares the annotations, ports and activities a component must
//! have, and the ontologies its semantic constraints are phrased in. Profiles
//! can extend another profile; [`resolver`] turns a starting profile into the
//! ordered chain of layers a run validates against.
//!
//! - [`reader`] parses the profile XML into the types below.
//! - [`resolver`] loads profiles and builds the chain.

pub mod reader;
pub mod resolver;

use std::collections::BTreeMap;
use std::fmt;

use url::Url;

use crate::terms::{ActivityType, AnnotationKind};

pub use resolver::ProfileResolver;

/// Namespace of component profile documents.
pub const PROFILE_NAMESPACE: &str = "http://ns.taverna.org.uk/2012/component/profile";

/// Upper end of an occurrence or depth range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    /// At most this many.
    Bounded(u32),
    /// No upper limit.
    Unbounded,
}

impl UpperBound {
    /// Returns true if `value` does not exceed the bound.
    #[must_use]
    pub fn admits(self, value: u32) -> bool {
        match self {
            UpperBound::Bounded(max) => value <= max,
            UpperBound::Unbounded => true,
        }
    }
}

impl fmt::Display for UpperBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpperBound::Bounded(max) => write!(f, "{max}"),
            UpperBound::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// Where a value falls relative to [`Bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundCheck {
    /// `min <= value <= max`.
    Within,
    /// `value < min`.
    Below,
    /// `value > max`.
    Above,
}

/// An inclusive range with an optional upper limit, used for both
/// occurrence counts and port depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Lower limit.
    pub min: u32,
    /// Upper limit.
    pub max: UpperBound,
}

impl Bounds {
    /// Exactly one.
    pub const ONE: Bounds = Bounds::new(1, UpperBound::Bounded(1));
    /// At least one.
    pub const AT_LEAST_ONE: Bounds = Bounds::new(1, UpperBound::Unbounded);
    /// Any number, including none.
    pub const ANY: Bounds = Bounds::new(0, UpperBound::Unbounded);

    /// Creates a range.
    #[must_use]
    pub const fn new(min: u32, max: UpperBound) -> Self {
        Self { min, max }
    }

    /// Classifies `value` against the range.
    #[must_use]
    pub fn check(self, value: u32) -> BoundCheck {
        if value < self.min {
            BoundCheck::Below
        } else if self.max.admits(value) {
            BoundCheck::Within
        } else {
            BoundCheck::Above
        }
    }

    /// Returns true if the range forbids any occurrence.
    #[must_use]
    pub fn forbids_all(self) -> bool {
        self.max == UpperBound::Bounded(0)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// A loaded profile layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Profile identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Reference to the parent profile, relative to [`Profile::location`].
    pub extends: Option<String>,
    /// Ontology references by layer-local id. Values are relative to
    /// [`Profile::location`].
    pub ontologies: BTreeMap<String, String>,
    /// Constraints on the component.
    pub component: ComponentConstraint,
    /// Where the profile was loaded from.
    pub location: Url,
}

/// Everything a profile requires of a component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentConstraint {
    /// Annotation kinds the component itself must carry.
    pub annotations: Vec<AnnotationKind>,
    /// Semantic constraints on the component's own fragment.
    pub semantic: Vec<SemanticConstraint>,
    /// Input port constraints, in document order.
    pub input_ports: Vec<PortConstraint>,
    /// Output port constraints, in document order.
    pub output_ports: Vec<PortConstraint>,
    /// Activity constraints, in document order.
    pub activities: Vec<ActivityConstraint>,
}

/// Constraint on input or output ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortConstraint {
    /// Exact port name; `None` selects ports by their semantic annotations.
    pub name: Option<String>,
    /// How many such ports there may be.
    pub occurs: Bounds,
    /// Allowed list depth.
    pub depth: Bounds,
    /// Required annotation kinds.
    pub annotations: Vec<AnnotationKind>,
    /// Semantic constraints.
    pub semantic: Vec<SemanticConstraint>,
}

/// Constraint on the RDF fragment attached to an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticConstraint {
    /// Layer-local ontology id.
    pub ontology: String,
    /// Predicate IRI.
    pub predicate: String,
    /// Required object IRI; `None` accepts any object.
    pub value: Option<String>,
    /// Required class of the object.
    pub class: Option<String>,
    /// How many matching statements there may be.
    pub occurs: Bounds,
}

impl fmt::Display for SemanticConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.predicate)?;
        if let Some(value) = &self.value {
            write!(f, " <{value}>")?;
        } else if let Some(class) = &self.class {
            write!(f, " of class <{class}>")?;
        }
        Ok(())
    }
}

/// Constraint on the activities of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityConstraint {
    /// Alias as written in the profile.
    pub type_alias: Option<String>,
    /// Resolved type; `None` matches every activity.
    pub activity_type: Option<ActivityType>,
    /// How many matching activities there may be.
    pub occurs: Bounds,
    /// Annotation kinds each matching activity must carry.
    pub annotations: Vec<AnnotationKind>,
    /// Semantic constraints narrowing the matching activities.
    pub semantic: Vec<SemanticConstraint>,
}

impl ActivityConstraint {
    /// Description of the activities the constraint applies to.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.activity_type {
            Some(kind) => format!("{kind} activities"),
            None => "activities".to_string(),
        }
    }
}
