//! Document fixtures shared by unit and integration tests.
//!
//! Each constant holds one complete document: a t2flow component, two
//! profiles forming a chain, and the ontology their semantic constraints
//! refer to. Terms live in the `http://example.org/components#` namespace.

mod component;
mod ontology;
mod profiles;

pub use component::COMPONENT;
pub use ontology::ONTOLOGY;
pub use profiles::{BASE_PROFILE, PROFILE};

/// Namespace of the example ontology terms.
pub const EX: &str = "http://example.org/components#";
