//! Constraint validators, one module per kind of constraint.
//!
//! [`component::validate`] runs one profile layer in a fixed order: basic
//! annotations, semantic annotations, input ports, output ports,
//! activities. The other modules each check one kind of constraint.

pub mod activity;
pub mod annotation;
pub mod component;
pub mod port;
pub mod semantic;
