//! Basic annotation presence.

use crate::assertion::Assertion;
use crate::component::Annotated;
use crate::terms::AnnotationKind;

/// Passes if `entity` carries at least one annotation of `kind`.
#[must_use]
pub fn check(entity: &dyn Annotated, kind: AnnotationKind) -> Assertion {
    if entity.annotations().has(kind) {
        Assertion::pass(format!("{} has {kind} annotation", entity.describe()))
    } else {
        Assertion::fail(format!("{} is missing {kind} annotation", entity.describe()))
    }
}

/// Warns that a required annotation on an absent entity was not checked.
#[must_use]
pub fn unchecked(entity: &str, kind: AnnotationKind) -> Assertion {
    Assertion::warn(format!("{entity} is absent, {kind} annotation not checked"))
}
