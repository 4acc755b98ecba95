//! Assertion types: individual findings and the ordered list a run produces.

use std::fmt;

/// One finding of a validation run.
///
/// A `Warn` is a soft pass: it counts as satisfied but flags something the
/// validator could not check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assertion {
    /// The check passed.
    Pass(String),
    /// The check could not be carried out; treated as satisfied.
    Warn(String),
    /// The check failed.
    Fail(String),
}

impl Assertion {
    /// Creates a passing assertion.
    pub fn pass(text: impl Into<String>) -> Self {
        Assertion::Pass(text.into())
    }

    /// Creates a warning assertion.
    pub fn warn(text: impl Into<String>) -> Self {
        Assertion::Warn(text.into())
    }

    /// Creates a failing assertion.
    pub fn fail(text: impl Into<String>) -> Self {
        Assertion::Fail(text.into())
    }

    /// Returns true unless this is a failure.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        !matches!(self, Assertion::Fail(_))
    }

    /// Returns true for a satisfied-but-warning assertion.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Assertion::Warn(_))
    }

    /// Returns true if this is a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Assertion::Fail(_))
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Assertion::Pass(text) | Assertion::Warn(text) | Assertion::Fail(text) => text,
        }
    }

    /// Returns the category name used by structured output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Assertion::Pass(_) => "satisfied",
            Assertion::Warn(_) => "warning",
            Assertion::Fail(_) => "failed",
        }
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Assertion::Pass(_) => "[Y]",
            Assertion::Warn(_) => "[W]",
            Assertion::Fail(_) => "[N]",
        };
        write!(f, "{} {}", tag, self.text())
    }
}

/// Ordered findings of one validation run.
///
/// Assertions are kept in the order the checks ran; nothing downstream
/// reorders them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    assertions: Vec<Assertion>,
}

impl ValidationReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assertion.
    pub fn push(&mut self, assertion: Assertion) {
        self.assertions.push(assertion);
    }

    /// Appends every assertion of another report, preserving order.
    pub fn extend(&mut self, other: ValidationReport) {
        self.assertions.extend(other.assertions);
    }

    /// Returns the assertions in check order.
    #[must_use]
    pub fn assertions(&self) -> &[Assertion] {
        &self.assertions
    }

    /// Consumes the report, returning its assertions.
    #[must_use]
    pub fn into_assertions(self) -> Vec<Assertion> {
        self.assertions
    }

    /// Total number of assertions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assertions.len()
    }

    /// Returns true if no checks ran.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assertions.is_empty()
    }

    /// Number of satisfied assertions, warnings included.
    #[must_use]
    pub fn satisfied_count(&self) -> usize {
        self.assertions.iter().filter(|a| a.is_satisfied()).count()
    }

    /// Number of plain passes.
    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.assertions
            .iter()
            .filter(|a| matches!(a, Assertion::Pass(_)))
            .count()
    }

    /// Number of warnings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.assertions.iter().filter(|a| a.is_warning()).count()
    }

    /// Number of failures.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.assertions.iter().filter(|a| a.is_failure()).count()
    }

    /// Returns true if nothing failed.
    #[must_use]
    pub fn all_satisfied(&self) -> bool {
        self.failure_count() == 0
    }
}

impl From<Vec<Assertion>> for ValidationReport {
    fn from(assertions: Vec<Assertion>) -> Self {
        Self { assertions }
    }
}
