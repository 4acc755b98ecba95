//! Error type shared by every stage of a validation run.
//!
//! Only input problems are errors: a missing or malformed document, a profile
//! that violates the profile schema, or an ontology that cannot be fetched.
//! Constraint violations are reported as [`Assertion`](crate::Assertion)s.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = ValidatorError> = std::result::Result<T, E>;

/// Fatal problems that abort a validation run.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The named document does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// A source identifier could not be turned into a fetchable location.
    #[error("cannot resolve source `{reference}`: {reason}")]
    InvalidSource {
        /// The identifier as given.
        reference: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A local file exists but could not be read.
    #[error("failed to read {location}")]
    Io {
        /// The file location.
        location: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A network fetch failed below the HTTP layer, or the body could not be decoded.
    #[error("failed to fetch {location}")]
    Fetch {
        /// The remote location.
        location: String,
        /// Underlying transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// A remote server answered with a non-success status.
    #[error("{location} answered HTTP {status}")]
    HttpStatus {
        /// The remote location.
        location: String,
        /// HTTP status code.
        status: u16,
    },

    /// The HTTP client could not be constructed.
    #[error("cannot build HTTP client")]
    Client(#[source] reqwest::Error),

    /// A document is not well-formed XML.
    #[error("malformed XML in {location}: {message}")]
    Xml {
        /// The document location.
        location: String,
        /// Parser diagnostic.
        message: String,
    },

    /// A profile document does not follow the profile schema.
    #[error("invalid profile {location}: {message}")]
    Profile {
        /// The profile location.
        location: String,
        /// What is wrong with it.
        message: String,
    },

    /// A component document lacks the structure the validator needs.
    #[error("invalid component {location}: {message}")]
    Component {
        /// The component location.
        location: String,
        /// What is wrong with it.
        message: String,
    },

    /// An RDF document (ontology or annotation) could not be parsed.
    #[error("cannot parse RDF from {location}: {message}")]
    Rdf {
        /// Where the RDF text came from.
        location: String,
        /// Parser diagnostic.
        message: String,
    },

    /// The structured report could not be serialized.
    #[error("cannot serialize report")]
    Serialize(#[from] serde_json::Error),

    /// A semantic constraint names an ontology its own profile does not declare.
    #[error("profile `{profile}` references undeclared ontology `{ontology}`")]
    UndeclaredOntology {
        /// Identifier of the profile layer.
        profile: String,
        /// The layer-local ontology id.
        ontology: String,
    },
}

impl ValidatorError {
    /// Returns true if this error means an input document does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ValidatorError::NotFound(_))
    }

    pub(crate) fn profile(location: impl Into<String>, message: impl Into<String>) -> Self {
        ValidatorError::Profile {
            location: location.into(),
            message: message.into(),
        }
    }

    pub(crate) fn component(location: impl Into<String>, message: impl Into<String>) -> Self {
        ValidatorError::Component {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Transient failures are worth retrying: timeouts, refused connections, 5xx answers.
    pub(crate) fn is_transient(&self) -> bool {
        match self {
            ValidatorError::Fetch { source, .. } => source.is_timeout() || source.is_connect(),
            ValidatorError::HttpStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
