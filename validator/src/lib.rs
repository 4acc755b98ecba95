//! Taverna component validator.
//!
//! Checks a workflow component (a t2flow document) against a chain of
//! component profiles and reports every finding as a [`Pass`], [`Warn`] or
//! [`Fail`] assertion.
//!
//! # Validation Scope
//!
//! | Constraint | Checked against |
//! |------------|-----------------|
//! | Basic annotations | author, description, title, example records |
//! | Semantic annotations | RDF fragment plus the layer's ontologies |
//! | Ports | exact name or semantic selection, then depth |
//! | Activities | type alias, semantic narrowing, occurrence range |
//!
//! # Entry Point
//!
//! ```no_run
//! use component_validator::{Validator, ValidatorConfig};
//!
//! let validator = Validator::new(ValidatorConfig::from_env()).expect("HTTP client");
//! let report = validator
//!     .validate("component.t2flow", "profile.xml")
//!     .expect("inputs readable");
//! println!("{}", component_validator::report::render_text(&report));
//! ```
//!
//! [`Pass`]: Assertion::Pass
//! [`Warn`]: Assertion::Warn
//! [`Fail`]: Assertion::Fail

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod assertion;
pub mod component;
pub mod config;
pub mod error;
pub mod ontology;
pub mod profile;
pub mod rdf;
pub mod report;
pub mod source;
pub mod terms;
pub mod tests;
pub mod validators;
pub mod xml;

pub use assertion::{Assertion, ValidationReport};
pub use component::Component;
pub use config::ValidatorConfig;
pub use error::{Result, ValidatorError};
pub use ontology::OntologyCache;
pub use profile::{Profile, ProfileResolver};
pub use report::ReportFormat;
pub use source::{Fetcher, Loader};

use tracing::info;
use url::Url;

/// Runs validations with one configuration and one loader.
pub struct Validator {
    config: ValidatorConfig,
    loader: Box<dyn Loader>,
}

impl Validator {
    /// Creates a validator that fetches from disk and over HTTP.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::Client`] if the HTTP client cannot be built.
    pub fn new(config: ValidatorConfig) -> Result<Self> {
        let fetcher = Fetcher::new(&config)?;
        Ok(Self::with_loader(config, Box::new(fetcher)))
    }

    /// Creates a validator that fetches through `loader`.
    #[must_use]
    pub fn with_loader(config: ValidatorConfig, loader: Box<dyn Loader>) -> Self {
        Self { config, loader }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates the component at `component` against the profile at
    /// `profile`. Both may be absolute URLs or paths relative to the working
    /// directory.
    ///
    /// # Errors
    ///
    /// Fails if either source cannot be resolved, or for any error of
    /// [`Validator::validate_urls`].
    pub fn validate(&self, component: &str, profile: &str) -> Result<ValidationReport> {
        let cwd = source::working_directory()?;
        let component = source::resolve(component, &cwd)?;
        let profile = source::resolve(profile, &cwd)?;
        self.validate_urls(&component, &profile)
    }

    /// Validates the component at `component` against the profile chain
    /// starting at `profile`.
    ///
    /// # Errors
    ///
    /// Fails if the component, any profile in the chain, or any ontology the
    /// chain declares cannot be loaded or parsed. No partial report is
    /// returned.
    pub fn validate_urls(&self, component: &Url, profile: &Url) -> Result<ValidationReport> {
        let fetched = self.loader.load(component, source::XML_ACCEPT)?;
        let component = Component::from_xml(&fetched.content, fetched.location.as_str())?;

        let base_profile = source::resolve(&self.config.base_profile, &source::working_directory()?)?;
        let chain = ProfileResolver::new(self.loader.as_ref(), base_profile).resolve_chain(profile)?;

        let mut cache = OntologyCache::new(self.loader.as_ref());
        validate_component(&component, &chain, &mut cache)
    }
}

/// Validates `component` against every layer of `chain`, in order, loading
/// each layer's ontologies through `cache`.
///
/// # Errors
///
/// Fails if an ontology cannot be loaded or parsed.
pub fn validate_component(
    component: &Component,
    chain: &[Profile],
    cache: &mut OntologyCache<'_>,
) -> Result<ValidationReport> {
    let mut report = ValidationReport::new();
    for profile in chain {
        let ontologies = cache.resolve_layer(profile)?;
        report.extend(validators::component::validate(component, profile, &ontologies)?);
    }
    info!(
        layers = chain.len(),
        assertions = report.len(),
        satisfied = report.all_satisfied(),
        "validation finished"
    );
    Ok(report)
}
