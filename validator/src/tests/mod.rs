//! Test support: document fixtures and an in-memory [`Loader`].
//!
//! Both are public so integration tests and downstream tools can run the
//! validator without touching the filesystem or the network.

pub mod fixtures;

use std::cell::RefCell;
use std::collections::HashMap;

use url::Url;

use crate::error::{Result, ValidatorError};
use crate::source::{Fetched, Loader};

/// A [`Loader`] serving documents from memory and counting every load.
#[derive(Debug, Default)]
pub struct MemoryLoader {
    documents: HashMap<String, (String, Option<String>)>,
    loads: RefCell<HashMap<String, usize>>,
}

impl MemoryLoader {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `content` at `location`, with a media type inferred from the
    /// location's extension.
    #[must_use]
    pub fn with(self, location: &str, content: impl Into<String>) -> Self {
        let media_type = if location.ends_with(".ttl") {
            Some("text/turtle")
        } else if location.ends_with(".rdf") || location.ends_with(".owl") {
            Some("application/rdf+xml")
        } else {
            None
        };
        self.with_media_type(location, content, media_type)
    }

    /// Serves `content` at `location` with an explicit media type.
    #[must_use]
    pub fn with_media_type(
        mut self,
        location: &str,
        content: impl Into<String>,
        media_type: Option<&str>,
    ) -> Self {
        self.documents.insert(
            location.to_string(),
            (content.into(), media_type.map(str::to_string)),
        );
        self
    }

    /// How many times `location` has been requested.
    #[must_use]
    pub fn loads(&self, location: &str) -> usize {
        self.loads.borrow().get(location).copied().unwrap_or(0)
    }
}

impl Loader for MemoryLoader {
    fn load(&self, location: &Url, _accept: &str) -> Result<Fetched> {
        *self
            .loads
            .borrow_mut()
            .entry(location.to_string())
            .or_insert(0) += 1;
        let (content, media_type) = self
            .documents
            .get(location.as_str())
            .ok_or_else(|| ValidatorError::NotFound(location.to_string()))?;
        Ok(Fetched {
            location: location.clone(),
            content: content.clone(),
            media_type: media_type.clone(),
        })
    }
}
