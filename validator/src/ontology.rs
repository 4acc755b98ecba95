//! Per-run ontology cache.
//!
//! Ontologies are fetched once per source URL and shared read-only by every
//! profile layer that declares them. The cache belongs to a single run and
//! is passed explicitly; nothing is kept between runs. A fetch or parse
//! failure aborts the run and leaves nothing cached for that URL.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::profile::Profile;
use crate::rdf::{Graph, RdfSyntax};
use crate::source::{self, Loader, RDF_ACCEPT};

/// Ontology graphs of one profile layer, by layer-local id.
pub type LayerOntologies = BTreeMap<String, Rc<Graph>>;

/// Memoizes ontology graphs by source URL.
pub struct OntologyCache<'a> {
    loader: &'a dyn Loader,
    graphs: HashMap<String, Rc<Graph>>,
}

impl<'a> OntologyCache<'a> {
    /// Creates an empty cache fetching through `loader`.
    #[must_use]
    pub fn new(loader: &'a dyn Loader) -> Self {
        Self {
            loader,
            graphs: HashMap::new(),
        }
    }

    /// Returns the graph at `location`, fetching and parsing it on first use.
    ///
    /// Content is parsed as Turtle when served as Turtle and as RDF/XML
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns the loader's error if the ontology cannot be fetched, or
    /// [`ValidatorError::Rdf`](crate::ValidatorError::Rdf) if it cannot be
    /// parsed.
    pub fn resolve(&mut self, location: &Url) -> Result<Rc<Graph>> {
        if let Some(graph) = self.graphs.get(location.as_str()) {
            debug!(%location, "ontology cache hit");
            return Ok(Rc::clone(graph));
        }
        let fetched = self.loader.load(location, RDF_ACCEPT)?;
        let syntax = RdfSyntax::from_media_type(fetched.media_type.as_deref(), RdfSyntax::RdfXml);
        let graph = Rc::new(Graph::parse(
            &fetched.content,
            syntax,
            Some(fetched.location.as_str()),
            fetched.location.as_str(),
        )?);
        debug!(%location, statements = graph.len(), "ontology loaded");
        self.graphs
            .insert(location.as_str().to_string(), Rc::clone(&graph));
        Ok(graph)
    }

    /// Resolves every ontology `profile` declares, relative to the profile's
    /// own location.
    ///
    /// # Errors
    ///
    /// Fails if any declared ontology cannot be resolved, fetched or parsed.
    pub fn resolve_layer(&mut self, profile: &Profile) -> Result<LayerOntologies> {
        let mut layer = LayerOntologies::new();
        for (id, reference) in &profile.ontologies {
            let location = source::resolve(reference, &profile.location)?;
            layer.insert(id.clone(), self.resolve(&location)?);
        }
        Ok(layer)
    }

    /// Number of cached graphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// Returns true if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Returns true if the graph at `location` is cached.
    #[must_use]
    pub fn contains(&self, location: &Url) -> bool {
        self.graphs.contains_key(location.as_str())
    }
}
