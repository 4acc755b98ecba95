//! RDF graphs parsed with sophia.
//!
//! Parsed triples are collected into sophia's `Vec` graph, which keeps the
//! order the parser produced them in, so "the first object of a predicate"
//! is well defined and repeated runs see identical graphs. Lookups go
//! through [`sophia_api::graph::Graph::triples_matching`].

use std::collections::HashSet;

use sophia_api::graph::Graph as _;
use sophia_api::ns::{rdf, rdfs};
use sophia_api::parser::TripleParser;
use sophia_api::source::TripleSource;
use sophia_api::term::matcher::Any;
use sophia_api::term::{IriRef, SimpleTerm, Term};
use sophia_iri::Iri;
use sophia_turtle::parser::turtle::TurtleParser;
use sophia_xml::parser::RdfXmlParser;

use crate::error::{Result, ValidatorError};

/// Triples in parse order.
pub type Triples = Vec<[SimpleTerm<'static>; 3]>;

/// Concrete syntaxes the validator reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfSyntax {
    /// Turtle (and the Turtle-compatible subset of N3).
    Turtle,
    /// RDF/XML.
    RdfXml,
}

impl RdfSyntax {
    /// Picks a syntax from a media type, defaulting to `fallback`.
    #[must_use]
    pub fn from_media_type(media_type: Option<&str>, fallback: RdfSyntax) -> RdfSyntax {
        match media_type.map(|m| m.trim().to_ascii_lowercase()) {
            Some(m) if m.contains("turtle") || m.contains("n3") => RdfSyntax::Turtle,
            Some(m) if m.contains("xml") => RdfSyntax::RdfXml,
            _ => fallback,
        }
    }
}

/// A parsed document, with the queries the semantic checks need.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: Triples,
}

impl Graph {
    /// Parses `src` in the given syntax. Relative IRIs resolve against `base`
    /// when one is given; `location` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::Rdf`] if the text is not valid in `syntax` or
    /// `base` is not an absolute IRI.
    pub fn parse(src: &str, syntax: RdfSyntax, base: Option<&str>, location: &str) -> Result<Graph> {
        let rdf_error = |message: String| ValidatorError::Rdf {
            location: location.to_string(),
            message,
        };
        let base = base
            .map(|b| Iri::new(b.to_string()).map_err(|e| rdf_error(e.to_string())))
            .transpose()?;
        let triples: Triples = match syntax {
            RdfSyntax::Turtle => TurtleParser { base }
                .parse_str(src)
                .collect_triples()
                .map_err(|e| rdf_error(e.to_string()))?,
            RdfSyntax::RdfXml => RdfXmlParser { base }
                .parse_str(src)
                .collect_triples()
                .map_err(|e| rdf_error(e.to_string()))?,
        };
        Ok(Graph { triples })
    }

    /// Number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Objects of every triple with `predicate`, in parse order.
    pub fn objects<'a>(
        &'a self,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a SimpleTerm<'static>> + 'a {
        self.triples
            .triples_matching(Any, [IriRef::new_unchecked(predicate)], Any)
            .filter_map(|t| t.ok())
            .map(|[_, _, o]| o)
    }

    /// Number of triples with `predicate`, and with the IRI `object` if
    /// given.
    #[must_use]
    pub fn count(&self, predicate: &str, object: Option<&str>) -> usize {
        let p = [IriRef::new_unchecked(predicate)];
        match object {
            Some(o) => self
                .triples
                .triples_matching(Any, p, [IriRef::new_unchecked(o)])
                .count(),
            None => self.triples.triples_matching(Any, p, Any).count(),
        }
    }

    /// Returns true if some triple has exactly this predicate and IRI object.
    #[must_use]
    pub fn contains(&self, predicate: &str, object: &str) -> bool {
        self.count(predicate, Some(object)) > 0
    }

    /// IRIs of the classes `subject` is asserted (`rdf:type`) to belong to.
    pub fn types_of<T: Term>(&self, subject: T) -> Vec<String> {
        self.triples
            .triples_matching([subject], [rdf::type_], Any)
            .filter_map(|t| t.ok())
            .filter_map(|[_, _, o]| o.iri().map(|iri| iri.as_str().to_string()))
            .collect()
    }

    /// Returns true if `subject` is directly typed as `class`.
    #[must_use]
    pub fn has_type<T: Term>(&self, subject: T, class: &str) -> bool {
        self.triples
            .triples_matching([subject], [rdf::type_], [IriRef::new_unchecked(class)])
            .next()
            .is_some()
    }

    /// Returns true if `subject` has at least one `rdf:type`.
    #[must_use]
    pub fn is_typed<T: Term>(&self, subject: T) -> bool {
        self.triples
            .triples_matching([subject], [rdf::type_], Any)
            .next()
            .is_some()
    }

    /// Returns true if `subject` is typed as `class` or as any class that is
    /// a transitive `rdfs:subClassOf` of it.
    #[must_use]
    pub fn is_instance_of<T: Term>(&self, subject: T, class: &str) -> bool {
        let mut seen = HashSet::new();
        let mut pending = self.types_of(subject);
        while let Some(current) = pending.pop() {
            if current == class {
                return true;
            }
            if !seen.insert(current.clone()) {
                continue;
            }
            pending.extend(self.superclasses(&current));
        }
        false
    }

    fn superclasses(&self, class: &str) -> Vec<String> {
        self.triples
            .triples_matching([IriRef::new_unchecked(class)], [rdfs::subClassOf], Any)
            .filter_map(|t| t.ok())
            .filter_map(|[_, _, o]| o.iri().map(|iri| iri.as_str().to_string()))
            .collect()
    }
}
