//! Component documents: the workflow artifact being validated.
//!
//! A component is read from a Taverna t2flow document. Only the top-level
//! dataflow matters: its input and output ports, the activities of its
//! processors, and the annotation records attached to each of them.

use std::fmt;

use crate::error::{Result, ValidatorError};
use crate::rdf::RdfSyntax;
use crate::terms::{AnnotationKind, SEMANTIC_ANNOTATION};
use crate::xml::{Element, Query};

/// One annotation record attached to an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Bean class identifying the kind of annotation.
    pub marker: String,
    /// Declared media type of the payload, for semantic annotations.
    pub media_type: Option<String>,
    /// Raw payload text, if the record has one.
    pub content: Option<String>,
}

impl Annotation {
    /// Creates a record of the given marker with no payload.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            media_type: None,
            content: None,
        }
    }

    /// Creates a semantic annotation carrying an RDF fragment.
    pub fn semantic(media_type: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            marker: SEMANTIC_ANNOTATION.to_string(),
            media_type: Some(media_type.into()),
            content: Some(content.into()),
        }
    }

    /// Payload text, empty when absent.
    #[must_use]
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// RDF syntax of the payload; Turtle unless the media type says RDF/XML.
    #[must_use]
    pub fn syntax(&self) -> RdfSyntax {
        RdfSyntax::from_media_type(self.media_type.as_deref(), RdfSyntax::Turtle)
    }
}

/// The annotation records of one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    records: Vec<Annotation>,
}

impl Annotations {
    /// Wraps a list of records.
    #[must_use]
    pub fn new(records: Vec<Annotation>) -> Self {
        Self { records }
    }

    /// Returns true if a record of `kind` is attached.
    #[must_use]
    pub fn has(&self, kind: AnnotationKind) -> bool {
        self.records.iter().any(|r| r.marker == kind.marker())
    }

    /// The semantic annotation record, if one is attached.
    #[must_use]
    pub fn semantic(&self) -> Option<&Annotation> {
        self.records.iter().find(|r| r.marker == SEMANTIC_ANNOTATION)
    }

    fn read(entity: &Element) -> Annotations {
        let beans = entity.select(&Query::child("annotations").then_descendant("annotationBean"));
        let records = beans
            .into_iter()
            .filter_map(|bean| {
                let marker = bean.attribute("class")?.trim().to_string();
                Some(Annotation {
                    marker,
                    media_type: bean.child_text("mimeType"),
                    content: bean.child("content").map(Element::text),
                })
            })
            .collect();
        Annotations { records }
    }
}

/// Anything a profile can put annotation constraints on.
pub trait Annotated {
    /// The entity's annotation records.
    fn annotations(&self) -> &Annotations;

    /// Short description used in assertion messages.
    fn describe(&self) -> String;
}

/// Whether a port receives or produces data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    /// An input port.
    Input,
    /// An output port.
    Output,
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PortDirection::Input => "input",
            PortDirection::Output => "output",
        })
    }
}

/// A named port of the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    /// Input or output.
    pub direction: PortDirection,
    /// Port name, unique within its direction.
    pub name: String,
    /// List depth, when the document records one.
    pub depth: Option<u32>,
    /// Attached annotations.
    pub annotations: Annotations,
}

impl Annotated for Port {
    fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    fn describe(&self) -> String {
        format!("{} port \"{}\"", self.direction, self.name)
    }
}

/// An activity of one of the component's processors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Name of the processor that hosts the activity.
    pub processor: String,
    /// Activity class.
    pub type_marker: String,
    /// Annotations of the activity and its processor.
    pub annotations: Annotations,
}

impl Annotated for Activity {
    fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    fn describe(&self) -> String {
        let short = self
            .type_marker
            .rsplit('.')
            .next()
            .unwrap_or(&self.type_marker);
        format!("activity \"{}\" ({})", self.processor, short)
    }
}

/// A component document reduced to what profiles constrain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Where the document was loaded from; also the base IRI for
    /// relative references inside its RDF fragments.
    pub location: String,
    /// Name of the top-level dataflow.
    pub name: Option<String>,
    /// Annotations attached to the dataflow itself.
    pub annotations: Annotations,
    /// Input ports in document order.
    pub input_ports: Vec<Port>,
    /// Output ports in document order.
    pub output_ports: Vec<Port>,
    /// Activities in document order.
    pub activities: Vec<Activity>,
}

impl Annotated for Component {
    fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    fn describe(&self) -> String {
        "component".to_string()
    }
}

impl Component {
    /// Reads a component from t2flow text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::Xml`] for malformed XML and
    /// [`ValidatorError::Component`] if the document has no dataflow or a
    /// port without a name.
    pub fn from_xml(src: &str, location: &str) -> Result<Component> {
        let root = Element::parse(src, location)?;
        let dataflow = if root.name() == "dataflow" {
            &root
        } else {
            root.select_first(&Query::descendant("dataflow").with_attribute("role", "top"))
                .or_else(|| root.select_first(&Query::descendant("dataflow")))
                .ok_or_else(|| ValidatorError::component(location, "no dataflow element"))?
        };

        let input_ports = read_ports(dataflow, "inputPorts", PortDirection::Input, location)?;
        let output_ports = read_ports(dataflow, "outputPorts", PortDirection::Output, location)?;

        let mut activities = Vec::new();
        for processor in dataflow.select(&Query::child("processors").then("processor")) {
            let processor_name = processor.child_text("name").unwrap_or_default();
            let shared = Annotations::read(processor);
            for activity in processor.select(&Query::child("activities").then("activity")) {
                let mut records = shared.records.clone();
                records.extend(Annotations::read(activity).records);
                activities.push(Activity {
                    processor: processor_name.clone(),
                    type_marker: activity.child_text("class").unwrap_or_default(),
                    annotations: Annotations { records },
                });
            }
        }

        Ok(Component {
            location: location.to_string(),
            name: dataflow.child_text("name"),
            annotations: Annotations::read(dataflow),
            input_ports,
            output_ports,
            activities,
        })
    }

    /// The ports of one direction.
    #[must_use]
    pub fn ports(&self, direction: PortDirection) -> &[Port] {
        match direction {
            PortDirection::Input => &self.input_ports,
            PortDirection::Output => &self.output_ports,
        }
    }
}

fn read_ports(
    dataflow: &Element,
    container: &str,
    direction: PortDirection,
    location: &str,
) -> Result<Vec<Port>> {
    dataflow
        .select(&Query::child(container).then("port"))
        .into_iter()
        .map(|port| {
            let name = port
                .child_text("name")
                .filter(|n| !n.is_empty())
                .ok_or_else(|| {
                    ValidatorError::component(location, format!("{direction} port without a name"))
                })?;
            let depth = port.child_text("depth").and_then(|d| match d.parse() {
                Ok(depth) => Some(depth),
                Err(_) => {
                    tracing::warn!(port = %name, depth = %d, "ignoring unreadable port depth");
                    None
                }
            });
            Ok(Port {
                direction,
                name,
                depth,
                annotations: Annotations::read(port),
            })
        })
        .collect()
}
