//! Owned XML element tree with a typed structural query builder.
//!
//! Documents are read once with `quick-xml` into [`Element`] trees. Lookups
//! are expressed as [`Query`] values built step by step; literal values in
//! predicates are compared, never spliced into an expression string.
//!
//! ```
//! use component_validator::xml::{Element, Query};
//!
//! let doc = Element::parse(
//!     "<workflow><dataflow role='top'><inputPorts><port><name>in</name></port></inputPorts></dataflow></workflow>",
//!     "inline",
//! ).unwrap();
//! let ports = Query::descendant("dataflow")
//!     .with_attribute("role", "top")
//!     .then("inputPorts")
//!     .then("port");
//! assert_eq!(doc.select(&ports).len(), 1);
//! ```

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use crate::error::{Result, ValidatorError};

/// A node inside an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A child element.
    Element(Element),
    /// Character data (text or CDATA), unescaped.
    Text(String),
}

/// An XML element with its namespace, local name, attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    namespace: Option<String>,
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Parses `src` into its root element. `location` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::Xml`] if the document is not well-formed.
    pub fn parse(src: &str, location: &str) -> Result<Element> {
        let malformed = |message: String| ValidatorError::Xml {
            location: location.to_string(),
            message,
        };
        let mut reader = NsReader::from_str(src);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let element = match reader.read_resolved_event() {
                Ok((ns, Event::Start(start))) => {
                    stack.push(Element::open(ns, &start).map_err(malformed)?);
                    continue;
                }
                Ok((ns, Event::Empty(start))) => Element::open(ns, &start).map_err(malformed)?,
                Ok((_, Event::End(_))) => stack
                    .pop()
                    .ok_or_else(|| malformed("unexpected closing tag".to_string()))?,
                Ok((_, Event::Text(text))) => {
                    let text = text.unescape().map_err(|e| malformed(e.to_string()))?;
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(Node::Text(text.into_owned()));
                    }
                    continue;
                }
                Ok((_, Event::CData(data))) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = String::from_utf8_lossy(&data).into_owned();
                        parent.children.push(Node::Text(text));
                    }
                    continue;
                }
                Ok((_, Event::Eof)) => break,
                Ok(_) => continue,
                Err(e) => return Err(malformed(e.to_string())),
            };
            match stack.last_mut() {
                Some(parent) => parent.children.push(Node::Element(element)),
                None if root.is_none() => root = Some(element),
                None => return Err(malformed("more than one root element".to_string())),
            }
        }

        if let Some(open) = stack.last() {
            return Err(malformed(format!("unclosed element <{}>", open.name)));
        }
        root.ok_or_else(|| malformed("no root element".to_string()))
    }

    fn open(ns: ResolveResult<'_>, start: &BytesStart<'_>) -> std::result::Result<Element, String> {
        let namespace = match ns {
            ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.into_inner()).into_owned()),
            _ => None,
        };
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| e.to_string())?;
            let key = attribute.key;
            if key.as_ref() == b"xmlns" || key.as_ref().starts_with(b"xmlns:") {
                continue;
            }
            let value = attribute.unescape_value().map_err(|e| e.to_string())?;
            attributes.push((
                String::from_utf8_lossy(key.local_name().as_ref()).into_owned(),
                value.into_owned(),
            ));
        }
        Ok(Element {
            namespace,
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// Local name of the element.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace URI the element is bound to, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Value of the attribute with the given local name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attribute names in document order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(key, _)| key.as_str())
    }

    /// Child elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// First child element with the given local name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|e| e.name == name)
    }

    /// Concatenated character data directly inside this element.
    #[must_use]
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Trimmed text of the named child, if that child exists.
    #[must_use]
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).map(|c| c.text().trim().to_string())
    }

    fn descendants<'a>(&'a self, out: &mut Vec<&'a Element>) {
        for child in self.elements() {
            out.push(child);
            child.descendants(out);
        }
    }

    /// Every element reached by `query` from this element, in document order.
    #[must_use]
    pub fn select<'a>(&'a self, query: &Query) -> Vec<&'a Element> {
        let mut current: Vec<&Element> = vec![self];
        for step in &query.steps {
            let mut next: Vec<&Element> = Vec::new();
            for context in current {
                let candidates: Vec<&Element> = match step.axis {
                    Axis::Child => context.elements().collect(),
                    Axis::Descendant => {
                        let mut all = Vec::new();
                        context.descendants(&mut all);
                        all
                    }
                };
                for candidate in candidates {
                    if step.accepts(candidate) && !next.iter().any(|e| std::ptr::eq(*e, candidate))
                    {
                        next.push(candidate);
                    }
                }
            }
            current = next;
        }
        current
    }

    /// First element reached by `query`, if any.
    #[must_use]
    pub fn select_first<'a>(&'a self, query: &Query) -> Option<&'a Element> {
        self.select(query).into_iter().next()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Child,
    Descendant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
    Attribute(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    axis: Axis,
    name: String,
    predicates: Vec<Predicate>,
}

impl Step {
    fn accepts(&self, element: &Element) -> bool {
        element.name == self.name
            && self.predicates.iter().all(|predicate| match predicate {
                Predicate::Attribute(name, value) => element.attribute(name) == Some(value.as_str()),
            })
    }
}

/// A structural query: a sequence of child/descendant steps matched by
/// local name, each optionally narrowed by literal predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    steps: Vec<Step>,
}

impl Query {
    fn step(axis: Axis, name: &str) -> Step {
        Step {
            axis,
            name: name.to_string(),
            predicates: Vec::new(),
        }
    }

    /// Starts a query at the children named `name`.
    #[must_use]
    pub fn child(name: &str) -> Self {
        Self {
            steps: vec![Self::step(Axis::Child, name)],
        }
    }

    /// Starts a query at all descendants named `name`.
    #[must_use]
    pub fn descendant(name: &str) -> Self {
        Self {
            steps: vec![Self::step(Axis::Descendant, name)],
        }
    }

    /// Continues to the children named `name`.
    #[must_use]
    pub fn then(mut self, name: &str) -> Self {
        self.steps.push(Self::step(Axis::Child, name));
        self
    }

    /// Continues to all descendants named `name`.
    #[must_use]
    pub fn then_descendant(mut self, name: &str) -> Self {
        self.steps.push(Self::step(Axis::Descendant, name));
        self
    }

    fn narrow(mut self, predicate: Predicate) -> Self {
        if let Some(last) = self.steps.last_mut() {
            last.predicates.push(predicate);
        }
        self
    }

    /// Keeps only elements of the last step whose attribute `name` equals `value`.
    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.narrow(Predicate::Attribute(name.to_string(), value.to_string()))
    }
}
