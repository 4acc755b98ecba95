//! Fixed vocabulary tables: annotation kinds and activity type aliases.
//!
//! Profiles name annotations and activity types abstractly; component
//! documents record them as Taverna bean and activity class names. These
//! tables are the only place the two vocabularies meet.

use std::fmt;

/// Marker of the annotation bean that carries an RDF fragment.
pub const SEMANTIC_ANNOTATION: &str = "net.sf.taverna.t2.annotation.annotationbeans.SemanticAnnotation";

/// Abstract annotation kinds a profile can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    /// Who wrote the entity.
    Author,
    /// Free-text description.
    Description,
    /// Short descriptive title.
    Title,
    /// Example value (ports and activities only).
    Example,
}

impl AnnotationKind {
    /// Every kind, in table order.
    pub const ALL: [AnnotationKind; 4] = [
        AnnotationKind::Author,
        AnnotationKind::Description,
        AnnotationKind::Title,
        AnnotationKind::Example,
    ];

    /// Looks up a kind by its profile name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<AnnotationKind> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Profile name of the kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AnnotationKind::Author => "author",
            AnnotationKind::Description => "description",
            AnnotationKind::Title => "title",
            AnnotationKind::Example => "example",
        }
    }

    /// Annotation bean class recorded in component documents.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            AnnotationKind::Author => "net.sf.taverna.t2.annotation.annotationbeans.Author",
            AnnotationKind::Description => {
                "net.sf.taverna.t2.annotation.annotationbeans.FreeTextDescription"
            }
            AnnotationKind::Title => "net.sf.taverna.t2.annotation.annotationbeans.DescriptiveTitle",
            AnnotationKind::Example => "net.sf.taverna.t2.annotation.annotationbeans.ExampleValue",
        }
    }

    /// Whether a component-level constraint may require this kind.
    #[must_use]
    pub fn applies_to_component(self) -> bool {
        !matches!(self, AnnotationKind::Example)
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Activity types a profile can constrain by alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityType {
    /// External tool (command line) activity.
    Tool,
    /// XPath extraction activity.
    XPath,
    /// Beanshell script activity.
    Beanshell,
    /// REST service activity.
    Rest,
    /// WSDL service activity.
    Wsdl,
}

impl ActivityType {
    /// Every type, in table order.
    pub const ALL: [ActivityType; 5] = [
        ActivityType::Tool,
        ActivityType::XPath,
        ActivityType::Beanshell,
        ActivityType::Rest,
        ActivityType::Wsdl,
    ];

    /// Resolves a profile alias. Unknown aliases leave the type unconstrained.
    #[must_use]
    pub fn from_alias(alias: &str) -> Option<ActivityType> {
        let alias = alias.trim();
        Self::ALL.into_iter().find(|kind| kind.alias() == alias)
    }

    /// Profile alias of the type.
    #[must_use]
    pub fn alias(self) -> &'static str {
        match self {
            ActivityType::Tool => "Tool",
            ActivityType::XPath => "XPath",
            ActivityType::Beanshell => "Beanshell",
            ActivityType::Rest => "REST",
            ActivityType::Wsdl => "WSDL",
        }
    }

    /// Activity class recorded in component documents.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            ActivityType::Tool => "net.sf.taverna.t2.activities.externaltool.ExternalToolActivity",
            ActivityType::XPath => "net.sf.taverna.t2.activities.xpath.XPathActivity",
            ActivityType::Beanshell => "net.sf.taverna.t2.activities.beanshell.BeanshellActivity",
            ActivityType::Rest => "net.sf.taverna.t2.activities.rest.RESTActivity",
            ActivityType::Wsdl => "net.sf.taverna.t2.activities.wsdl.WSDLActivity",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}
