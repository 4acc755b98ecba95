//! Profile XML reader.
//!
//! Turns a profile document into a [`Profile`], rejecting documents that do
//! not follow the profile schema: wrong root element or namespace, unknown
//! elements, unreadable or inverted occurrence ranges, unknown annotation
//! kinds, and semantic constraints that reference ontologies the profile
//! does not declare.

use std::collections::BTreeMap;

use url::Url;

use super::{
    ActivityConstraint, Bounds, ComponentConstraint, PortConstraint, Profile, SemanticConstraint,
    UpperBound, PROFILE_NAMESPACE,
};
use crate::error::{Result, ValidatorError};
use crate::terms::{ActivityType, AnnotationKind};
use crate::xml::Element;

impl Profile {
    /// Parses a profile document loaded from `location`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::Xml`] for malformed XML,
    /// [`ValidatorError::Profile`] for schema violations and
    /// [`ValidatorError::UndeclaredOntology`] for semantic constraints
    /// naming an undeclared ontology.
    pub fn from_xml(src: &str, location: &Url) -> Result<Profile> {
        let root = Element::parse(src, location.as_str())?;
        ProfileReader { location }.read(&root)
    }
}

struct ProfileReader<'a> {
    location: &'a Url,
}

impl ProfileReader<'_> {
    fn error(&self, message: impl Into<String>) -> ValidatorError {
        ValidatorError::profile(self.location.as_str(), message)
    }

    fn read(&self, root: &Element) -> Result<Profile> {
        if root.name() != "profile" || root.namespace() != Some(PROFILE_NAMESPACE) {
            return Err(self.error(format!(
                "root element must be `profile` in namespace {PROFILE_NAMESPACE}"
            )));
        }

        let mut id = None;
        let mut name = None;
        let mut description = None;
        let mut extends = None;
        let mut ontologies = BTreeMap::new();
        let mut component = None;

        for child in root.elements() {
            match child.name() {
                "id" => id = Some(child.text().trim().to_string()),
                "name" => name = Some(child.text().trim().to_string()),
                "description" => description = Some(child.text().trim().to_string()),
                "extends" => {
                    let parent = child
                        .child_text("id")
                        .filter(|p| !p.is_empty())
                        .ok_or_else(|| self.error("`extends` without an `id`"))?;
                    extends = Some(parent);
                }
                "ontology" => {
                    let key = child
                        .attribute("id")
                        .map(str::trim)
                        .filter(|k| !k.is_empty())
                        .ok_or_else(|| self.error("`ontology` without an `id` attribute"))?;
                    let source = child.text().trim().to_string();
                    if source.is_empty() {
                        return Err(self.error(format!("ontology `{key}` has no source")));
                    }
                    if ontologies.insert(key.to_string(), source).is_some() {
                        return Err(self.error(format!("ontology `{key}` declared twice")));
                    }
                }
                "component" => component = Some(self.component(child)?),
                other => return Err(self.error(format!("unexpected element `{other}`"))),
            }
        }

        let id = id
            .filter(|i| !i.is_empty())
            .ok_or_else(|| self.error("missing `id`"))?;
        let component = component.unwrap_or_default();
        check_ontologies(&id, &ontologies, &component)?;

        Ok(Profile {
            name: name.unwrap_or_else(|| id.clone()),
            id,
            description: description.filter(|d| !d.is_empty()),
            extends,
            ontologies,
            component,
            location: self.location.clone(),
        })
    }

    fn component(&self, element: &Element) -> Result<ComponentConstraint> {
        let mut constraint = ComponentConstraint::default();
        for child in element.elements() {
            match child.name() {
                "annotation" => {
                    let kind = self.annotation(child)?;
                    if !kind.applies_to_component() {
                        return Err(self.error(format!(
                            "`{kind}` annotations cannot be required of a component"
                        )));
                    }
                    constraint.annotations.push(kind);
                }
                "semanticAnnotation" => constraint.semantic.push(self.semantic(child)?),
                "inputPort" => constraint.input_ports.push(self.port(child)?),
                "outputPort" => constraint.output_ports.push(self.port(child)?),
                "activity" => constraint.activities.push(self.activity(child)?),
                "exceptionHandling" => {
                    tracing::debug!(profile = %self.location, "exception handling constraints are not checked");
                }
                other => {
                    return Err(self.error(format!("unexpected element `{other}` in `component`")))
                }
            }
        }
        Ok(constraint)
    }

    fn annotation(&self, element: &Element) -> Result<AnnotationKind> {
        let text = element.text();
        AnnotationKind::from_name(&text)
            .ok_or_else(|| self.error(format!("unknown annotation kind `{}`", text.trim())))
    }

    fn semantic(&self, element: &Element) -> Result<SemanticConstraint> {
        self.attributes(element, &["ontology", "predicate", "class", "minOccurs", "maxOccurs"])?;
        let required = |name: &str| {
            element
                .attribute(name)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or_else(|| {
                    self.error(format!("`semanticAnnotation` without a `{name}` attribute"))
                })
        };
        let value = element.text().trim().to_string();
        Ok(SemanticConstraint {
            ontology: required("ontology")?,
            predicate: required("predicate")?,
            value: (!value.is_empty()).then_some(value),
            class: element
                .attribute("class")
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            occurs: self.bounds(element, "minOccurs", "maxOccurs", Bounds::AT_LEAST_ONE)?,
        })
    }

    fn port(&self, element: &Element) -> Result<PortConstraint> {
        self.attributes(
            element,
            &["name", "minOccurs", "maxOccurs", "minDepth", "maxDepth"],
        )?;
        let mut annotations = Vec::new();
        let mut semantic = Vec::new();
        self.children(element, &mut annotations, &mut semantic)?;
        Ok(PortConstraint {
            name: element
                .attribute("name")
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            occurs: self.bounds(element, "minOccurs", "maxOccurs", Bounds::ONE)?,
            depth: self.bounds(element, "minDepth", "maxDepth", Bounds::ANY)?,
            annotations,
            semantic,
        })
    }

    fn activity(&self, element: &Element) -> Result<ActivityConstraint> {
        self.attributes(element, &["type", "minOccurs", "maxOccurs"])?;
        let mut annotations = Vec::new();
        let mut semantic = Vec::new();
        self.children(element, &mut annotations, &mut semantic)?;
        let type_alias = element
            .attribute("type")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        let activity_type = type_alias.as_deref().and_then(ActivityType::from_alias);
        if let (Some(alias), None) = (&type_alias, activity_type) {
            tracing::warn!(profile = %self.location, %alias, "unknown activity type, matching any activity");
        }
        Ok(ActivityConstraint {
            type_alias,
            activity_type,
            occurs: self.bounds(element, "minOccurs", "maxOccurs", Bounds::ANY)?,
            annotations,
            semantic,
        })
    }

    fn children(
        &self,
        element: &Element,
        annotations: &mut Vec<AnnotationKind>,
        semantic: &mut Vec<SemanticConstraint>,
    ) -> Result<()> {
        for child in element.elements() {
            match child.name() {
                "annotation" => annotations.push(self.annotation(child)?),
                "semanticAnnotation" => semantic.push(self.semantic(child)?),
                other => {
                    return Err(self.error(format!(
                        "unexpected element `{other}` in `{}`",
                        element.name()
                    )))
                }
            }
        }
        Ok(())
    }

    fn attributes(&self, element: &Element, allowed: &[&str]) -> Result<()> {
        match element.attribute_names().find(|a| !allowed.contains(a)) {
            Some(unknown) => Err(self.error(format!(
                "unexpected attribute `{unknown}` on `{}`",
                element.name()
            ))),
            None => Ok(()),
        }
    }

    fn bounds(&self, element: &Element, min: &str, max: &str, default: Bounds) -> Result<Bounds> {
        let lower = match element.attribute(min) {
            Some(value) => self.number(element, min, value)?,
            None => default.min,
        };
        let upper = match element.attribute(max).map(str::trim) {
            Some("unbounded") => UpperBound::Unbounded,
            Some(value) => UpperBound::Bounded(self.number(element, max, value)?),
            None => default.max,
        };
        if !upper.admits(lower) {
            return Err(self.error(format!(
                "`{}` has {min}={lower} greater than {max}={upper}",
                element.name()
            )));
        }
        Ok(Bounds::new(lower, upper))
    }

    fn number(&self, element: &Element, attribute: &str, value: &str) -> Result<u32> {
        value.trim().parse().map_err(|_| {
            self.error(format!(
                "`{}` has unreadable {attribute} `{value}`",
                element.name()
            ))
        })
    }
}

fn check_ontologies(
    profile: &str,
    declared: &BTreeMap<String, String>,
    component: &ComponentConstraint,
) -> Result<()> {
    let semantic = component
        .semantic
        .iter()
        .chain(component.input_ports.iter().flat_map(|p| &p.semantic))
        .chain(component.output_ports.iter().flat_map(|p| &p.semantic))
        .chain(component.activities.iter().flat_map(|a| &a.semantic));
    for constraint in semantic {
        if !declared.contains_key(&constraint.ontology) {
            return Err(ValidatorError::UndeclaredOntology {
                profile: profile.to_string(),
                ontology: constraint.ontology.clone(),
            });
        }
    }
    Ok(())
}
