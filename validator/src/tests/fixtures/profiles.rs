//! A two-layer profile chain.
//!
//! `PROFILE` extends `base-profile.xml` (resolved next to it) and declares
//! the `formats` ontology as `ontology.rdf`. It requires a title and a
//! description, a `sequence` input of depth 0 in a sequence format, some
//! output in an alignment format, and at most one described tool activity.
//! `BASE_PROFILE` only asks for a title and at least one activity.

/// Profile for sequence alignment components.
pub const PROFILE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<profile xmlns="http://ns.taverna.org.uk/2012/component/profile">
  <id>http://example.org/profiles/aligners</id>
  <name>Aligners</name>
  <description>Sequence alignment components</description>
  <extends><id>base-profile.xml</id></extends>
  <ontology id="formats">ontology.rdf</ontology>
  <component>
    <annotation>title</annotation>
    <annotation>description</annotation>
    <inputPort name="sequence" minDepth="0" maxDepth="0">
      <annotation>description</annotation>
      <semanticAnnotation ontology="formats"
          predicate="http://example.org/components#hasFormat"
          class="http://example.org/components#SequenceFormat"/>
    </inputPort>
    <outputPort maxOccurs="unbounded">
      <semanticAnnotation ontology="formats"
          predicate="http://example.org/components#hasFormat"
          class="http://example.org/components#AlignmentFormat"/>
    </outputPort>
    <activity type="Tool" maxOccurs="1">
      <annotation>description</annotation>
    </activity>
    <exceptionHandling>
      <failLists/>
    </exceptionHandling>
  </component>
</profile>
"##;

/// Base profile every chain ends with.
pub const BASE_PROFILE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<profile xmlns="http://ns.taverna.org.uk/2012/component/profile">
  <id>http://example.org/profiles/base</id>
  <name>Base</name>
  <component>
    <annotation>title</annotation>
    <activity minOccurs="1"/>
  </component>
</profile>
"##;
