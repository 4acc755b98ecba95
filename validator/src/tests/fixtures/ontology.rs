//! Formats and tools referenced by the component's semantic annotations.
//!
//! `SequenceFormat` and `AlignmentFormat` are subclasses of `Format`;
//! `Fasta` and `Embl` are sequence formats, `Clustal` an alignment format,
//! `Aligner` an alignment tool.

/// RDF/XML ontology document.
pub const ONTOLOGY: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
         xmlns:owl="http://www.w3.org/2002/07/owl#">
  <owl:Ontology rdf:about="http://example.org/components"/>
  <owl:Class rdf:about="http://example.org/components#Format"/>
  <owl:Class rdf:about="http://example.org/components#SequenceFormat">
    <rdfs:subClassOf rdf:resource="http://example.org/components#Format"/>
  </owl:Class>
  <owl:Class rdf:about="http://example.org/components#AlignmentFormat">
    <rdfs:subClassOf rdf:resource="http://example.org/components#Format"/>
  </owl:Class>
  <owl:Class rdf:about="http://example.org/components#AlignmentTool"/>
  <owl:ObjectProperty rdf:about="http://example.org/components#hasFormat"/>
  <owl:ObjectProperty rdf:about="http://example.org/components#performs"/>
  <rdf:Description rdf:about="http://example.org/components#Fasta">
    <rdf:type rdf:resource="http://example.org/components#SequenceFormat"/>
  </rdf:Description>
  <rdf:Description rdf:about="http://example.org/components#Embl">
    <rdf:type rdf:resource="http://example.org/components#SequenceFormat"/>
  </rdf:Description>
  <rdf:Description rdf:about="http://example.org/components#Clustal">
    <rdf:type rdf:resource="http://example.org/components#AlignmentFormat"/>
  </rdf:Description>
  <rdf:Description rdf:about="http://example.org/components#Aligner">
    <rdf:type rdf:resource="http://example.org/components#AlignmentTool"/>
  </rdf:Description>
</rdf:RDF>
"##;
