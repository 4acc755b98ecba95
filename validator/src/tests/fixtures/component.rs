//! A sequence-alignment component.
//!
//! Top-level dataflow `sequence_aligner` (listed after a nested dataflow):
//! inputs `sequence` (depth 0, described, typed as FASTA), `parameters`
//! (depth 1, no semantic annotation) and `notes` (empty semantic
//! annotation); output `alignment` (no depth, Clustal); two external tool
//! activities and one XPath activity.

/// t2flow document for the sequence aligner.
pub const COMPONENT: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<workflow xmlns="http://taverna.sf.net/2008/xml/t2flow" version="1" producedBy="taverna-2.4.0">
  <dataflow id="6a1c-nested" role="nested">
    <name>helper</name>
    <inputPorts>
      <port><name>ignored</name><depth>0</depth><granularDepth>0</granularDepth><annotations/></port>
    </inputPorts>
    <outputPorts/>
    <processors/>
    <annotations/>
  </dataflow>
  <dataflow id="9f3e-top" role="top">
    <name>sequence_aligner</name>
    <inputPorts>
      <port>
        <name>sequence</name>
        <depth>0</depth>
        <granularDepth>0</granularDepth>
        <annotations>
          <annotation_chain encoding="xstream">
            <net.sf.taverna.t2.annotation.AnnotationChainImpl xmlns="">
              <annotationAssertions>
                <net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
                  <annotationBean class="net.sf.taverna.t2.annotation.annotationbeans.FreeTextDescription">
                    <text>Sequence to align</text>
                  </annotationBean>
                </net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
              </annotationAssertions>
            </net.sf.taverna.t2.annotation.AnnotationChainImpl>
          </annotation_chain>
          <annotation_chain encoding="xstream">
            <net.sf.taverna.t2.annotation.AnnotationChainImpl xmlns="">
              <annotationAssertions>
                <net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
                  <annotationBean class="net.sf.taverna.t2.annotation.annotationbeans.SemanticAnnotation">
                    <mimeType>text/rdf+n3</mimeType>
                    <content><![CDATA[@prefix ex: <http://example.org/components#> .
<#sequence> ex:hasFormat ex:Fasta .
]]></content>
                  </annotationBean>
                </net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
              </annotationAssertions>
            </net.sf.taverna.t2.annotation.AnnotationChainImpl>
          </annotation_chain>
        </annotations>
      </port>
      <port>
        <name>parameters</name>
        <depth>1</depth>
        <granularDepth>1</granularDepth>
        <annotations>
          <annotation_chain encoding="xstream">
            <net.sf.taverna.t2.annotation.AnnotationChainImpl xmlns="">
              <annotationAssertions>
                <net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
                  <annotationBean class="net.sf.taverna.t2.annotation.annotationbeans.FreeTextDescription">
                    <text>Aligner options</text>
                  </annotationBean>
                </net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
              </annotationAssertions>
            </net.sf.taverna.t2.annotation.AnnotationChainImpl>
          </annotation_chain>
        </annotations>
      </port>
      <port>
        <name>notes</name>
        <depth>0</depth>
        <granularDepth>0</granularDepth>
        <annotations>
          <annotation_chain encoding="xstream">
            <net.sf.taverna.t2.annotation.AnnotationChainImpl xmlns="">
              <annotationAssertions>
                <net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
                  <annotationBean class="net.sf.taverna.t2.annotation.annotationbeans.SemanticAnnotation">
                    <mimeType>text/rdf+n3</mimeType>
                    <content>   </content>
                  </annotationBean>
                </net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
              </annotationAssertions>
            </net.sf.taverna.t2.annotation.AnnotationChainImpl>
          </annotation_chain>
        </annotations>
      </port>
    </inputPorts>
    <outputPorts>
      <port>
        <name>alignment</name>
        <annotations>
          <annotation_chain encoding="xstream">
            <net.sf.taverna.t2.annotation.AnnotationChainImpl xmlns="">
              <annotationAssertions>
                <net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
                  <annotationBean class="net.sf.taverna.t2.annotation.annotationbeans.SemanticAnnotation">
                    <mimeType>text/rdf+n3</mimeType>
                    <content><![CDATA[@prefix ex: <http://example.org/components#> .
<#alignment> ex:hasFormat ex:Clustal .
]]></content>
                  </annotationBean>
                </net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
              </annotationAssertions>
            </net.sf.taverna.t2.annotation.AnnotationChainImpl>
          </annotation_chain>
        </annotations>
      </port>
    </outputPorts>
    <processors>
      <processor>
        <name>align</name>
        <inputPorts/>
        <outputPorts/>
        <annotations>
          <annotation_chain encoding="xstream">
            <net.sf.taverna.t2.annotation.AnnotationChainImpl xmlns="">
              <annotationAssertions>
                <net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
                  <annotationBean class="net.sf.taverna.t2.annotation.annotationbeans.FreeTextDescription">
                    <text>Runs the aligner</text>
                  </annotationBean>
                </net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
              </annotationAssertions>
            </net.sf.taverna.t2.annotation.AnnotationChainImpl>
          </annotation_chain>
        </annotations>
        <activities>
          <activity>
            <raven>
              <group>net.sf.taverna.t2.activities</group>
              <artifact>external-tool-activity</artifact>
              <version>1.4</version>
            </raven>
            <class>net.sf.taverna.t2.activities.externaltool.ExternalToolActivity</class>
            <inputMap/>
            <outputMap/>
            <configBean encoding="xstream"/>
            <annotations>
              <annotation_chain encoding="xstream">
                <net.sf.taverna.t2.annotation.AnnotationChainImpl xmlns="">
                  <annotationAssertions>
                    <net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
                      <annotationBean class="net.sf.taverna.t2.annotation.annotationbeans.SemanticAnnotation">
                        <mimeType>text/rdf+n3</mimeType>
                        <content><![CDATA[@prefix ex: <http://example.org/components#> .
<#align> ex:performs ex:Aligner .
]]></content>
                      </annotationBean>
                    </net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
                  </annotationAssertions>
                </net.sf.taverna.t2.annotation.AnnotationChainImpl>
              </annotation_chain>
            </annotations>
          </activity>
        </activities>
      </processor>
      <processor>
        <name>trim</name>
        <inputPorts/>
        <outputPorts/>
        <annotations/>
        <activities>
          <activity>
            <class>net.sf.taverna.t2.activities.externaltool.ExternalToolActivity</class>
            <configBean encoding="xstream"/>
            <annotations/>
          </activity>
        </activities>
      </processor>
      <processor>
        <name>extract</name>
        <inputPorts/>
        <outputPorts/>
        <annotations/>
        <activities>
          <activity>
            <class>net.sf.taverna.t2.activities.xpath.XPathActivity</class>
            <configBean encoding="xstream"/>
            <annotations/>
          </activity>
        </activities>
      </processor>
    </processors>
    <annotations>
      <annotation_chain encoding="xstream">
        <net.sf.taverna.t2.annotation.AnnotationChainImpl xmlns="">
          <annotationAssertions>
            <net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
              <annotationBean class="net.sf.taverna.t2.annotation.annotationbeans.DescriptiveTitle">
                <text>Sequence aligner</text>
              </annotationBean>
            </net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
          </annotationAssertions>
        </net.sf.taverna.t2.annotation.AnnotationChainImpl>
      </annotation_chain>
      <annotation_chain encoding="xstream">
        <net.sf.taverna.t2.annotation.AnnotationChainImpl xmlns="">
          <annotationAssertions>
            <net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
              <annotationBean class="net.sf.taverna.t2.annotation.annotationbeans.Author">
                <text>A. N. Other</text>
              </annotationBean>
            </net.sf.taverna.t2.annotation.AnnotationAssertionImpl>
          </annotationAssertions>
        </net.sf.taverna.t2.annotation.AnnotationChainImpl>
      </annotation_chain>
    </annotations>
  </dataflow>
</workflow>
"##;
