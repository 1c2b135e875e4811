//! RDF vocabulary constants and namespace tables for stagegraph.
//!
//! This crate is the single place where namespace IRIs and well-known
//! vocabulary terms live, so the mapper, assembler, and validator never
//! disagree about what `sg:` or `rdf:type` expand to.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `sg` - the stage-gate instance/schema namespace
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `prov` - PROV-O vocabulary (http://www.w3.org/ns/prov#)

/// Stage-gate namespace constants
pub mod sg {
    /// Namespace IRI behind the `sg:` prefix
    pub const NAMESPACE: &str = "https://w3id.org/stage-gate#";

    /// sg:Stage class IRI
    pub const STAGE: &str = "https://w3id.org/stage-gate#Stage";

    /// sg:StageGate class IRI
    pub const STAGE_GATE: &str = "https://w3id.org/stage-gate#StageGate";

    /// sg:StagePlan class IRI
    pub const STAGE_PLAN: &str = "https://w3id.org/stage-gate#StagePlan";

    /// sg:Specification class IRI
    pub const SPECIFICATION: &str = "https://w3id.org/stage-gate#Specification";

    /// sg:QualityAttribute class IRI (deliverable leaf entities)
    pub const QUALITY_ATTRIBUTE: &str = "https://w3id.org/stage-gate#QualityAttribute";

    /// sg:hasGate property IRI
    pub const HAS_GATE: &str = "https://w3id.org/stage-gate#hasGate";

    /// sg:hasPlan property IRI
    pub const HAS_PLAN: &str = "https://w3id.org/stage-gate#hasPlan";

    /// sg:hasSpecification property IRI
    pub const HAS_SPECIFICATION: &str = "https://w3id.org/stage-gate#hasSpecification";

    /// sg:hasCQA property IRI (Specification → QualityAttribute)
    pub const HAS_CQA: &str = "https://w3id.org/stage-gate#hasCQA";

    /// sg:hasCategory property IRI
    pub const HAS_CATEGORY: &str = "https://w3id.org/stage-gate#hasCategory";

    /// sg:plannedDate property IRI
    pub const PLANNED_DATE: &str = "https://w3id.org/stage-gate#plannedDate";

    /// sg:actualDate property IRI
    pub const ACTUAL_DATE: &str = "https://w3id.org/stage-gate#actualDate";

    /// sg:reference property IRI (document reference literal)
    pub const REFERENCE: &str = "https://w3id.org/stage-gate#reference";
}

/// RDF vocabulary constants
pub mod rdf {
    /// Namespace IRI behind the `rdf:` prefix
    pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI (the expansion of the `a` keyword)
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// Namespace IRI behind the `rdfs:` prefix
    pub const NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
}

/// XSD vocabulary constants
pub mod xsd {
    /// Namespace IRI behind the `xsd:` prefix
    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
}

/// PROV-O vocabulary constants
pub mod prov {
    /// Namespace IRI behind the `prov:` prefix
    pub const NAMESPACE: &str = "http://www.w3.org/ns/prov#";

    /// prov:Agent class IRI
    pub const AGENT: &str = "http://www.w3.org/ns/prov#Agent";

    /// prov:wasAttributedTo property IRI
    pub const WAS_ATTRIBUTED_TO: &str = "http://www.w3.org/ns/prov#wasAttributedTo";
}

/// Prefixes declared at the top of every generated instance document,
/// sorted by prefix name to match the assembler's header order.
pub const PREFIXES: &[(&str, &str)] = &[
    ("prov", prov::NAMESPACE),
    ("rdfs", rdfs::NAMESPACE),
    ("sg", sg::NAMESPACE),
    ("xsd", xsd::NAMESPACE),
];

/// Render the canonical `@prefix` block for generated instance documents.
///
/// Uses the same single-space layout the assembler emits, so combining a
/// generated document with itself is byte-stable.
pub fn prefix_block() -> String {
    let mut out = String::new();
    for (prefix, namespace) in PREFIXES {
        out.push_str("@prefix ");
        out.push_str(prefix);
        out.push_str(": <");
        out.push_str(namespace);
        out.push_str("> .\n");
    }
    out
}
