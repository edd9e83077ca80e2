use caduceus_macros::FhirSerde;

use crate::r4::*;

/// Measurements and simple assertions made about a patient, device or other subject.
///
/// See: [Observation](http://hl7.org/fhir/R4/observation.html)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
#[fhir_serde(resource_type = "Observation")]
pub struct Observation {
    /// Logical id of this artifact
    pub id: Option<std::string::String>,
    /// Metadata about the resource
    pub meta: Option<Meta>,
    /// A set of rules under which this content was created
    #[fhir_serde(rename = "implicitRules")]
    pub implicit_rules: Option<Uri>,
    /// Language of the resource content
    pub language: Option<Code>,
    /// Text summary of the resource, for human interpretation
    pub text: Option<Narrative>,
    /// Contained, inline Resources
    pub contained: Option<Vec<Resource>>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Business Identifier for observation
    pub identifier: Option<Vec<Identifier>>,
    /// Fulfills plan, proposal or order
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Part of referenced event
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<Reference>>,
    /// registered | preliminary | final | amended +
    #[fhir_serde(required)]
    pub status: Code<ObservationStatus>,
    /// Classification of  type of observation
    pub category: Option<Vec<CodeableConcept>>,
    /// Type of observation (code / type)
    #[fhir_serde(required)]
    pub code: CodeableConcept,
    /// Who and/or what the observation is about
    pub subject: Option<Reference>,
    /// What the observation is about, when it is not about the subject of record
    pub focus: Option<Vec<Reference>>,
    /// Healthcare event during which this observation is made
    pub encounter: Option<Reference>,
    /// Clinically relevant time/time-period for observation
    #[fhir_serde(flatten)]
    pub effective: Option<ObservationEffective>,
    /// Date/Time this version was made available
    pub issued: Option<Instant>,
    /// Who is responsible for the observation
    pub performer: Option<Vec<Reference>>,
    /// Actual result
    #[fhir_serde(flatten)]
    pub value: Option<ObservationValue>,
    /// Why the result is missing
    #[fhir_serde(rename = "dataAbsentReason")]
    pub data_absent_reason: Option<CodeableConcept>,
    /// High, low, normal, etc.
    pub interpretation: Option<Vec<CodeableConcept>>,
    /// Comments about the observation
    pub note: Option<Vec<Annotation>>,
    /// Observed body part
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Option<CodeableConcept>,
    /// How it was done
    pub method: Option<CodeableConcept>,
    /// Specimen used for this observation
    pub specimen: Option<Reference>,
    /// (Measurement) Device
    pub device: Option<Reference>,
    /// Provides guide for interpretation
    #[fhir_serde(rename = "referenceRange")]
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
    /// Related resource that belongs to the Observation group
    #[fhir_serde(rename = "hasMember")]
    pub has_member: Option<Vec<Reference>>,
    /// Related measurements the observation is made from
    #[fhir_serde(rename = "derivedFrom")]
    pub derived_from: Option<Vec<Reference>>,
    /// Component results
    pub component: Option<Vec<ObservationComponent>>,
}

/// Guidance on how to interpret the value by comparison to a normal or recommended range.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct ObservationReferenceRange {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Low Range, if relevant
    pub low: Option<Quantity>,
    /// High Range, if relevant
    pub high: Option<Quantity>,
    /// Reference range qualifier
    pub r#type: Option<CodeableConcept>,
    /// Reference range population
    #[fhir_serde(rename = "appliesTo")]
    pub applies_to: Option<Vec<CodeableConcept>>,
    /// Applicable age range, if relevant
    pub age: Option<Range>,
    /// Text based reference range in an observation
    pub text: Option<String>,
}

/// Some observations have multiple component observations.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct ObservationComponent {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of component observation (code / type)
    #[fhir_serde(required)]
    pub code: CodeableConcept,
    /// Actual component result
    #[fhir_serde(flatten)]
    pub value: Option<ObservationComponentValue>,
    /// Why the component result is missing
    #[fhir_serde(rename = "dataAbsentReason")]
    pub data_absent_reason: Option<CodeableConcept>,
    /// High, low, normal, etc.
    pub interpretation: Option<Vec<CodeableConcept>>,
    /// Provides guide for interpretation of component result
    #[fhir_serde(rename = "referenceRange")]
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
}

/// Choice of types for the effective\[x\] field in Observation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ObservationEffective {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "effectiveDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "effectivePeriod")]
    Period(Period),
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "effectiveTiming")]
    Timing(Timing),
    /// Variant accepting the Instant type.
    #[fhir_serde(rename = "effectiveInstant")]
    Instant(Instant),
}

/// Choice of types for the value\[x\] field in Observation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ObservationValue {
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "valueString")]
    String(String),
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "valueInteger")]
    Integer(Integer),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "valueRange")]
    Range(Range),
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "valueRatio")]
    Ratio(Ratio),
    /// Variant accepting the Time type.
    #[fhir_serde(rename = "valueTime")]
    Time(Time),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "valuePeriod")]
    Period(Period),
}

/// Choice of types for the value\[x\] field in ObservationComponent
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ObservationComponentValue {
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "valueString")]
    String(String),
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "valueInteger")]
    Integer(Integer),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "valueRange")]
    Range(Range),
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "valueRatio")]
    Ratio(Ratio),
    /// Variant accepting the Time type.
    #[fhir_serde(rename = "valueTime")]
    Time(Time),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "valuePeriod")]
    Period(Period),
}
