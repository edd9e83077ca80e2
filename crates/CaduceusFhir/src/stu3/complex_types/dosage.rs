use caduceus_macros::FhirSerde;

use crate::stu3::*;

/// Indicates how the medication is/was taken or should be taken by the patient.
///
/// See: [Dosage](http://hl7.org/fhir/STU3/dosage.html#Dosage)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Dosage {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// The order of the dosage instructions
    pub sequence: Option<Integer>,
    /// Free text dosage instructions e.g. SIG
    pub text: Option<String>,
    /// Supplemental instruction - e.g. "with meals"
    #[fhir_serde(rename = "additionalInstruction")]
    pub additional_instruction: Option<Vec<CodeableConcept>>,
    /// Patient or consumer oriented instructions
    #[fhir_serde(rename = "patientInstruction")]
    pub patient_instruction: Option<String>,
    /// When medication should be administered
    pub timing: Option<Timing>,
    /// Take "as needed" (for x)
    #[fhir_serde(flatten)]
    pub as_needed: Option<DosageAsNeeded>,
    /// Body site to administer to
    pub site: Option<CodeableConcept>,
    /// How drug should enter body
    pub route: Option<CodeableConcept>,
    /// Technique for administering medication
    pub method: Option<CodeableConcept>,
    /// Amount of medication per dose
    #[fhir_serde(flatten)]
    pub dose: Option<DosageDose>,
    /// Upper limit on medication per unit of time
    #[fhir_serde(rename = "maxDosePerPeriod")]
    pub max_dose_per_period: Option<Ratio>,
    /// Upper limit on medication per administration
    #[fhir_serde(rename = "maxDosePerAdministration")]
    pub max_dose_per_administration: Option<Quantity>,
    /// Upper limit on medication per lifetime of the patient
    #[fhir_serde(rename = "maxDosePerLifetime")]
    pub max_dose_per_lifetime: Option<Quantity>,
    /// Amount of medication per unit of time
    #[fhir_serde(flatten)]
    pub rate: Option<DosageRate>,
}

/// Choice of types for the asNeeded\[x\] field in Dosage
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum DosageAsNeeded {
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "asNeededBoolean")]
    Boolean(Boolean),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "asNeededCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// Choice of types for the dose\[x\] field in Dosage
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum DosageDose {
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "doseRange")]
    Range(Range),
    /// Variant accepting the SimpleQuantity type.
    #[fhir_serde(rename = "doseQuantity")]
    SimpleQuantity(SimpleQuantity),
}

/// Choice of types for the rate\[x\] field in Dosage
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum DosageRate {
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "rateRatio")]
    Ratio(Ratio),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "rateRange")]
    Range(Range),
    /// Variant accepting the SimpleQuantity type.
    #[fhir_serde(rename = "rateQuantity")]
    SimpleQuantity(SimpleQuantity),
}
