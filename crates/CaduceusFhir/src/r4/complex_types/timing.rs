use caduceus_macros::FhirSerde;

use crate::r4::*;

/// Specifies an event that may occur multiple times.
///
/// See: [Timing](http://hl7.org/fhir/R4/datatypes.html#Timing)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Timing {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// When the event occurs
    pub event: Option<Vec<DateTime>>,
    /// When the event is to occur
    pub repeat: Option<TimingRepeat>,
    /// BID | TID | QID | AM | PM | QD | QOD | +
    pub code: Option<CodeableConcept>,
}

/// A set of rules that describe when the event is scheduled.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct TimingRepeat {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Length/Range of lengths, or (Start and/or end) limits
    #[fhir_serde(flatten)]
    pub bounds: Option<TimingRepeatBounds>,
    /// Number of times to repeat
    pub count: Option<PositiveInt>,
    /// Maximum number of times to repeat
    #[fhir_serde(rename = "countMax")]
    pub count_max: Option<PositiveInt>,
    /// How long when it happens
    pub duration: Option<Decimal>,
    /// How long when it happens (Max)
    #[fhir_serde(rename = "durationMax")]
    pub duration_max: Option<Decimal>,
    /// s | min | h | d | wk | mo | a - unit of time (UCUM)
    #[fhir_serde(rename = "durationUnit")]
    pub duration_unit: Option<Code<UnitsOfTime>>,
    /// Event occurs frequency times per period
    pub frequency: Option<PositiveInt>,
    /// Event occurs up to frequencyMax times per period
    #[fhir_serde(rename = "frequencyMax")]
    pub frequency_max: Option<PositiveInt>,
    /// Event occurs frequency times per period
    pub period: Option<Decimal>,
    /// Upper limit of period (3-4 hours)
    #[fhir_serde(rename = "periodMax")]
    pub period_max: Option<Decimal>,
    /// s | min | h | d | wk | mo | a - unit of time (UCUM)
    #[fhir_serde(rename = "periodUnit")]
    pub period_unit: Option<Code<UnitsOfTime>>,
    /// mon | tue | wed | thu | fri | sat | sun
    #[fhir_serde(rename = "dayOfWeek")]
    pub day_of_week: Option<Vec<Code>>,
    /// Time of day for action
    #[fhir_serde(rename = "timeOfDay")]
    pub time_of_day: Option<Vec<Time>>,
    /// Code for time period of occurrence
    pub when: Option<Vec<Code>>,
    /// Minutes from event (before or after)
    pub offset: Option<UnsignedInt>,
}

/// Choice of types for the bounds\[x\] field in TimingRepeat
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum TimingRepeatBounds {
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "boundsDuration")]
    Duration(Duration),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "boundsRange")]
    Range(Range),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "boundsPeriod")]
    Period(Period),
}
