use caduceus_macros::FhirSerde;

use crate::r4::*;

/// A measured amount (or an amount that can potentially be measured).
///
/// See: [Quantity](http://hl7.org/fhir/R4/datatypes.html#Quantity)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Quantity {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Numerical value (with implicit precision)
    pub value: Option<Decimal>,
    /// < | <= | >= | > - how to understand the value
    pub comparator: Option<Code<QuantityComparator>>,
    /// Unit representation
    pub unit: Option<String>,
    /// System that defines coded unit form
    pub system: Option<Uri>,
    /// Coded form of the unit
    pub code: Option<Code>,
}

/// A length of time.
///
/// Shares the [`Quantity`] structure; the unit is expected to be a UCUM time unit.
pub type Duration = Quantity;

/// A duration of time during which an organism (or a process) has existed.
pub type Age = Quantity;

/// A [`Quantity`] without a comparator.
pub type SimpleQuantity = Quantity;
