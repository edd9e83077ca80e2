use caduceus_macros::FhirSerde;

use crate::stu3::*;

/// A measured amount (or an amount that can potentially be measured).
///
/// See: [Quantity](http://hl7.org/fhir/STU3/datatypes.html#Quantity)
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
pub type Duration = Quantity;

/// A [`Quantity`] without a comparator.
pub type SimpleQuantity = Quantity;
