use caduceus_macros::FhirSerde;

use crate::r4::*;

/// Contains a collection of resources.
///
/// See: [Bundle](http://hl7.org/fhir/R4/bundle.html)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
#[fhir_serde(resource_type = "Bundle")]
pub struct Bundle {
    /// Logical id of this artifact
    pub id: Option<std::string::String>,
    /// Metadata about the resource
    pub meta: Option<Meta>,
    /// A set of rules under which this content was created
    #[fhir_serde(rename = "implicitRules")]
    pub implicit_rules: Option<Uri>,
    /// Language of the resource content
    pub language: Option<Code>,
    /// Persistent identifier for the bundle
    pub identifier: Option<Identifier>,
    /// document | message | transaction | transaction-response | batch | batch-response | history | searchset | collection
    #[fhir_serde(required)]
    pub r#type: Code<BundleType>,
    /// When the bundle was assembled
    pub timestamp: Option<Instant>,
    /// If search, the total number of matches
    pub total: Option<UnsignedInt>,
    /// Links related to this Bundle
    pub link: Option<Vec<BundleLink>>,
    /// Entry in the bundle - will have a resource or information
    pub entry: Option<Vec<BundleEntry>>,
}

/// A series of links that provide context to this bundle.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct BundleLink {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// See http://www.iana.org/assignments/link-relations/link-relations.xhtml#link-relations-1
    #[fhir_serde(required)]
    pub relation: String,
    /// Reference details for the link
    #[fhir_serde(required)]
    pub url: Uri,
}

/// An entry in a bundle resource - will either contain a resource or information about a resource (transactions and history only).
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct BundleEntry {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Links related to this entry
    pub link: Option<Vec<BundleLink>>,
    /// URI for resource (Absolute URL server address or URI for UUID/OID)
    #[fhir_serde(rename = "fullUrl")]
    pub full_url: Option<Uri>,
    /// A resource in the bundle
    pub resource: Option<Resource>,
    /// Search related information
    pub search: Option<BundleEntrySearch>,
    /// Additional execution information (transaction/batch/history)
    pub request: Option<BundleEntryRequest>,
    /// Results of execution (transaction/batch/history)
    pub response: Option<BundleEntryResponse>,
}

/// Information about the search process that lead to the creation of this entry.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct BundleEntrySearch {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// match | include | outcome - why this is in the result set
    pub mode: Option<Code<SearchEntryMode>>,
    /// Search ranking (between 0 and 1)
    pub score: Option<Decimal>,
}

/// Additional information about how this entry should be processed as part of a transaction or batch.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct BundleEntryRequest {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// GET | HEAD | POST | PUT | DELETE | PATCH
    #[fhir_serde(required)]
    pub method: Code<HTTPVerb>,
    /// URL for HTTP equivalent of this entry
    #[fhir_serde(required)]
    pub url: Uri,
    /// For managing cache currency
    #[fhir_serde(rename = "ifNoneMatch")]
    pub if_none_match: Option<String>,
    /// For managing cache currency
    #[fhir_serde(rename = "ifModifiedSince")]
    pub if_modified_since: Option<Instant>,
    /// For managing update contention
    #[fhir_serde(rename = "ifMatch")]
    pub if_match: Option<String>,
    /// For conditional creates
    #[fhir_serde(rename = "ifNoneExist")]
    pub if_none_exist: Option<String>,
}

/// Indicates the results of processing the corresponding 'request' entry in the batch or transaction being responded to.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct BundleEntryResponse {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Status response code (text optional)
    #[fhir_serde(required)]
    pub status: String,
    /// The location (if the operation returns a location)
    pub location: Option<Uri>,
    /// The Etag for the resource (if relevant)
    pub etag: Option<String>,
    /// Server's date time modified
    #[fhir_serde(rename = "lastModified")]
    pub last_modified: Option<Instant>,
    /// OperationOutcome with hints and warnings (for batch/transaction)
    pub outcome: Option<Resource>,
}
