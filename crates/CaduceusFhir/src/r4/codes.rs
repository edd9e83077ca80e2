//! R4 code systems bound by the catalog types.

use crate::code_system::fhir_code_system;

fhir_code_system! {
    /// The type of an address (physical / postal).
    ///
    /// See: <http://hl7.org/fhir/address-type>
    AddressType {
        Postal => "postal",
        Physical => "physical",
        Both => "both",
    }
}

fhir_code_system! {
    /// The use of an address.
    ///
    /// See: <http://hl7.org/fhir/address-use>
    AddressUse {
        Home => "home",
        Work => "work",
        Temp => "temp",
        Old => "old",
        Billing => "billing",
    }
}

fhir_code_system! {
    /// The gender of a person used for administrative purposes.
    ///
    /// See: <http://hl7.org/fhir/administrative-gender>
    AdministrativeGender {
        Male => "male",
        Female => "female",
        Other => "other",
        Unknown => "unknown",
    }
}

fhir_code_system! {
    /// Indicates the purpose of a bundle - how it is intended to be used.
    ///
    /// See: <http://hl7.org/fhir/bundle-type>
    BundleType {
        Document => "document",
        Message => "message",
        Transaction => "transaction",
        TransactionResponse => "transaction-response",
        Batch => "batch",
        BatchResponse => "batch-response",
        History => "history",
        Searchset => "searchset",
        Collection => "collection",
    }
}

fhir_code_system! {
    /// Indicates the status of the care team.
    ///
    /// See: <http://hl7.org/fhir/care-team-status>
    CareTeamStatus {
        Proposed => "proposed",
        Active => "active",
        Suspended => "suspended",
        Inactive => "inactive",
        EnteredInError => "entered-in-error",
    }
}

fhir_code_system! {
    /// Telecommunications form for contact point.
    ///
    /// See: <http://hl7.org/fhir/contact-point-system>
    ContactPointSystem {
        Phone => "phone",
        Fax => "fax",
        Email => "email",
        Pager => "pager",
        Url => "url",
        Sms => "sms",
        Other => "other",
    }
}

fhir_code_system! {
    /// Use of contact point.
    ///
    /// See: <http://hl7.org/fhir/contact-point-use>
    ContactPointUse {
        Home => "home",
        Work => "work",
        Temp => "temp",
        Old => "old",
        Mobile => "mobile",
    }
}

fhir_code_system! {
    /// HTTP verbs (in the HTTP command line).
    ///
    /// See: <http://hl7.org/fhir/http-verb>
    HTTPVerb {
        Get => "GET",
        Head => "HEAD",
        Post => "POST",
        Put => "PUT",
        Delete => "DELETE",
        Patch => "PATCH",
    }
}

fhir_code_system! {
    /// Identifies the purpose for this identifier, if known.
    ///
    /// See: <http://hl7.org/fhir/identifier-use>
    IdentifierUse {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Secondary => "secondary",
        Old => "old",
    }
}

fhir_code_system! {
    /// The type of link between this patient resource and another patient resource.
    ///
    /// See: <http://hl7.org/fhir/link-type>
    LinkType {
        ReplacedBy => "replaced-by",
        Replaces => "replaces",
        Refer => "refer",
        Seealso => "seealso",
    }
}

fhir_code_system! {
    /// MedicationStatement Status Codes
    ///
    /// See: <http://hl7.org/fhir/CodeSystem/medication-statement-status>
    MedicationStatementStatusCodes {
        Active => "active",
        Completed => "completed",
        EnteredInError => "entered-in-error",
        Intended => "intended",
        Stopped => "stopped",
        OnHold => "on-hold",
        Unknown => "unknown",
        NotTaken => "not-taken",
    }
}

fhir_code_system! {
    /// The use of a human name.
    ///
    /// See: <http://hl7.org/fhir/name-use>
    NameUse {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Nickname => "nickname",
        Anonymous => "anonymous",
        Old => "old",
        Maiden => "maiden",
    }
}

fhir_code_system! {
    /// The status of a resource narrative.
    ///
    /// See: <http://hl7.org/fhir/narrative-status>
    NarrativeStatus {
        Generated => "generated",
        Extensions => "extensions",
        Additional => "additional",
        Empty => "empty",
    }
}

fhir_code_system! {
    /// Indicates the status of the identified issue.
    ///
    /// See: <http://hl7.org/fhir/observation-status>
    ObservationStatus {
        Registered => "registered",
        Preliminary => "preliminary",
        Final => "final",
        Amended => "amended",
        Corrected => "corrected",
        Cancelled => "cancelled",
        EnteredInError => "entered-in-error",
        Unknown => "unknown",
    }
}

fhir_code_system! {
    /// How the Quantity should be understood and represented.
    ///
    /// See: <http://hl7.org/fhir/quantity-comparator>
    QuantityComparator {
        LessThan => "<",
        LessOrEqual => "<=",
        GreaterOrEqual => ">=",
        GreaterThan => ">",
    }
}

fhir_code_system! {
    /// Why an entry is in the result set - whether it's included as a match or because of an _include requirement, or to convey information or warning information about the search process.
    ///
    /// See: <http://hl7.org/fhir/search-entry-mode>
    SearchEntryMode {
        Match => "match",
        Include => "include",
        Outcome => "outcome",
    }
}

fhir_code_system! {
    /// A unit of time (units from UCUM).
    ///
    /// See: <http://unitsofmeasure.org>
    UnitsOfTime {
        Second => "s",
        Minute => "min",
        Hour => "h",
        Day => "d",
        Week => "wk",
        Month => "mo",
        Year => "a",
    }
}

fhir_code_system! {
    /// One of the resource types defined as part of this version of FHIR.
    ///
    /// See: <http://hl7.org/fhir/resource-types>
    ResourceType {
        Account => "Account",
        ActivityDefinition => "ActivityDefinition",
        AdverseEvent => "AdverseEvent",
        AllergyIntolerance => "AllergyIntolerance",
        Appointment => "Appointment",
        AppointmentResponse => "AppointmentResponse",
        AuditEvent => "AuditEvent",
        Basic => "Basic",
        Binary => "Binary",
        BiologicallyDerivedProduct => "BiologicallyDerivedProduct",
        BodyStructure => "BodyStructure",
        Bundle => "Bundle",
        CapabilityStatement => "CapabilityStatement",
        CarePlan => "CarePlan",
        CareTeam => "CareTeam",
        CatalogEntry => "CatalogEntry",
        ChargeItem => "ChargeItem",
        ChargeItemDefinition => "ChargeItemDefinition",
        Claim => "Claim",
        ClaimResponse => "ClaimResponse",
        ClinicalImpression => "ClinicalImpression",
        CodeSystem => "CodeSystem",
        Communication => "Communication",
        CommunicationRequest => "CommunicationRequest",
        CompartmentDefinition => "CompartmentDefinition",
        Composition => "Composition",
        ConceptMap => "ConceptMap",
        Condition => "Condition",
        Consent => "Consent",
        Contract => "Contract",
        Coverage => "Coverage",
        CoverageEligibilityRequest => "CoverageEligibilityRequest",
        CoverageEligibilityResponse => "CoverageEligibilityResponse",
        DetectedIssue => "DetectedIssue",
        Device => "Device",
        DeviceDefinition => "DeviceDefinition",
        DeviceMetric => "DeviceMetric",
        DeviceRequest => "DeviceRequest",
        DeviceUseStatement => "DeviceUseStatement",
        DiagnosticReport => "DiagnosticReport",
        DocumentManifest => "DocumentManifest",
        DocumentReference => "DocumentReference",
        DomainResource => "DomainResource",
        EffectEvidenceSynthesis => "EffectEvidenceSynthesis",
        Encounter => "Encounter",
        Endpoint => "Endpoint",
        EnrollmentRequest => "EnrollmentRequest",
        EnrollmentResponse => "EnrollmentResponse",
        EpisodeOfCare => "EpisodeOfCare",
        EventDefinition => "EventDefinition",
        Evidence => "Evidence",
        EvidenceVariable => "EvidenceVariable",
        ExampleScenario => "ExampleScenario",
        ExplanationOfBenefit => "ExplanationOfBenefit",
        FamilyMemberHistory => "FamilyMemberHistory",
        Flag => "Flag",
        Goal => "Goal",
        GraphDefinition => "GraphDefinition",
        Group => "Group",
        GuidanceResponse => "GuidanceResponse",
        HealthcareService => "HealthcareService",
        ImagingStudy => "ImagingStudy",
        Immunization => "Immunization",
        ImmunizationEvaluation => "ImmunizationEvaluation",
        ImmunizationRecommendation => "ImmunizationRecommendation",
        ImplementationGuide => "ImplementationGuide",
        InsurancePlan => "InsurancePlan",
        Invoice => "Invoice",
        Library => "Library",
        Linkage => "Linkage",
        List => "List",
        Location => "Location",
        Measure => "Measure",
        MeasureReport => "MeasureReport",
        Media => "Media",
        Medication => "Medication",
        MedicationAdministration => "MedicationAdministration",
        MedicationDispense => "MedicationDispense",
        MedicationKnowledge => "MedicationKnowledge",
        MedicationRequest => "MedicationRequest",
        MedicationStatement => "MedicationStatement",
        MedicinalProduct => "MedicinalProduct",
        MedicinalProductAuthorization => "MedicinalProductAuthorization",
        MedicinalProductContraindication => "MedicinalProductContraindication",
        MedicinalProductIndication => "MedicinalProductIndication",
        MedicinalProductIngredient => "MedicinalProductIngredient",
        MedicinalProductInteraction => "MedicinalProductInteraction",
        MedicinalProductManufactured => "MedicinalProductManufactured",
        MedicinalProductPackaged => "MedicinalProductPackaged",
        MedicinalProductPharmaceutical => "MedicinalProductPharmaceutical",
        MedicinalProductUndesirableEffect => "MedicinalProductUndesirableEffect",
        MessageDefinition => "MessageDefinition",
        MessageHeader => "MessageHeader",
        MolecularSequence => "MolecularSequence",
        NamingSystem => "NamingSystem",
        NutritionOrder => "NutritionOrder",
        Observation => "Observation",
        ObservationDefinition => "ObservationDefinition",
        OperationDefinition => "OperationDefinition",
        OperationOutcome => "OperationOutcome",
        Organization => "Organization",
        OrganizationAffiliation => "OrganizationAffiliation",
        Parameters => "Parameters",
        Patient => "Patient",
        PaymentNotice => "PaymentNotice",
        PaymentReconciliation => "PaymentReconciliation",
        Person => "Person",
        PlanDefinition => "PlanDefinition",
        Practitioner => "Practitioner",
        PractitionerRole => "PractitionerRole",
        Procedure => "Procedure",
        Provenance => "Provenance",
        Questionnaire => "Questionnaire",
        QuestionnaireResponse => "QuestionnaireResponse",
        RelatedPerson => "RelatedPerson",
        RequestGroup => "RequestGroup",
        ResearchDefinition => "ResearchDefinition",
        ResearchElementDefinition => "ResearchElementDefinition",
        ResearchStudy => "ResearchStudy",
        ResearchSubject => "ResearchSubject",
        Resource => "Resource",
        RiskAssessment => "RiskAssessment",
        RiskEvidenceSynthesis => "RiskEvidenceSynthesis",
        Schedule => "Schedule",
        SearchParameter => "SearchParameter",
        ServiceRequest => "ServiceRequest",
        Slot => "Slot",
        Specimen => "Specimen",
        SpecimenDefinition => "SpecimenDefinition",
        StructureDefinition => "StructureDefinition",
        StructureMap => "StructureMap",
        Subscription => "Subscription",
        Substance => "Substance",
        SubstanceNucleicAcid => "SubstanceNucleicAcid",
        SubstancePolymer => "SubstancePolymer",
        SubstanceProtein => "SubstanceProtein",
        SubstanceReferenceInformation => "SubstanceReferenceInformation",
        SubstanceSourceMaterial => "SubstanceSourceMaterial",
        SubstanceSpecification => "SubstanceSpecification",
        SupplyDelivery => "SupplyDelivery",
        SupplyRequest => "SupplyRequest",
        Task => "Task",
        TerminologyCapabilities => "TerminologyCapabilities",
        TestReport => "TestReport",
        TestScript => "TestScript",
        ValueSet => "ValueSet",
        VerificationResult => "VerificationResult",
        VisionPrescription => "VisionPrescription",
    }
}
