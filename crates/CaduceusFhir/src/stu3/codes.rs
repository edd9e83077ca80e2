//! STU3 code systems bound by the catalog types.

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
    /// Indicates the purpose of a bundle - how it was intended to be used.
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
        Post => "POST",
        Put => "PUT",
        Delete => "DELETE",
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
    /// A coded concept indicating the current status of a MedicationStatement.
    ///
    /// See: <http://hl7.org/fhir/medication-statement-status>
    MedicationStatementStatus {
        Active => "active",
        Completed => "completed",
        EnteredInError => "entered-in-error",
        Intended => "intended",
        Stopped => "stopped",
        OnHold => "on-hold",
    }
}

fhir_code_system! {
    /// A coded concept identifying level of certainty if patient has taken or has not taken the medication.
    ///
    /// See: <http://hl7.org/fhir/medication-statement-taken>
    MedicationStatementTaken {
        Yes => "y",
        No => "n",
        Unknown => "unk",
        NotApplicable => "na",
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
    /// Codes specifying how two observations are related.
    ///
    /// See: <http://hl7.org/fhir/observation-relationshiptypes>
    ObservationRelationshipType {
        HasMember => "has-member",
        DerivedFrom => "derived-from",
        SequelTo => "sequel-to",
        Replaces => "replaces",
        QualifiedBy => "qualified-by",
        InterferedBy => "interfered-by",
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
    /// Why an entry is in the result set - whether it's included as a match or because of an _include requirement.
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
    /// One of the resource types defined as part of FHIR.
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
        BodySite => "BodySite",
        Bundle => "Bundle",
        CapabilityStatement => "CapabilityStatement",
        CarePlan => "CarePlan",
        CareTeam => "CareTeam",
        ChargeItem => "ChargeItem",
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
        DataElement => "DataElement",
        DetectedIssue => "DetectedIssue",
        Device => "Device",
        DeviceComponent => "DeviceComponent",
        DeviceMetric => "DeviceMetric",
        DeviceRequest => "DeviceRequest",
        DeviceUseStatement => "DeviceUseStatement",
        DiagnosticReport => "DiagnosticReport",
        DocumentManifest => "DocumentManifest",
        DocumentReference => "DocumentReference",
        DomainResource => "DomainResource",
        EligibilityRequest => "EligibilityRequest",
        EligibilityResponse => "EligibilityResponse",
        Encounter => "Encounter",
        Endpoint => "Endpoint",
        EnrollmentRequest => "EnrollmentRequest",
        EnrollmentResponse => "EnrollmentResponse",
        EpisodeOfCare => "EpisodeOfCare",
        ExpansionProfile => "ExpansionProfile",
        ExplanationOfBenefit => "ExplanationOfBenefit",
        FamilyMemberHistory => "FamilyMemberHistory",
        Flag => "Flag",
        Goal => "Goal",
        GraphDefinition => "GraphDefinition",
        Group => "Group",
        GuidanceResponse => "GuidanceResponse",
        HealthcareService => "HealthcareService",
        ImagingManifest => "ImagingManifest",
        ImagingStudy => "ImagingStudy",
        Immunization => "Immunization",
        ImmunizationRecommendation => "ImmunizationRecommendation",
        ImplementationGuide => "ImplementationGuide",
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
        MedicationRequest => "MedicationRequest",
        MedicationStatement => "MedicationStatement",
        MessageDefinition => "MessageDefinition",
        MessageHeader => "MessageHeader",
        NamingSystem => "NamingSystem",
        NutritionOrder => "NutritionOrder",
        Observation => "Observation",
        OperationDefinition => "OperationDefinition",
        OperationOutcome => "OperationOutcome",
        Organization => "Organization",
        Parameters => "Parameters",
        Patient => "Patient",
        PaymentNotice => "PaymentNotice",
        PaymentReconciliation => "PaymentReconciliation",
        Person => "Person",
        PlanDefinition => "PlanDefinition",
        Practitioner => "Practitioner",
        PractitionerRole => "PractitionerRole",
        Procedure => "Procedure",
        ProcedureRequest => "ProcedureRequest",
        ProcessRequest => "ProcessRequest",
        ProcessResponse => "ProcessResponse",
        Provenance => "Provenance",
        Questionnaire => "Questionnaire",
        QuestionnaireResponse => "QuestionnaireResponse",
        ReferralRequest => "ReferralRequest",
        RelatedPerson => "RelatedPerson",
        RequestGroup => "RequestGroup",
        ResearchStudy => "ResearchStudy",
        ResearchSubject => "ResearchSubject",
        Resource => "Resource",
        RiskAssessment => "RiskAssessment",
        Schedule => "Schedule",
        SearchParameter => "SearchParameter",
        Sequence => "Sequence",
        ServiceDefinition => "ServiceDefinition",
        Slot => "Slot",
        Specimen => "Specimen",
        StructureDefinition => "StructureDefinition",
        StructureMap => "StructureMap",
        Subscription => "Subscription",
        Substance => "Substance",
        SupplyDelivery => "SupplyDelivery",
        SupplyRequest => "SupplyRequest",
        Task => "Task",
        TestReport => "TestReport",
        TestScript => "TestScript",
        ValueSet => "ValueSet",
        VisionPrescription => "VisionPrescription",
    }
}
