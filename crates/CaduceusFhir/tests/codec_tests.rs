#![cfg(feature = "R4")]

use caduceus_fhir::r4::{
    self, AdministrativeGender, Bundle, BundleType, MedicationStatement,
    MedicationStatementMedication, Observation, ObservationValue, Patient, PatientDeceased,
    Resource,
};
use caduceus_fhir::{DecodeError, FhirJsonParser, ResourceRegistry, XsDate};
use rust_decimal_macros::dec;
use serde_json::{Value, json};

fn parser() -> FhirJsonParser<Resource> {
    FhirJsonParser::r4()
}

#[test]
fn test_primitive_sidecar_is_merged() {
    let json = json!({
        "resourceType": "Patient",
        "gender": "male",
        "_gender": {"id": "g1", "extension": [{"url": "http://example.org/source", "valueString": "self"}]}
    });
    let patient: Patient = parser().decode_value(json.clone()).unwrap();
    let gender = patient.gender.as_ref().unwrap();
    assert_eq!(gender.value, Some(AdministrativeGender::Male));
    assert_eq!(gender.id.as_deref(), Some("g1"));
    assert_eq!(gender.extension.as_ref().map(Vec::len), Some(1));

    assert_eq!(parser().encode_value(&patient).unwrap(), json);
}

#[test]
fn test_sidecar_without_value() {
    let json = json!({
        "resourceType": "Patient",
        "_birthDate": {"id": "bd"}
    });
    let patient: Patient = parser().decode_value(json.clone()).unwrap();
    let birth_date = patient.birth_date.as_ref().unwrap();
    assert_eq!(birth_date.value, None);
    assert_eq!(birth_date.id.as_deref(), Some("bd"));
    assert_eq!(parser().encode_value(&patient).unwrap(), json);
}

#[test]
fn test_primitive_array_sidecar_alignment() {
    let json = json!({
        "resourceType": "Patient",
        "name": [{
            "family": "Duck",
            "given": ["Donald", null],
            "_given": [null, {"id": "middle"}]
        }]
    });
    let patient: Patient = parser().decode_value(json.clone()).unwrap();
    let given = patient.name.as_ref().unwrap()[0].given.as_ref().unwrap();
    assert_eq!(given.len(), 2);
    assert_eq!(given[0].value.as_deref(), Some("Donald"));
    assert_eq!(given[1].value, None);
    assert_eq!(given[1].id.as_deref(), Some("middle"));
    assert_eq!(parser().encode_value(&patient).unwrap(), json);
}

#[test]
fn test_date_field_is_typed() {
    let patient: Patient = parser()
        .decode(r#"{"resourceType": "Patient", "birthDate": "1974-12"}"#)
        .unwrap();
    assert_eq!(
        patient.birth_date.and_then(|d| d.value),
        Some(XsDate::from_year_month(1974, 12))
    );
}

#[test]
fn test_choice_variants() {
    let patient: Patient = parser()
        .decode(r#"{"resourceType": "Patient", "deceasedDateTime": "2015-02-14T13:42:00+10:00"}"#)
        .unwrap();
    let Some(PatientDeceased::DateTime(deceased)) = &patient.deceased else {
        panic!("unexpected deceased: {:?}", patient.deceased);
    };
    assert_eq!(
        deceased.value.map(|v| v.to_string()).as_deref(),
        Some("2015-02-14T13:42:00+10:00")
    );

    let encoded = parser().encode_value(&patient).unwrap();
    assert_eq!(encoded["deceasedDateTime"], "2015-02-14T13:42:00+10:00");
    assert!(encoded.get("deceased").is_none());
}

#[test]
fn test_choice_primitive_sidecar() {
    let json = json!({
        "resourceType": "Patient",
        "deceasedBoolean": false,
        "_deceasedBoolean": {"id": "d1"}
    });
    let patient: Patient = parser().decode_value(json.clone()).unwrap();
    assert!(matches!(
        &patient.deceased,
        Some(PatientDeceased::Boolean(b)) if b.value == Some(false) && b.id.as_deref() == Some("d1")
    ));
    assert_eq!(parser().encode_value(&patient).unwrap(), json);
}

#[test]
fn test_malformed_choice_is_an_error() {
    let json = r#"{
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "weight"},
        "valueQuantity": "heavy"
    }"#;
    match parser().decode::<Observation>(json) {
        Err(DecodeError::InvalidField { message, .. }) => {
            assert!(message.contains("valueQuantity"), "message was {message}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_conflicting_choice_keys() {
    let json = r#"{
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "weight"},
        "valueString": "heavy",
        "valueBoolean": true
    }"#;
    let error = parser().decode::<Observation>(json).unwrap_err();
    assert!(error.to_string().contains("conflicting choice keys"));
}

#[test]
fn test_missing_required_choice() {
    let json = r#"{
        "resourceType": "MedicationStatement",
        "status": "active",
        "subject": {"reference": "Patient/pat1"}
    }"#;
    match parser().decode::<MedicationStatement>(json) {
        Err(DecodeError::MissingField { field, .. }) => assert_eq!(field, "medication[x]"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_missing_required_field() {
    let json = r#"{
        "resourceType": "MedicationStatement",
        "medicationReference": {"reference": "Medication/med0309"},
        "subject": {"reference": "Patient/pat1"}
    }"#;
    match parser().decode::<MedicationStatement>(json) {
        Err(DecodeError::MissingField { field, .. }) => assert_eq!(field, "status"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_unknown_code_is_rejected() {
    let json = r#"{"resourceType": "Patient", "gender": "robot"}"#;
    assert!(matches!(
        parser().decode::<Patient>(json),
        Err(DecodeError::InvalidField { ref path, .. }) if path == "gender"
    ));
}

#[test]
fn test_error_path_points_into_nested_structure() {
    let json = json!({
        "resourceType": "MedicationStatement",
        "status": "active",
        "medicationCodeableConcept": {"text": "Amoxicillin"},
        "subject": {"reference": "Patient/pat1"},
        "dosage": [{"timing": {"repeat": {"frequency": "three"}}}]
    });
    match parser().decode_value::<MedicationStatement>(json) {
        Err(DecodeError::InvalidField { path, .. }) => {
            assert_eq!(path, "dosage[0].timing.repeat.frequency");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_unknown_resource_type() {
    let error = parser()
        .decode_resource(r#"{"resourceType": "Spaceship", "id": "x"}"#)
        .unwrap_err();
    assert!(matches!(error, DecodeError::UnknownResourceType(ref name) if name == "Spaceship"));
    assert_eq!(error.to_string(), "unknown resourceType: Spaceship");
}

#[test]
fn test_missing_resource_type() {
    assert!(matches!(
        parser().decode_resource(r#"{"id": "x"}"#),
        Err(DecodeError::MissingResourceType)
    ));
    assert!(matches!(parser().decode_resource("[1, 2]"), Err(DecodeError::NotAnObject)));
}

#[test]
fn test_typed_decode_rejects_other_type() {
    let error = parser()
        .decode::<Patient>(r#"{"resourceType": "Observation", "status": "final", "code": {}}"#)
        .unwrap_err();
    assert!(matches!(
        error,
        DecodeError::ResourceTypeMismatch { ref expected, ref found }
            if expected == "Patient" && found == "Observation"
    ));
}

#[test]
fn test_reduced_registry() {
    let registry = r4::registry_builder().unregister("Observation").build();
    assert!(!registry.contains("Observation"));
    assert!(registry.contains("Patient"));

    let parser = FhirJsonParser::with_registry(std::sync::Arc::new(registry));
    let error = parser
        .decode_resource(r#"{"resourceType": "Observation", "status": "final", "code": {}}"#)
        .unwrap_err();
    assert!(matches!(error, DecodeError::UnknownResourceType(_)));
}

#[test]
fn test_custom_registry_entry() {
    fn anonymous_patient(value: Value) -> Result<Resource, DecodeError> {
        let mut patient: Patient = caduceus_fhir::registry::decode_typed(value)?;
        patient.name = None;
        Ok(patient.into())
    }

    let registry: ResourceRegistry<Resource> = r4::registry_builder()
        .register_with("Patient", anonymous_patient)
        .build();
    let json = json!({"resourceType": "Patient", "name": [{"family": "Duck"}]});
    let Resource::Patient(patient) = registry.decode(json).unwrap() else {
        panic!("not a patient");
    };
    assert!(patient.name.is_none());
}

#[test]
fn test_decimal_literal_is_kept() {
    let json = r#"{
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "weight"},
        "valueQuantity": {"value": 185.00, "unit": "lbs"}
    }"#;
    let observation: Observation = parser().decode(json).unwrap();
    let Some(ObservationValue::Quantity(quantity)) = &observation.value else {
        panic!("unexpected value: {:?}", observation.value);
    };
    let value = quantity.value.as_ref().and_then(|v| v.value.clone()).unwrap();
    assert_eq!(value.value(), Some(dec!(185)));
    assert_eq!(value.original_string(), "185.00");

    let encoded = parser().encode(&observation).unwrap();
    assert!(encoded.contains(r#""value":185.00"#), "encoded {encoded}");
}

#[test]
fn test_sparse_encoding() {
    let patient = Patient {
        id: Some("p1".to_string()),
        active: Some(true.into()),
        ..Default::default()
    };
    let encoded = parser().encode(&patient).unwrap();
    assert_eq!(encoded, r#"{"resourceType":"Patient","id":"p1","active":true}"#);
}

#[test]
fn test_bundle_entries_are_dispatched() {
    let json = json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [
            {"fullUrl": "urn:uuid:1", "resource": {"resourceType": "Patient", "id": "pat1"}},
            {"resource": {
                "resourceType": "MedicationStatement",
                "status": "active",
                "medicationReference": {"reference": "Medication/med0309"},
                "subject": {"reference": "urn:uuid:1"}
            }}
        ]
    });
    let bundle: Bundle = parser().decode_value(json.clone()).unwrap();
    assert_eq!(bundle.r#type.value, Some(BundleType::Collection));

    let entries = bundle.entry.as_ref().unwrap();
    assert!(matches!(&entries[0].resource, Some(Resource::Patient(p)) if p.id.as_deref() == Some("pat1")));
    let Some(Resource::MedicationStatement(statement)) = &entries[1].resource else {
        panic!("unexpected entry: {:?}", entries[1].resource);
    };
    assert!(matches!(
        statement.medication,
        Some(MedicationStatementMedication::Reference(_))
    ));

    assert_eq!(parser().encode_value(&bundle).unwrap(), json);
}

#[test]
fn test_bundle_entry_with_unknown_type_fails() {
    let json = json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [{"resource": {"resourceType": "Spaceship"}}]
    });
    let error = parser().decode_value::<Bundle>(json).unwrap_err();
    assert!(
        matches!(error, DecodeError::UnknownResourceType(ref name) if name == "Spaceship"),
        "unexpected error: {error:?}"
    );
}

#[test]
fn test_bundle_entry_missing_field_keeps_path() {
    let json = json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [{"resource": {"resourceType": "Observation", "code": {"text": "weight"}}}]
    });
    match parser().decode_value::<Bundle>(json) {
        Err(DecodeError::MissingField { path, field }) => {
            assert_eq!(path, "entry[0].resource");
            assert_eq!(field, "status");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_contained_invalid_field_joins_paths() {
    let json = json!({
        "resourceType": "MedicationStatement",
        "contained": [{"resourceType": "Patient", "gender": "robot"}],
        "status": "completed",
        "medicationCodeableConcept": {"text": "Tylenol"},
        "subject": {"reference": "#p"}
    });
    match parser().decode_value::<MedicationStatement>(json) {
        Err(DecodeError::InvalidField { path, .. }) => assert_eq!(path, "contained[0].gender"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_contained_without_resource_type() {
    let json = json!({
        "resourceType": "MedicationStatement",
        "contained": [{"id": "p"}],
        "status": "completed",
        "medicationCodeableConcept": {"text": "Tylenol"},
        "subject": {"reference": "#p"}
    });
    assert!(matches!(
        parser().decode_value::<MedicationStatement>(json),
        Err(DecodeError::MissingResourceType)
    ));
}

#[test]
fn test_contained_resources() {
    let json = json!({
        "resourceType": "MedicationStatement",
        "contained": [{"resourceType": "Patient", "id": "p", "gender": "other"}],
        "status": "completed",
        "medicationCodeableConcept": {"text": "Tylenol"},
        "subject": {"reference": "#p"}
    });
    let statement: MedicationStatement = parser().decode_value(json.clone()).unwrap();
    let contained = statement.contained.as_ref().unwrap();
    assert_eq!(contained.len(), 1);
    assert_eq!(contained[0].resource_type(), "Patient");
    assert_eq!(parser().encode_value(&statement).unwrap(), json);
}

#[test]
fn test_statement_without_medication_does_not_decode_again() {
    let statement = MedicationStatement {
        status: r4::MedicationStatementStatusCodes::Active.into(),
        subject: r4::Reference {
            reference: Some("Patient/pat1".to_string().into()),
            ..Default::default()
        },
        ..Default::default()
    };
    let encoded = parser().encode_value(&statement).unwrap();
    assert!(encoded.as_object().unwrap().keys().all(|k| !k.starts_with("medication")));
    match parser().decode_value::<MedicationStatement>(encoded) {
        Err(DecodeError::MissingField { field, .. }) => assert_eq!(field, "medication[x]"),
        other => panic!("unexpected result: {other:?}"),
    }
}
