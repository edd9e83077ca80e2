#![cfg(feature = "STU3")]

use std::fs;
use std::path::PathBuf;

use caduceus_fhir::stu3::{
    DosageDose, MedicationStatement, MedicationStatementMedication, MedicationStatementStatus,
    MedicationStatementTaken, Resource,
};
use caduceus_fhir::{DecodeError, FhirJsonParser};
use rust_decimal_macros::dec;
use serde_json::Value;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("stu3")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

#[test]
fn test_medication_statement_fields() {
    let json = fixture("medicationstatementexample4.json");
    let statement: MedicationStatement = FhirJsonParser::stu3().decode(&json).unwrap();

    assert_eq!(statement.status.value, Some(MedicationStatementStatus::Active));
    assert_eq!(statement.taken.value, Some(MedicationStatementTaken::Yes));
    assert!(matches!(
        statement.medication,
        Some(MedicationStatementMedication::CodeableConcept(_))
    ));

    let dosage = &statement.dosage.as_ref().unwrap()[0];
    let Some(DosageDose::SimpleQuantity(dose)) = &dosage.dose else {
        panic!("unexpected dose: {:?}", dosage.dose);
    };
    assert_eq!(
        dose.value.as_ref().and_then(|v| v.value.as_ref()).and_then(|v| v.value()),
        Some(dec!(1))
    );
    let repeat = dosage.timing.as_ref().and_then(|t| t.repeat.as_ref()).unwrap();
    assert_eq!(repeat.frequency.as_ref().and_then(|f| f.value), Some(3));
}

#[test]
fn test_medication_statement_round_trip() {
    let json = fixture("medicationstatementexample4.json");
    let parser = FhirJsonParser::stu3();
    let statement: MedicationStatement = parser.decode(&json).unwrap();

    let expected: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parser.encode_value(&statement).unwrap(), expected);
}

#[test]
fn test_taken_is_required() {
    let json = r#"{
        "resourceType": "MedicationStatement",
        "status": "active",
        "medicationCodeableConcept": {"text": "Tylenol"},
        "subject": {"reference": "Patient/pat1"}
    }"#;
    match FhirJsonParser::stu3().decode::<MedicationStatement>(json) {
        Err(DecodeError::MissingField { field, .. }) => assert_eq!(field, "taken"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_r4_only_types_are_unknown() {
    let error = FhirJsonParser::stu3()
        .decode_resource(r#"{"resourceType": "CareTeam"}"#)
        .unwrap_err();
    assert!(matches!(error, DecodeError::UnknownResourceType(ref name) if name == "CareTeam"));

    let resource = FhirJsonParser::stu3()
        .decode_resource(r#"{"resourceType": "Patient", "id": "p1"}"#)
        .unwrap();
    assert!(matches!(resource, Resource::Patient(_)));
}
