#![cfg(feature = "R4")]

use std::fs;
use std::path::PathBuf;

use caduceus_fhir::r4::{
    DosageAsNeeded, MedicationStatement, MedicationStatementEffective,
    MedicationStatementMedication, MedicationStatementStatusCodes, NarrativeStatus, Resource,
    UnitsOfTime,
};
use caduceus_fhir::{FhirJsonParser, FhirVersion, XsDate, XsDateTime, decode_any};
use rust_decimal_macros::dec;
use serde_json::Value;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("r4")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

#[test]
fn test_medication_statement_fields() {
    let json = fixture("medicationstatementexample4.json");
    let statement: MedicationStatement = FhirJsonParser::r4().decode(&json).unwrap();

    assert_eq!(statement.id.as_deref(), Some("example004"));
    assert_eq!(statement.status.value, Some(MedicationStatementStatusCodes::Active));
    assert_eq!(statement.status.id.as_deref(), Some("status-1"));
    assert_eq!(
        statement.text.as_ref().and_then(|t| t.status.value),
        Some(NarrativeStatus::Generated)
    );

    let Some(MedicationStatementMedication::CodeableConcept(medication)) = &statement.medication
    else {
        panic!("unexpected medication: {:?}", statement.medication);
    };
    let coding = &medication.coding.as_ref().unwrap()[0];
    assert_eq!(coding.code.as_ref().and_then(|c| c.value.as_deref()), Some("27658006"));
    assert_eq!(
        coding.display.as_ref().and_then(|d| d.value.as_deref()),
        Some("Amoxicillin (product)")
    );

    assert_eq!(
        statement.subject.display.as_ref().and_then(|d| d.value.as_deref()),
        Some("Donald Duck")
    );
    assert!(matches!(
        &statement.effective,
        Some(MedicationStatementEffective::DateTime(dt))
            if dt.value == Some(XsDateTime::from(XsDate::from_ymd(2014, 1, 23)))
    ));
    assert_eq!(
        statement.date_asserted.as_ref().and_then(|d| d.value).map(|d| d.to_string()).as_deref(),
        Some("2015-02-22")
    );
    assert_eq!(
        statement.part_of.as_ref().unwrap()[0]
            .reference
            .as_ref()
            .and_then(|r| r.value.as_deref()),
        Some("Observation/blood-pressure")
    );

    let dosage = &statement.dosage.as_ref().unwrap()[0];
    assert!(matches!(&dosage.as_needed, Some(DosageAsNeeded::Boolean(b)) if b.value == Some(false)));
    let repeat = dosage.timing.as_ref().and_then(|t| t.repeat.as_ref()).unwrap();
    assert_eq!(repeat.frequency.as_ref().and_then(|f| f.value), Some(3));
    assert_eq!(
        repeat.period.as_ref().and_then(|p| p.value.as_ref()).and_then(|p| p.value()),
        Some(dec!(1))
    );
    assert_eq!(repeat.period_unit.as_ref().and_then(|u| u.value), Some(UnitsOfTime::Day));

    let tag = &statement.meta.as_ref().unwrap().tag.as_ref().unwrap()[0];
    assert_eq!(tag.code.as_ref().and_then(|c| c.value.as_deref()), Some("HTEST"));
}

#[test]
fn test_medication_statement_round_trip() {
    let json = fixture("medicationstatementexample4.json");
    let parser = FhirJsonParser::r4();
    let statement: MedicationStatement = parser.decode(&json).unwrap();

    let expected: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parser.encode_value(&statement).unwrap(), expected);

    let reencoded = parser.encode(&statement).unwrap();
    let again: MedicationStatement = parser.decode(&reencoded).unwrap();
    assert_eq!(again, statement);
}

#[test]
fn test_dispatch_by_resource_type() {
    let json = fixture("medicationstatementexample4.json");
    let resource = FhirJsonParser::r4().decode_resource(&json).unwrap();
    assert_eq!(resource.resource_type(), "MedicationStatement");
    assert!(matches!(resource, Resource::MedicationStatement(_)));

    let any = decode_any(FhirVersion::R4, &json).unwrap();
    assert_eq!(any.to_json_value().unwrap(), serde_json::from_str::<Value>(&json).unwrap());
}
