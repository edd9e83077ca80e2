use std::ffi::OsStr;

use caduceus_fhir::FhirVersion;
use caduceus_fhir_cli::cli::{Args, RoundtripError, RoundtripOptions, roundtrip, run_cli};
use clap::Parser;
use serde_json::{Value, json};

const OBSERVATION: &str = r#"{
    "resourceType": "Observation",
    "id": "bp",
    "status": "final",
    "code": {"text": "Body weight"},
    "valueQuantity": {"value": 185.00, "unit": "lbs"}
}"#;

#[test]
fn test_args_defaults() {
    let args = Args::try_parse_from(["fhir-roundtrip", "patient.json"]).unwrap();
    assert_eq!(args.files.len(), 1);
    assert_eq!(args.fhir_version, FhirVersion::R4);
    assert!(!args.check);
    assert!(!args.pretty);
    assert!(args.output.is_none());
    assert_eq!(args.log_level, "warn");
}

#[test]
fn test_args_flags() {
    let args = Args::try_parse_from([
        "fhir-roundtrip",
        "--fhir-version",
        "stu3",
        "--check",
        "--pretty",
        "-o",
        "out.json",
        "a.json",
        "b.json",
    ])
    .unwrap();
    assert_eq!(args.fhir_version, FhirVersion::Stu3);
    assert!(args.check);
    assert!(args.pretty);
    assert_eq!(args.files.len(), 2);
    assert_eq!(args.output.unwrap().to_str(), Some("out.json"));
}

#[test]
fn test_args_require_a_file() {
    assert!(Args::try_parse_from(["fhir-roundtrip"]).is_err());
    assert!(Args::try_parse_from(["fhir-roundtrip", "--fhir-version", "R5", "a.json"]).is_err());
}

#[test]
fn test_roundtrip_check_passes() {
    let options = RoundtripOptions {
        check: true,
        ..RoundtripOptions::default()
    };
    let output = roundtrip(OBSERVATION, &options).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["resourceType"], "Observation");
    assert_eq!(value["valueQuantity"]["unit"], "lbs");
    assert!(output.contains("185.00"));
}

#[test]
fn test_roundtrip_reports_unexpected_type() {
    let options = RoundtripOptions {
        expect_type: Some("Patient".to_string()),
        ..RoundtripOptions::default()
    };
    let error = roundtrip(OBSERVATION, &options).unwrap_err();
    assert!(matches!(
        error,
        RoundtripError::UnexpectedType { ref expected, ref found }
            if expected == "Patient" && found == "Observation"
    ));
}

#[test]
fn test_roundtrip_check_detects_dropped_content() {
    // Keys outside the model are skipped by the decoder.
    let json = json!({
        "resourceType": "Patient",
        "id": "p1",
        "favouriteColour": "green"
    })
    .to_string();
    let options = RoundtripOptions {
        check: true,
        ..RoundtripOptions::default()
    };
    match roundtrip(&json, &options) {
        Err(RoundtripError::Mismatch { resource_type, path }) => {
            assert_eq!(resource_type, "Patient");
            assert_eq!(path, "$.favouriteColour");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_roundtrip_decode_error() {
    let json = r#"{"resourceType": "Observation", "status": "final"}"#;
    let error = roundtrip(json, &RoundtripOptions::default()).unwrap_err();
    assert!(matches!(error, RoundtripError::Decode(_)));
    assert!(error.to_string().contains("code"));
}

#[test]
fn test_run_cli_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("observation.json");
    let output = dir.path().join("out.json");
    std::fs::write(&input, OBSERVATION).unwrap();

    let args = Args::try_parse_from([
        OsStr::new("fhir-roundtrip"),
        OsStr::new("--check"),
        OsStr::new("-o"),
        output.as_os_str(),
        input.as_os_str(),
    ])
    .unwrap();
    run_cli(args).unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["id"], "bp");
}

#[test]
fn test_run_cli_counts_failures() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");
    let output = dir.path().join("out.json");
    std::fs::write(&good, OBSERVATION).unwrap();
    std::fs::write(&bad, r#"{"resourceType": "Unheard"}"#).unwrap();

    let args = Args::try_parse_from([
        OsStr::new("fhir-roundtrip"),
        OsStr::new("-o"),
        output.as_os_str(),
        good.as_os_str(),
        bad.as_os_str(),
    ])
    .unwrap();
    let error = run_cli(args).unwrap_err();
    assert_eq!(error.to_string(), "1 of 2 documents failed");
}
