//! Command line tooling for the Caduceus FHIR model.

pub mod cli;

pub use cli::{Args, RoundtripError, RoundtripOptions, roundtrip, run_cli};
