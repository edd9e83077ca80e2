//! # fhir-roundtrip
//!
//! Decodes FHIR JSON documents into the typed model, optionally checks that
//! re-encoding reproduces the input, and writes the re-encoded JSON.
//!
//! ## Command Line Options
//!
//! ```text
//! <FILES>...                         Resource files to decode ('-' for stdin)
//!     --fhir-version <VERSION>       FHIR version [env: CADUCEUS_FHIR_VERSION] [default: R4]
//!     --expect-type <TYPE>           Require this resourceType
//!     --check                        Fail unless re-encoding equals the input
//!     --pretty                       Pretty-print the output
//! -o, --output <OUTPUT>              Output file path (defaults to stdout)
//! -l, --log-level <LEVEL>            Log level [env: CADUCEUS_LOG_LEVEL] [default: warn]
//! ```
//!
//! ## Usage Examples
//!
//! ```bash
//! fhir-roundtrip --check medicationstatementexample4.json
//! cat patient.json | fhir-roundtrip --fhir-version STU3 --pretty -
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use caduceus_fhir::{DecodeError, FhirVersion, decode_any_value};
use clap::Parser;
use serde_json::Value;
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(name = "fhir-roundtrip")]
#[command(about = "Decode, validate and re-encode FHIR JSON resources")]
#[command(
    long_about = "Decode FHIR JSON resources into the typed model and write them back out\n\nEnvironment variables:\n  CADUCEUS_FHIR_VERSION - FHIR version: STU3, R4 (default: R4)\n  CADUCEUS_LOG_LEVEL - Log level: error, warn, info, debug, trace (default: warn)\n  RUST_LOG - Full tracing filter, overrides the log level"
)]
pub struct Args {
    /// Resource files to decode (use '-' for stdin)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// FHIR version to decode with
    #[arg(
        long,
        value_enum,
        ignore_case = true,
        env = "CADUCEUS_FHIR_VERSION",
        default_value_t = FhirVersion::default()
    )]
    pub fhir_version: FhirVersion,

    /// Require every document to carry this resourceType
    #[arg(long)]
    pub expect_type: Option<String>,

    /// Fail unless the re-encoded document equals the input
    #[arg(long)]
    pub check: bool,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "CADUCEUS_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// Per-document settings derived from [`Args`].
#[derive(Debug, Clone, PartialEq)]
pub struct RoundtripOptions {
    pub fhir_version: FhirVersion,
    pub expect_type: Option<String>,
    pub check: bool,
    pub pretty: bool,
}

impl Default for RoundtripOptions {
    fn default() -> Self {
        Self {
            fhir_version: FhirVersion::default(),
            expect_type: None,
            check: false,
            pretty: false,
        }
    }
}

impl From<&Args> for RoundtripOptions {
    fn from(args: &Args) -> Self {
        RoundtripOptions {
            fhir_version: args.fhir_version,
            expect_type: args.expect_type.clone(),
            check: args.check,
            pretty: args.pretty,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RoundtripError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("expected resourceType {expected}, found {found}")]
    UnexpectedType { expected: String, found: String },

    #[error("re-encoded {resource_type} differs from the input at {path}")]
    Mismatch { resource_type: String, path: String },
}

/// Installs the global subscriber. `RUST_LOG` wins over `log_level`.
pub fn init_tracing(log_level: &str) {
    let filter = format!(
        "caduceus_fhir={},caduceus_fhir_cli={}",
        log_level, log_level
    );
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .try_init();
}

/// Decodes one document and returns its re-encoded text.
pub fn roundtrip(json: &str, options: &RoundtripOptions) -> Result<String, RoundtripError> {
    let input: Value = serde_json::from_str(json)?;
    let resource = decode_any_value(options.fhir_version, input.clone())?;
    debug!(
        resource_type = resource.resource_type(),
        version = %resource.version(),
        "Decoded document"
    );

    if let Some(expected) = &options.expect_type
        && expected != resource.resource_type()
    {
        return Err(RoundtripError::UnexpectedType {
            expected: expected.clone(),
            found: resource.resource_type().to_string(),
        });
    }

    let encoded = resource.to_json_value()?;
    if options.check
        && let Some(path) = first_difference(&input, &encoded, "$")
    {
        return Err(RoundtripError::Mismatch {
            resource_type: resource.resource_type().to_string(),
            path,
        });
    }

    let text = if options.pretty {
        serde_json::to_string_pretty(&encoded)?
    } else {
        serde_json::to_string(&encoded)?
    };
    Ok(text)
}

/// JSON path of the first place where `left` and `right` disagree.
pub fn first_difference(left: &Value, right: &Value, path: &str) -> Option<String> {
    match (left, right) {
        (Value::Object(l), Value::Object(r)) => {
            let mut keys: Vec<&String> = l.keys().chain(r.keys()).collect();
            keys.sort();
            keys.dedup();
            keys.into_iter().find_map(|key| {
                let child = format!("{}.{}", path, key);
                match (l.get(key), r.get(key)) {
                    (Some(a), Some(b)) => first_difference(a, b, &child),
                    _ => Some(child),
                }
            })
        }
        (Value::Array(l), Value::Array(r)) => {
            if l.len() != r.len() {
                return Some(path.to_string());
            }
            l.iter()
                .zip(r)
                .enumerate()
                .find_map(|(index, (a, b))| first_difference(a, b, &format!("{}[{}]", path, index)))
        }
        _ if left == right => None,
        _ => Some(path.to_string()),
    }
}

/// Main CLI execution function
pub fn run_cli(args: Args) -> anyhow::Result<()> {
    let options = RoundtripOptions::from(&args);
    info!(version = %options.fhir_version, files = args.files.len(), "Starting roundtrip");

    let mut outputs = Vec::with_capacity(args.files.len());
    let mut failures = 0usize;
    for path in &args.files {
        let content = read_input(path)?;
        match roundtrip(&content, &options) {
            Ok(text) => outputs.push(text),
            Err(e) => {
                failures += 1;
                error!(file = %path.display(), "{}", e);
                eprintln!("{}: {}", path.display(), e);
            }
        }
    }

    write_output(args.output.as_deref(), &outputs.join("\n"))?;

    if failures > 0 {
        bail!("{} of {} documents failed", failures, args.files.len());
    }
    Ok(())
}

/// Read input from file or stdin
fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.to_str() == Some("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Write output to file or stdout
fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).with_context(|| format!("failed to write {}", p.display()))?;
        }
        None => {
            if content.is_empty() {
                return Ok(());
            }
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_difference_reports_path() {
        let left = json!({"a": [1, {"b": "x"}]});
        let right = json!({"a": [1, {"b": "y"}]});
        assert_eq!(first_difference(&left, &right, "$").as_deref(), Some("$.a[1].b"));
        assert_eq!(first_difference(&left, &left, "$"), None);
    }

    #[test]
    fn test_first_difference_missing_key() {
        let left = json!({"a": 1, "b": 2});
        let right = json!({"a": 1});
        assert_eq!(first_difference(&left, &right, "$").as_deref(), Some("$.b"));
    }

    #[test]
    fn test_options_from_args() {
        let args = Args::try_parse_from(["fhir-roundtrip", "--check", "--expect-type", "Patient", "a.json"])
            .unwrap();
        let options = RoundtripOptions::from(&args);
        assert!(options.check);
        assert!(!options.pretty);
        assert_eq!(options.expect_type.as_deref(), Some("Patient"));
    }
}
