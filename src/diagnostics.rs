use serde::Serialize;
use thiserror::Error;

/// A recoverable decode issue. Decoding never aborts on these; they are
/// collected and returned alongside the partially updated parameter set.
/// Only I/O failure is fatal, and that is surfaced as an `anyhow::Error`
/// by the file layer.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum Diagnostic {
    /// Record framing violated; decoding proceeds as if well-formed
    #[error("structure warning: {0}")]
    StructureWarning(String),

    /// No separator found on a non-blank line; the line is skipped
    #[error("couldn't resolve line: {0:?}")]
    UnrecognizedLine(String),

    /// A schema-required name never appeared in the text
    #[error("missing field {field}")]
    MissingField { field: &'static str },

    #[error("malformed number for {field}: {value:?}")]
    MalformedNumber { field: &'static str, value: String },

    #[error("malformed vector for {field}: {value:?}")]
    MalformedVector { field: &'static str, value: String },

    #[error("malformed color for {field}: {value:?}")]
    MalformedColor { field: &'static str, value: String },
}

/// Outcome of one decode call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    /// Record name from the named variant's header line, kept for display
    pub record_name: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl DecodeReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
