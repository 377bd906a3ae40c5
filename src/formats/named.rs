//! The named variant: a record name, a braced body, and one
//! `NAME : kind : value;` line per field, colors as `#AARRGGBB`.

use super::{format_value, Variant};
use crate::{
    diagnostics::Diagnostic,
    params::EmitterParams,
    schema::SCHEMA,
};

pub(crate) fn write(params: &EmitterParams, record_name: &str) -> String {
    let mut out = String::new();

    out.push_str(record_name);
    out.push_str("\n{\n");
    for &field in SCHEMA {
        let value = format_value(params.value_of(field), Variant::Named);
        out.push_str(&format!(
            "\t{} : {} : {};\n",
            field.name(),
            field.kind().tag(),
            value
        ));
    }
    out.push_str("}\n");

    out
}

/// Split a record into `(name, raw value)` pairs. Framing problems and
/// unparseable lines are reported and skipped; scanning always reaches the
/// end of the record.
pub(crate) fn scan(
    text: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> (Option<String>, Vec<(String, String)>) {
    let mut lines = text.lines();

    let record_name = lines.next().map(|l| l.trim().to_string());

    match lines.next() {
        Some(line) if line.trim() == "{" => {}
        _ => diagnostics.push(Diagnostic::StructureWarning(
            "second line should only consist of {".to_string(),
        )),
    }

    let mut entries = vec![];
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        // Closing brace ends the record
        if trimmed == "}" {
            break;
        }

        // First colon separates the name, second separates tag from value.
        // The declared tag is informational; the schema kind is what the
        // value is parsed against.
        let split = trimmed
            .split_once(':')
            .and_then(|(name, rest)| rest.split_once(':').map(|(tag, value)| (name, tag, value)));
        let Some((name, _tag, value)) = split else {
            diagnostics.push(Diagnostic::UnrecognizedLine(line.to_string()));
            continue;
        };

        let value = value.trim();
        let value = value.strip_suffix(';').map(str::trim).unwrap_or(value);

        entries.push((name.trim().to_string(), value.to_string()));
    }

    (record_name, entries)
}
