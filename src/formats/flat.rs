//! The legacy flat variant: bare `NAME = value` lines, no framing, no type
//! tags, colors as decimal `{ r, g, b, a }`.

use super::{format_value, Variant};
use crate::{diagnostics::Diagnostic, params::EmitterParams, schema::SCHEMA};

pub(crate) fn write(params: &EmitterParams) -> String {
    let mut out = String::new();

    for &field in SCHEMA {
        let value = format_value(params.value_of(field), Variant::Flat);
        out.push_str(&format!("{} = {}\n", field.name(), value));
    }

    out
}

pub(crate) fn scan(text: &str, diagnostics: &mut Vec<Diagnostic>) -> Vec<(String, String)> {
    let mut entries = vec![];

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some((name, value)) = trimmed.split_once('=') else {
            diagnostics.push(Diagnostic::UnrecognizedLine(line.to_string()));
            continue;
        };

        entries.push((name.trim().to_string(), value.trim().to_string()));
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_layout() {
        let text = write(&EmitterParams::default());

        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "LIFETIME = 1");
        assert_eq!(lines[1], "RESOLUTION = { 1, 1 }");
        assert_eq!(lines[10], "START_COLOR = { 0, 0, 0, 255 }");
        assert_eq!(lines[11], "END_COLOR = { 255, 255, 255, 255 }");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_scan_tolerates_junk_lines() {
        let text = "LIFETIME = 2\n\nthis line is noise\nSPREAD = 3.5\n";

        let mut diagnostics = vec![];
        let entries = scan(text, &mut diagnostics);

        assert_eq!(
            diagnostics,
            [Diagnostic::UnrecognizedLine("this line is noise".to_string())]
        );
        assert_eq!(
            entries,
            [
                ("LIFETIME".to_string(), "2".to_string()),
                ("SPREAD".to_string(), "3.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_scan_value_may_contain_braces() {
        let mut diagnostics = vec![];
        let entries = scan("VELOCITY = { 100, -3.5 }", &mut diagnostics);

        assert!(diagnostics.is_empty());
        assert_eq!(
            entries,
            [("VELOCITY".to_string(), "{ 100, -3.5 }".to_string())]
        );
    }
}
