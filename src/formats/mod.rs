pub mod flat;
pub mod named;

use std::collections::HashMap;

use crate::{
    diagnostics::{DecodeReport, Diagnostic},
    params::{EmitterParams, Value},
    schema::{ValueKind, SCHEMA},
    value,
};

/// Which generation of the text format to speak. The two variants share one
/// schema but have genuinely different line syntax and color serializations,
/// so they stay separate codecs behind this selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    Flat,
    #[default]
    Named,
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Variant::Flat),
            "named" => Ok(Variant::Named),
            _ => Err(format!("unknown format variant {s:?}, expected flat or named")),
        }
    }
}

/// Render the full schema as one text record. Deterministic: fields appear
/// in schema order, output ends with a newline.
pub fn encode(params: &EmitterParams, variant: Variant, record_name: &str) -> String {
    match variant {
        Variant::Flat => flat::write(params),
        Variant::Named => named::write(params, record_name),
    }
}

/// Parse a text record and write every recoverable field into `params`.
/// Fields that are missing or malformed keep their prior values and are
/// reported in the returned diagnostics; decoding never aborts early.
pub fn decode_into(text: &str, variant: Variant, params: &mut EmitterParams) -> DecodeReport {
    let mut diagnostics = vec![];

    let (record_name, entries) = match variant {
        Variant::Flat => (None, flat::scan(text, &mut diagnostics)),
        Variant::Named => {
            let (name, entries) = named::scan(text, &mut diagnostics);
            (name, entries)
        }
    };

    bind_fields(&entries, variant, params, &mut diagnostics);

    for diagnostic in &diagnostics {
        log::warn!("{}", diagnostic);
    }

    DecodeReport {
        record_name,
        diagnostics,
    }
}

/// Fold scanned `name -> raw value` pairs into a lookup table, then type
/// convert each schema field. Last write wins on duplicate names, with a
/// warning so hand-edits don't silently shadow each other.
fn bind_fields(
    entries: &[(String, String)],
    variant: Variant,
    params: &mut EmitterParams,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut table: HashMap<&str, &str> = HashMap::new();
    for (name, raw) in entries {
        if table.insert(name.as_str(), raw.as_str()).is_some() {
            diagnostics.push(Diagnostic::StructureWarning(format!(
                "duplicate field {name}, keeping the last occurrence"
            )));
        }
    }

    for &field in SCHEMA {
        let Some(&raw) = table.get(field.name()) else {
            diagnostics.push(Diagnostic::MissingField { field: field.name() });
            continue;
        };

        match parse_value(field.kind(), variant, raw) {
            Some(value) => params.set_value(field, value),
            None => diagnostics.push(malformed(field.kind(), field.name(), raw)),
        }
    }
}

pub(crate) fn format_value(value: Value, variant: Variant) -> String {
    match value {
        Value::Float(v) => value::format_float(v),
        Value::Vector2(v) => value::format_vector2(v),
        Value::Color(c) => match variant {
            Variant::Flat => value::format_color_dec(c),
            Variant::Named => value::format_color_hex(c),
        },
    }
}

fn parse_value(kind: ValueKind, variant: Variant, raw: &str) -> Option<Value> {
    match kind {
        ValueKind::Float => value::parse_float(raw).map(Value::Float),
        ValueKind::Vector2 => value::parse_vector2(raw).map(Value::Vector2),
        ValueKind::Color => match variant {
            Variant::Flat => value::parse_color_dec(raw).map(Value::Color),
            Variant::Named => value::parse_color_hex(raw).map(Value::Color),
        },
    }
}

fn malformed(kind: ValueKind, field: &'static str, raw: &str) -> Diagnostic {
    let value = raw.to_string();

    match kind {
        ValueKind::Float => Diagnostic::MalformedNumber { field, value },
        ValueKind::Vector2 => Diagnostic::MalformedVector { field, value },
        ValueKind::Color => Diagnostic::MalformedColor { field, value },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Color, Vec2};

    fn example_params() -> EmitterParams {
        EmitterParams {
            lifetime: 1.0,
            resolution: Vec2 { x: 1.0, y: 1.0 },
            start_color: Color {
                r: 0,
                g: 0,
                b: 0,
                a: 255,
            },
            end_color: Color {
                r: 255,
                g: 255,
                b: 255,
                a: 255,
            },
            spawn_interval: 0.1,
            randomness: 1.0,
            spread: 6.283185,
            ..EmitterParams::default()
        }
    }

    fn assert_params_close(actual: &EmitterParams, expected: &EmitterParams) {
        assert!((actual.lifetime - expected.lifetime).abs() < 1e-6);
        assert!((actual.resolution.x - expected.resolution.x).abs() < 1e-6);
        assert!((actual.resolution.y - expected.resolution.y).abs() < 1e-6);
        assert!((actual.min_size_factor - expected.min_size_factor).abs() < 1e-6);
        assert!((actual.max_size_factor - expected.max_size_factor).abs() < 1e-6);
        assert!((actual.velocity.x - expected.velocity.x).abs() < 1e-6);
        assert!((actual.velocity.y - expected.velocity.y).abs() < 1e-6);
        assert!((actual.acceleration.x - expected.acceleration.x).abs() < 1e-6);
        assert!((actual.acceleration.y - expected.acceleration.y).abs() < 1e-6);
        assert!(
            (actual.centripetal_acceleration - expected.centripetal_acceleration).abs() < 1e-6
        );
        assert!((actual.rotation - expected.rotation).abs() < 1e-6);
        assert!((actual.rotation_velocity - expected.rotation_velocity).abs() < 1e-6);
        assert!((actual.rotation_acceleration - expected.rotation_acceleration).abs() < 1e-6);
        assert_eq!(actual.start_color, expected.start_color);
        assert_eq!(actual.end_color, expected.end_color);
        assert!((actual.spawn_interval - expected.spawn_interval).abs() < 1e-6);
        assert!((actual.randomness - expected.randomness).abs() < 1e-6);
        assert!((actual.spread - expected.spread).abs() < 1e-6);
    }

    #[test]
    fn test_named_roundtrip_example_scenario() {
        let source = example_params();
        let text = encode(&source, Variant::Named, "smoke");

        let mut target = EmitterParams::default();
        target.lifetime = -100.0;
        let report = decode_into(&text, Variant::Named, &mut target);

        assert!(report.is_clean(), "diagnostics: {:?}", report.diagnostics);
        assert_eq!(report.record_name.as_deref(), Some("smoke"));
        assert_params_close(&target, &source);
    }

    #[test]
    fn test_flat_roundtrip() {
        let source = example_params();
        let text = encode(&source, Variant::Flat, "");

        let mut target = EmitterParams::default();
        target.spread = 0.0;
        let report = decode_into(&text, Variant::Flat, &mut target);

        assert!(report.is_clean(), "diagnostics: {:?}", report.diagnostics);
        assert_eq!(report.record_name, None);
        assert_params_close(&target, &source);
    }

    #[test]
    fn test_missing_field_keeps_prior_value() {
        let source = example_params();
        let text = encode(&source, Variant::Named, "smoke");

        let text = text
            .lines()
            .filter(|l| !l.contains("SPAWN_INTERVAL"))
            .collect::<Vec<_>>()
            .join("\n");

        let mut target = EmitterParams::default();
        target.spawn_interval = 42.0;
        let report = decode_into(&text, Variant::Named, &mut target);

        assert_eq!(
            report.diagnostics,
            [Diagnostic::MissingField {
                field: "SPAWN_INTERVAL"
            }]
        );
        assert_eq!(target.spawn_interval, 42.0);
        assert_eq!(target.start_color, source.start_color);
        assert!((target.spread - source.spread).abs() < 1e-6);
    }

    #[test]
    fn test_malformed_value_recovers_rest() {
        let source = example_params();
        let text = encode(&source, Variant::Named, "smoke");

        let text = text.replace(
            "LIFETIME : float : 1;",
            "LIFETIME : float : notanumber;",
        );

        let mut target = EmitterParams::default();
        target.lifetime = 7.0;
        let report = decode_into(&text, Variant::Named, &mut target);

        assert_eq!(
            report.diagnostics,
            [Diagnostic::MalformedNumber {
                field: "LIFETIME",
                value: "notanumber".to_string()
            }]
        );
        assert_eq!(target.lifetime, 7.0);
        // Everything after the bad line still decodes
        assert_eq!(target.end_color, source.end_color);
        assert!((target.spread - source.spread).abs() < 1e-6);
    }

    #[test]
    fn test_duplicate_field_last_write_wins() {
        let source = example_params();
        let mut text = encode(&source, Variant::Named, "smoke");
        let closing = text.rfind('}').unwrap();
        text.insert_str(closing, "\tLIFETIME : float : 9.5;\n");

        let mut target = EmitterParams::default();
        let report = decode_into(&text, Variant::Named, &mut target);

        assert_eq!(target.lifetime, 9.5);
        assert!(report
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::StructureWarning(s) if s.contains("LIFETIME"))));
    }

    #[test]
    fn test_out_of_range_flat_color() {
        let source = example_params();
        let text = encode(&source, Variant::Flat, "");
        let text = text.replace(
            &crate::value::format_color_dec(source.start_color),
            "{ 999, 0, 0, 255 }",
        );

        let mut target = EmitterParams::default();
        let report = decode_into(&text, Variant::Flat, &mut target);

        assert_eq!(
            report.diagnostics,
            [Diagnostic::MalformedColor {
                field: "START_COLOR",
                value: "{ 999, 0, 0, 255 }".to_string()
            }]
        );
    }
}
