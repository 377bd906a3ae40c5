use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    formats::{format_value, Variant},
    io::load_path,
    params::EmitterParams,
    schema::SCHEMA,
};

/// Decode a config file and print its fields to stdout. Diagnostics go to
/// stderr so the output stays pipeable.
pub fn show_file(path: &Path, variant: Variant, json: bool) -> Result<()> {
    let mut params = EmitterParams::default();
    let report = load_path(path, variant, &mut params)?;

    for diagnostic in &report.diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    if json {
        let rendered =
            serde_json::to_string_pretty(&params).context("Failed to render params as JSON")?;
        println!("{}", rendered);
        return Ok(());
    }

    if let Some(name) = &report.record_name {
        println!("record: {}", name);
    }
    for &field in SCHEMA {
        println!(
            "{:<26} {}",
            field.name(),
            format_value(params.value_of(field), variant)
        );
    }

    Ok(())
}
