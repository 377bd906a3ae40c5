use std::path::Path;

use anyhow::Result;

use crate::{
    formats::Variant,
    io::{load_path, save_path},
    params::EmitterParams,
};

/// Decode `input` and re-encode it at `output` in the named variant. This is
/// the migration path for legacy flat files; diagnostics from the decode are
/// printed but don't block the write, since the point of converting a
/// damaged file is usually to salvage what's left of it.
pub fn convert_file(
    input: &Path,
    output: &Path,
    from: Variant,
    record_name: Option<&str>,
) -> Result<()> {
    let mut params = EmitterParams::default();
    let report = load_path(input, from, &mut params)?;

    for diagnostic in &report.diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    let fallback = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "emitter".to_string());
    let record_name = record_name
        .map(str::to_string)
        .or(report.record_name)
        .unwrap_or(fallback);

    save_path(output, &record_name, &params, Variant::Named)
}
