use std::path::Path;

use anyhow::Result;

use crate::{formats::Variant, io::load_path, params::EmitterParams};

/// Decode a config file and report every diagnostic. Returns the number of
/// diagnostics so the caller can pick an exit code.
pub fn check_file(path: &Path, variant: Variant) -> Result<usize> {
    let mut params = EmitterParams::default();
    let report = load_path(path, variant, &mut params)?;

    for diagnostic in &report.diagnostics {
        eprintln!("{}: {}", path.display(), diagnostic);
    }

    if report.is_clean() {
        println!("{}: ok", path.display());
    }

    Ok(report.diagnostics.len())
}
