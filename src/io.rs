use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    diagnostics::DecodeReport,
    formats::{self, Variant},
    params::EmitterParams,
};

/// Read a config file and decode it into `params`. I/O failure is the only
/// fatal error; parse issues come back in the report.
pub fn load_path(path: &Path, variant: Variant, params: &mut EmitterParams) -> Result<DecodeReport> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let report = formats::decode_into(&text, variant, params);

    log::info!("Loaded emitter config from {}", path.display());

    Ok(report)
}

/// Encode `params` and atomically replace the file at `path`: the record is
/// written to a sibling temp file and renamed into place, so an interrupted
/// save can't leave a truncated config behind.
pub fn save_path(
    path: &Path,
    record_name: &str,
    params: &EmitterParams,
    variant: Variant,
) -> Result<()> {
    let text = formats::encode(params, variant, record_name);

    // Append rather than swap the extension, so two configs differing only
    // in extension never share a temp path
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, &text).with_context(|| format!("Failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    log::info!("Saved emitter to {} as {}", path.display(), record_name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;
    use crate::params::Vec2;

    #[test]
    fn test_save_then_load() {
        let path = env::temp_dir().join(format!("emitter_io_test_{}.save", std::process::id()));

        let mut source = EmitterParams::default();
        source.velocity = Vec2 { x: -12.5, y: 3.0 };
        source.spread = 0.25;

        save_path(&path, "roundtrip", &source, Variant::Named).unwrap();

        let mut target = EmitterParams::default();
        let report = load_path(&path, Variant::Named, &mut target).unwrap();

        fs::remove_file(&path).unwrap();

        assert!(report.is_clean(), "diagnostics: {:?}", report.diagnostics);
        assert_eq!(report.record_name.as_deref(), Some("roundtrip"));
        assert_eq!(target.velocity, source.velocity);
        assert_eq!(target.spread, source.spread);
    }

    #[test]
    fn test_save_leaves_extension_siblings_alone() {
        // foo.save must not stage through foo.tmp, or it would clobber a
        // neighbour that really is named foo.tmp
        let path = env::temp_dir().join(format!("emitter_io_sibling_{}.save", std::process::id()));
        let sibling = path.with_extension("tmp");
        fs::write(&sibling, "unrelated file").unwrap();

        save_path(&path, "sibling", &EmitterParams::default(), Variant::Named).unwrap();

        let preserved = fs::read_to_string(&sibling).unwrap();
        let saved = fs::read_to_string(&path).unwrap();

        fs::remove_file(&path).unwrap();
        fs::remove_file(&sibling).unwrap();

        assert_eq!(preserved, "unrelated file");
        assert!(saved.starts_with("sibling\n{\n"));
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let mut params = EmitterParams::default();
        let err = load_path(
            Path::new("/nonexistent/emitter.save"),
            Variant::Named,
            &mut params,
        )
        .unwrap_err();

        assert!(err.to_string().contains("Failed to read"));
    }
}
