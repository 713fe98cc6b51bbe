//! Driver for a full icon set
//!
//! Checks the imaging capability, creates the output directory, then renders
//! each target in order. The first failure aborts the run.

use std::fs;
use std::path::PathBuf;

use log::info;

use crate::rendering::render_with_palette;
use crate::{ensure_png_support, Error, GeneratorConfig, Result, Size};

/// Report for one written icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: Size,
    pub path: PathBuf,
    /// Encoded PNG length in bytes
    pub bytes: usize,
    /// Hex SHA-256 of the written file
    pub digest: String,
}

/// Render every target in `config`, calling `on_created` after each file is written
pub fn generate<F>(config: &GeneratorConfig, mut on_created: F) -> Result<Vec<GeneratedIcon>>
where
    F: FnMut(&GeneratedIcon),
{
    ensure_png_support()?;

    fs::create_dir_all(&config.out_dir).map_err(|e| Error::io(&config.out_dir, e))?;

    let mut created = Vec::with_capacity(config.targets.len());
    for target in &config.targets {
        let path = config.out_dir.join(&target.file_name);
        let icon = render_with_palette(target.size, &config.palette, &path)?;
        let report = GeneratedIcon {
            size: target.size,
            path,
            bytes: icon.png_data.len(),
            digest: icon.digest(),
        };
        info!(
            "Wrote {} ({}, {} bytes, sha256 {})",
            report.path.display(),
            report.size,
            report.bytes,
            report.digest
        );
        on_created(&report);
        created.push(report);
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IconTarget;

    #[cfg(feature = "png")]
    #[test]
    fn empty_target_list_still_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("nested").join("icons");
        let config = GeneratorConfig {
            out_dir: out_dir.clone(),
            targets: Vec::new(),
            ..Default::default()
        };
        let created = generate(&config, |_| {}).unwrap();
        assert!(created.is_empty());
        assert!(out_dir.is_dir());
    }

    #[cfg(feature = "png")]
    #[test]
    fn callback_sees_targets_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            out_dir: tmp.path().to_path_buf(),
            targets: vec![
                IconTarget::standard(16).unwrap(),
                IconTarget::standard(64).unwrap(),
            ],
            ..Default::default()
        };
        let mut seen = Vec::new();
        generate(&config, |icon| seen.push(icon.size.get())).unwrap();
        assert_eq!(seen, vec![16, 64]);
    }

    #[cfg(not(feature = "png"))]
    #[test]
    fn missing_capability_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("icons");
        let config = GeneratorConfig {
            out_dir: out_dir.clone(),
            ..Default::default()
        };
        let err = generate(&config, |_| {}).unwrap_err();
        assert!(err.is_missing_capability());
        assert!(!out_dir.exists());
    }
}
