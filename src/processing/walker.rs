//! Recursive directory walk driving per-file conversion.
//!
//! Pre-order traversal of the tree rooted at the input path. Every
//! visited directory gets (or reuses) a `webp_output` child, which is
//! pruned from traversal so outputs are never reprocessed as inputs.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::processing::converter::{convert_file, FileOutcome};
use crate::processing::decoder::CameraDecoder;
use crate::utils::{ConvertError, ConvertResult, InputFormat, OUTPUT_DIR_NAME, OUTPUT_EXTENSION};

/// Tally of a completed run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub converted: usize,
    pub skipped: usize,
    /// (file path, error message) per failed conversion
    pub failed: Vec<(PathBuf, String)>,
}

/// Walk `root` and convert every eligible file in place.
///
/// Returns an error only when the root does not exist; per-file failures
/// are recorded in the summary and never abort the walk.
pub fn convert_tree(
    root: &Path,
    quality: u32,
    camera: &dyn CameraDecoder,
) -> ConvertResult<RunSummary> {
    if !root.exists() {
        return Err(ConvertError::RootNotFound(root.to_path_buf()));
    }

    let mut summary = RunSummary::default();

    // Sorting forces each directory listing to be read in full before any
    // of its files are processed, so temp decode artifacts created during
    // the walk are never picked up as inputs.
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && e.file_name() == OsStr::new(OUTPUT_DIR_NAME)));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Walk error: {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            // Unconditional, matching the in-place layout contract: every
            // visited directory gets its own output subfolder.
            fs::create_dir_all(entry.path().join(OUTPUT_DIR_NAME))?;
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(format) = InputFormat::from_path(path) else {
            continue;
        };

        match convert_file(path, &output_path_for(path), quality, format, camera) {
            FileOutcome::Converted => summary.converted += 1,
            FileOutcome::Skipped => summary.skipped += 1,
            FileOutcome::Failed(reason) => summary.failed.push((path.to_path_buf(), reason)),
        }
    }

    info!(
        "Run complete: {} converted, {} skipped, {} failed",
        summary.converted,
        summary.skipped,
        summary.failed.len()
    );

    Ok(summary)
}

/// Output path for an input: `<dir>/webp_output/<stem>.webp`.
fn output_path_for(input: &Path) -> PathBuf {
    let dir = input.parent().unwrap_or_else(|| Path::new("."));
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    dir.join(OUTPUT_DIR_NAME).join(name)
}
