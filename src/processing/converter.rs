//! Per-file conversion: skip check, decode, WebP encode, cleanup.

use std::fs;
use std::path::Path;

use tracing::{info, warn};
use webp::Encoder;

use crate::processing::decoder::{open_image, CameraDecoder};
use crate::utils::{ConvertError, ConvertResult, InputFormat};

/// Outcome of a single file's conversion attempt.
///
/// Explicit values rather than control-flow errors, so the walker can
/// tally a run without parsing console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Converted,
    Skipped,
    Failed(String),
}

/// Convert one eligible input to `output`, deleting the original on success.
///
/// If the output already exists the file is skipped entirely; skips never
/// delete anything. Failures leave the original in place (a temp artifact
/// from a failed attempt is not cleaned up) and are reported in the
/// outcome rather than propagated.
pub fn convert_file(
    input: &Path,
    output: &Path,
    quality: u32,
    format: InputFormat,
    camera: &dyn CameraDecoder,
) -> FileOutcome {
    if output.exists() {
        info!("Skipping (already converted): {}", input.display());
        return FileOutcome::Skipped;
    }

    match try_convert(input, output, quality, format, camera) {
        Ok(()) => {
            info!("Converted: {} -> {}", input.display(), output.display());
            FileOutcome::Converted
        }
        Err(e) => {
            warn!("Failed to convert {}: {}", input.display(), e);
            FileOutcome::Failed(e.to_string())
        }
    }
}

fn try_convert(
    input: &Path,
    output: &Path,
    quality: u32,
    format: InputFormat,
    camera: &dyn CameraDecoder,
) -> ConvertResult<()> {
    let decoded = open_image(input, format, camera)?;

    // Drop alpha: WebP output is three-channel RGB.
    let rgb = decoded.image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let encoded = Encoder::from_rgb(rgb.as_raw(), width, height).encode(quality as f32);

    // The output must be fully on disk before the original is removed, so
    // a failure in between never loses image data.
    fs::write(output, &*encoded)
        .map_err(|e| ConvertError::encode(format!("Failed to write {}: {}", output.display(), e)))?;
    fs::remove_file(input)?;

    if let Some(temp) = decoded.temp_artifact {
        fs::remove_file(&temp)?;
    }

    Ok(())
}
