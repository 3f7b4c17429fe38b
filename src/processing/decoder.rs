//! Image decoding, including the camera-native (HEIC) path.
//!
//! PNG and JPEG open directly with the image crate. HEIC goes through a
//! pluggable [`CameraDecoder`] backend; the default backend shells out to
//! the platform `sips` utility, producing a temporary PNG next to the
//! input that the caller deletes after a successful conversion.

use std::path::{Path, PathBuf};
use std::process::Command;

use image::DynamicImage;
use tracing::debug;

use crate::utils::{ConvertError, ConvertResult, InputFormat};

/// A decoded image plus the temporary decode artifact, if the format
/// required one. The artifact is deleted by the caller only after the
/// encoded output and the original's removal have both succeeded.
pub struct DecodedImage {
    pub image: DynamicImage,
    pub temp_artifact: Option<PathBuf>,
}

/// Pluggable backend for camera-native formats.
///
/// Keeps the walk logic independent of the platform utility: hosts
/// without `sips` can substitute a library-based decoder, and tests use
/// a stub.
pub trait CameraDecoder {
    fn decode(&self, path: &Path) -> ConvertResult<DecodedImage>;
}

/// Backend that invokes `sips` to produce an intermediate PNG.
pub struct SipsDecoder;

impl CameraDecoder for SipsDecoder {
    fn decode(&self, path: &Path) -> ConvertResult<DecodedImage> {
        let temp_png = temp_artifact_path(path);
        debug!("Decoding {} via sips", path.display());

        let status = Command::new("sips")
            .args(["-s", "format", "png"])
            .arg(path)
            .arg("--out")
            .arg(&temp_png)
            .status()
            .map_err(|e| ConvertError::camera_decode(format!("Failed to run sips: {}", e)))?;

        if !status.success() {
            return Err(ConvertError::camera_decode(format!(
                "sips exited with {} for {}",
                status,
                path.display()
            )));
        }

        let image = image::open(&temp_png)?;
        Ok(DecodedImage {
            image,
            temp_artifact: Some(temp_png),
        })
    }
}

/// Temporary PNG path for a camera-native input: the full file name with
/// `.png` appended (`c.heic` -> `c.heic.png`), in the same directory.
pub fn temp_artifact_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".png");
    PathBuf::from(name)
}

/// Open an eligible input, dispatching camera-native formats to the backend.
pub fn open_image(
    path: &Path,
    format: InputFormat,
    camera: &dyn CameraDecoder,
) -> ConvertResult<DecodedImage> {
    if format.requires_camera_decode() {
        camera.decode(path)
    } else {
        let image = image::open(path)?;
        Ok(DecodedImage {
            image,
            temp_artifact: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_artifact_keeps_the_full_input_name() {
        assert_eq!(
            temp_artifact_path(Path::new("/photos/c.heic")),
            PathBuf::from("/photos/c.heic.png")
        );
    }
}
