use std::path::Path;
use std::str::FromStr;

/// Name of the per-directory output subfolder. Pruned from the walk so
/// converted files are never reprocessed as inputs.
pub const OUTPUT_DIR_NAME: &str = "webp_output";

/// Extension of converted files.
pub const OUTPUT_EXTENSION: &str = "webp";

/// Input formats eligible for conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    JPEG,
    PNG,
    /// Camera-native format; decoding goes through an external utility.
    HEIC,
}

impl InputFormat {
    /// Whether this format needs the external camera-decode step
    pub fn requires_camera_decode(&self) -> bool {
        matches!(self, Self::HEIC)
    }

    /// Determine the input format from a path's extension (case-insensitive).
    ///
    /// Returns `None` for ineligible files, which the walker leaves in
    /// place without reporting.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        Self::from_str(ext).ok()
    }
}

impl FromStr for InputFormat {
    type Err = ();

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::JPEG),
            "png" => Ok(Self::PNG),
            "heic" => Ok(Self::HEIC),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_matching_is_case_insensitive() {
        assert_eq!(InputFormat::from_path(Path::new("a.PNG")), Some(InputFormat::PNG));
        assert_eq!(InputFormat::from_path(Path::new("b.JpEg")), Some(InputFormat::JPEG));
        assert_eq!(InputFormat::from_path(Path::new("c.HEIC")), Some(InputFormat::HEIC));
    }

    #[test]
    fn ineligible_extensions_are_rejected() {
        assert_eq!(InputFormat::from_path(Path::new("anim.gif")), None);
        assert_eq!(InputFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(InputFormat::from_path(Path::new("no_extension")), None);
        assert_eq!(InputFormat::from_path(Path::new("out.webp")), None);
    }

    #[test]
    fn only_heic_requires_camera_decode() {
        assert!(InputFormat::HEIC.requires_camera_decode());
        assert!(!InputFormat::PNG.requires_camera_decode());
        assert!(!InputFormat::JPEG.requires_camera_decode());
    }
}
