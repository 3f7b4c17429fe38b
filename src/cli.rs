//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// Batch-convert an image tree (PNG/JPEG/HEIC) to WebP in place.
///
/// Converted files land in a `webp_output` subfolder of each directory;
/// originals are deleted after a successful conversion, and files whose
/// output already exists are skipped.
#[derive(Debug, Parser)]
#[command(name = "webpify", version, about, long_about = None)]
pub struct Cli {
    /// Root directory to walk
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// WebP quality (1-100)
    #[arg(short, long, default_value_t = 85, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub quality: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_defaults_to_85() {
        let cli = Cli::try_parse_from(["webpify", "/photos"]).unwrap();
        assert_eq!(cli.quality, 85);
        assert_eq!(cli.root, PathBuf::from("/photos"));
    }

    #[test]
    fn quality_flag_is_parsed() {
        let cli = Cli::try_parse_from(["webpify", "--quality", "60", "/photos"]).unwrap();
        assert_eq!(cli.quality, 60);
    }

    #[test]
    fn missing_root_is_a_usage_error() {
        assert!(Cli::try_parse_from(["webpify"]).is_err());
    }

    #[test]
    fn out_of_range_quality_is_rejected() {
        assert!(Cli::try_parse_from(["webpify", "-q", "0", "/photos"]).is_err());
        assert!(Cli::try_parse_from(["webpify", "-q", "101", "/photos"]).is_err());
    }
}
