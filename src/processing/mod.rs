mod converter;
mod decoder;
mod walker;

pub use converter::FileOutcome;
pub use decoder::{CameraDecoder, DecodedImage, SipsDecoder};
pub use walker::{convert_tree, RunSummary};
