pub mod error;
pub mod formats;

pub use error::{ConvertError, ConvertResult};
pub use formats::{InputFormat, OUTPUT_DIR_NAME, OUTPUT_EXTENSION};
