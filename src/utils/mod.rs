pub mod error;
pub mod logging;
pub mod normalization;
pub mod string_utils;

pub use error::*;
pub use normalization::TextNormalizer;
pub use string_utils::preview;
