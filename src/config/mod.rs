pub mod settings;

pub use settings::{NormalizerLanguage, Settings};
