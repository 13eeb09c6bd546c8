pub mod analysis;
pub mod classifier;
pub mod extraction;
pub mod prompts;
pub mod reply_generator;

pub use analysis::analyze_email;
pub use classifier::classify_email;
pub use extraction::{extract_email_text, ExtractionError};
pub use reply_generator::{generate_reply, generate_reply_for_label};
