pub mod fallback;
pub mod prompts;
pub mod sample_questions;
