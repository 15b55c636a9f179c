pub mod generated_prompt;
pub mod physics_result;
pub mod text_or_list;
pub use generated_prompt::GeneratedPrompt;
pub use physics_result::{PhysicsResult, RawPhysicsResult};
pub use text_or_list::TextOrList;
