pub mod engine;
pub mod errors;
pub mod export;
pub mod inference_client;
pub mod prompt_builder;
pub mod protocol;
pub mod retry;
pub mod story;
pub mod story_parser;
pub mod transport;

pub use errors::InferenceError;
pub use inference_client::{InferenceClient, InferenceOutcome};
pub use retry::RetryPolicy;
pub use story::{HttpStoryGenerator, StoryGenerator};
