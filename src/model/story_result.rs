use serde::{Deserialize, Serialize};

pub const UNTITLED_STORY: &str = "Untitled Story";
pub const ERROR_TITLE: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryResult {
    pub title: String,
    pub body: String,
    /// Provider text before splitting. Empty on the error path.
    pub raw: String,
}

impl StoryResult {
    pub fn failed(message: impl std::fmt::Display) -> Self {
        Self {
            title: ERROR_TITLE.into(),
            body: format!("Story generation failed: {message}"),
            raw: String::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.title == ERROR_TITLE && self.raw.is_empty()
    }
}
