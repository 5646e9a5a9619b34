use crate::engine::errors::InferenceError;
use crate::model::generated_image::GeneratedImage;
use crate::model::story_request::StoryRequest;
use crate::model::story_result::StoryResult;

pub enum EngineCommand {
    Generate(StoryRequest),
}

#[derive(Debug)]
pub enum EngineResponse {
    StoryStarted,
    Story(StoryResult),

    ImageStarted {
        index: usize,
    },
    Image {
        index: usize,
        name: String,
        outcome: Result<GeneratedImage, InferenceError>,
    },

    Finished,
}
