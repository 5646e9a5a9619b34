pub mod character;
pub mod generated_image;
pub mod story_request;
pub mod story_result;
