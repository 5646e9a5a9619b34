use crate::config::app_config::AppConfig;
use crate::engine::errors::InferenceError;
use crate::engine::inference_client::{InferenceClient, InferenceOutcome};
use crate::engine::prompt_builder::PromptBuilder;
use crate::engine::retry::{RetryPolicy, Sleeper, ThreadSleeper};
use crate::engine::story_parser::split_story;
use crate::engine::transport::{HttpTransport, Transport};
use crate::model::character::Character;
use crate::model::generated_image::GeneratedImage;
use crate::model::story_request::Genre;
use crate::model::story_result::StoryResult;

/// Story and portrait requests against the configured models.
pub struct StoryGenerator<T = HttpTransport, S = ThreadSleeper> {
    client: InferenceClient<T, S>,
    text_model: String,
    image_model: String,
    policy: RetryPolicy,
}

pub type HttpStoryGenerator = StoryGenerator<HttpTransport, ThreadSleeper>;

impl HttpStoryGenerator {
    pub fn from_config(config: &AppConfig) -> Result<Self, InferenceError> {
        let transport = HttpTransport::new(config.request_timeout)?;
        let client = InferenceClient::new(
            transport,
            ThreadSleeper,
            config.api_base_url.clone(),
            config.credential.clone(),
        );

        Ok(Self::new(
            client,
            config.text_model.clone(),
            config.image_model.clone(),
            config.interactive_policy,
        ))
    }
}

impl<T: Transport, S: Sleeper> StoryGenerator<T, S> {
    pub fn new(
        client: InferenceClient<T, S>,
        text_model: impl Into<String>,
        image_model: impl Into<String>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            client,
            text_model: text_model.into(),
            image_model: image_model.into(),
            policy,
        }
    }

    /// Never fails: provider errors come back as a story titled "Error".
    pub fn request_story(&self, prompt: &str) -> StoryResult {
        match self.client.infer_text(&self.text_model, prompt, &self.policy) {
            Ok(raw) => split_story(&raw),
            Err(e) => {
                tracing::error!(error = %e, "story generation failed");
                StoryResult::failed(e)
            }
        }
    }

    pub fn generate_image(&self, subject: &str) -> InferenceOutcome<GeneratedImage> {
        let inputs = PromptBuilder::image_request(subject);
        let bytes = self.client.infer(&self.image_model, &inputs, &self.policy)?;
        GeneratedImage::decode(&bytes)
    }

    pub fn character_image(
        &self,
        genre: Genre,
        character: &Character,
    ) -> InferenceOutcome<GeneratedImage> {
        let subject = PromptBuilder::character_image(genre, character);
        self.generate_image(&subject).inspect_err(|e| {
            tracing::warn!(character = %character.name, error = %e, "image generation failed");
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::engine::inference_client::tests::{client, RecordingSleeper, StubTransport};
    use crate::model::generated_image::tests::png_fixture;

    pub(crate) fn generator<'a>(
        transport: &'a StubTransport,
        sleeper: &'a RecordingSleeper,
    ) -> StoryGenerator<&'a StubTransport, &'a RecordingSleeper> {
        StoryGenerator::new(
            client(transport, sleeper),
            "text/model",
            "image/model",
            RetryPolicy::interactive(),
        )
    }

    #[test]
    fn test_request_story_splits_text() {
        let transport = StubTransport::new(&[(200, "A. B. C.")]);
        let sleeper = RecordingSleeper::default();

        let story = generator(&transport, &sleeper).request_story("prompt");

        assert_eq!(story.title, "A");
        assert_eq!(story.body, "A\n\nB\n\nC.");
        assert_eq!(story.raw, "A. B. C.");
        assert!(transport.requests.borrow()[0].0.ends_with("/text/model"));
    }

    #[test]
    fn test_request_story_recovers_from_http_error() {
        let transport = StubTransport::new(&[(500, "boom")]);
        let sleeper = RecordingSleeper::default();

        let story = generator(&transport, &sleeper).request_story("prompt");

        assert!(story.is_error());
        assert_eq!(story.title, "Error");
        assert!(story.body.starts_with("Story generation failed: "));
        assert!(story.body.contains("HTTP 500"));
    }

    #[test]
    fn test_request_story_interactive_does_not_wait_for_loading_model() {
        let transport = StubTransport::new(&[(503, "loading"), (200, "late.")]);
        let sleeper = RecordingSleeper::default();

        let story = generator(&transport, &sleeper).request_story("prompt");

        assert_eq!(story.title, "Error");
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn test_character_image_prompt_and_decode() {
        let png = png_fixture(4, 4);
        let transport = StubTransport::from_bytes(vec![(200, png)]);
        let sleeper = RecordingSleeper::default();

        let image = generator(&transport, &sleeper)
            .character_image(Genre::Horror, &Character::new("Ada", "pale", "x"))
            .unwrap();

        assert_eq!(image.width, 4);
        let (url, inputs) = transport.requests.borrow()[0].clone();
        assert!(url.ends_with("/image/model"));
        assert_eq!(
            inputs,
            "A high-quality image of A horror character with traits: pale, in an artistic fantasy style. in an artistic style."
        );
    }

    #[test]
    fn test_character_image_malformed_body() {
        let transport = StubTransport::new(&[(200, "not an image")]);
        let sleeper = RecordingSleeper::default();

        let err = generator(&transport, &sleeper)
            .character_image(Genre::Fantasy, &Character::placeholder(0))
            .unwrap_err();

        assert!(matches!(err, InferenceError::MalformedResponse { .. }));
    }
}
