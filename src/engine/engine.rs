use std::sync::mpsc::{Receiver, Sender};

use crate::engine::prompt_builder::PromptBuilder;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::retry::{Sleeper, ThreadSleeper};
use crate::engine::story::StoryGenerator;
use crate::engine::transport::{HttpTransport, Transport};
use crate::model::story_request::StoryRequest;

/// Runs generation off the UI thread. One command is handled at a time and
/// every request inside it is sequential.
pub struct Engine<T = HttpTransport, S = ThreadSleeper> {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    generator: StoryGenerator<T, S>,
}

impl<T: Transport, S: Sleeper> Engine<T, S> {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        generator: StoryGenerator<T, S>,
    ) -> Self {
        Self { rx, tx, generator }
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::Generate(request) => self.generate(&request),
            }
        }
        tracing::debug!("engine channel closed, stopping");
    }

    fn generate(&self, request: &StoryRequest) {
        self.send(EngineResponse::StoryStarted);

        let prompt = PromptBuilder::story(request);
        let story = self.generator.request_story(&prompt);
        let has_body = !story.body.is_empty();
        self.send(EngineResponse::Story(story));

        // nothing to illustrate when the provider returned an empty story
        if has_body {
            for (index, character) in request.characters.iter().enumerate() {
                self.send(EngineResponse::ImageStarted { index });

                let outcome = self.generator.character_image(request.genre, character);

                self.send(EngineResponse::Image {
                    index,
                    name: character.name.clone(),
                    outcome,
                });
            }
        }

        self.send(EngineResponse::Finished);
    }

    fn send(&self, resp: EngineResponse) {
        if self.tx.send(resp).is_err() {
            tracing::debug!("UI receiver dropped");
        }
    }
}
