use eframe::egui;
use std::sync::mpsc;

use story_forge::config::{settings_io, AppSettings};
use story_forge::engine::engine::Engine;
use story_forge::engine::protocol::{EngineCommand, EngineResponse};
use story_forge::engine::{HttpStoryGenerator, InferenceError};
use story_forge::model::character::Character;
use story_forge::model::generated_image::GeneratedImage;
use story_forge::model::story_request::{
    Genre, LengthClass, StoryRequest, WritingStyle, MAX_CHARACTERS, MIN_CHARACTERS,
};
use story_forge::model::story_result::StoryResult;

use super::form_panel::draw_form_panel;
use super::story_panel::draw_story_panel;

/* =========================
   Form State
   ========================= */

pub struct FormState {
    pub genre: Genre,
    pub writing_style: WritingStyle,
    pub length_class: LengthClass,
    pub num_characters: usize,
    /// Always `MAX_CHARACTERS` long; only the first `num_characters` are sent.
    pub characters: Vec<Character>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            genre: Genre::default(),
            writing_style: WritingStyle::default(),
            length_class: LengthClass::default(),
            num_characters: MIN_CHARACTERS,
            characters: (0..MAX_CHARACTERS).map(Character::placeholder).collect(),
        }
    }
}

impl FormState {
    pub fn to_request(&self) -> Result<StoryRequest, InferenceError> {
        let count = self.num_characters.min(self.characters.len());
        StoryRequest::new(
            self.genre,
            self.writing_style,
            self.length_class,
            self.characters[..count].to_vec(),
        )
    }
}

/* =========================
   Generation Results
   ========================= */

pub enum PortraitState {
    Waiting,
    Loading,
    Ready {
        image: GeneratedImage,
        texture: egui::TextureHandle,
    },
    Failed(String),
}

pub struct Portrait {
    pub name: String,
    pub state: PortraitState,
}

#[derive(Default)]
pub struct UiState {
    pub form: FormState,
    pub settings: AppSettings,

    pub generating: bool,
    pub story_pending: bool,
    pub story: Option<StoryResult>,
    /// Genre of the request that produced the shown results.
    pub shown_genre: Genre,
    pub portraits: Vec<Portrait>,

    pub ui_error: Option<String>,
}

/* =========================
   App
   ========================= */

pub struct StoryApp {
    pub ui: UiState,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl StoryApp {
    pub fn new(generator: HttpStoryGenerator, settings: AppSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, generator);
            engine.run();
        });

        Self {
            ui: UiState {
                settings,
                ..Default::default()
            },
            cmd_tx,
            resp_rx,
        }
    }

    pub fn start_generation(&mut self) {
        let request = match self.ui.form.to_request() {
            Ok(request) => request,
            Err(e) => {
                self.ui.ui_error = Some(e.to_string());
                return;
            }
        };

        self.ui.ui_error = None;
        self.ui.story = None;
        self.ui.shown_genre = request.genre;
        self.ui.portraits = request
            .characters
            .iter()
            .map(|c| Portrait {
                name: c.name.clone(),
                state: PortraitState::Waiting,
            })
            .collect();

        if self.cmd_tx.send(EngineCommand::Generate(request)).is_err() {
            self.ui.ui_error = Some("Generation worker has stopped.".into());
            return;
        }
        self.ui.generating = true;
    }

    pub fn save_settings(&self) {
        settings_io::save_settings(&self.ui.settings);
    }

    fn apply_response(&mut self, ctx: &egui::Context, resp: EngineResponse) {
        match resp {
            EngineResponse::StoryStarted => self.ui.story_pending = true,
            EngineResponse::Story(story) => {
                self.ui.story_pending = false;
                self.ui.story = Some(story);
            }
            EngineResponse::ImageStarted { index } => {
                if let Some(p) = self.ui.portraits.get_mut(index) {
                    p.state = PortraitState::Loading;
                }
            }
            EngineResponse::Image { index, name, outcome } => {
                let state = match outcome {
                    Ok(image) => {
                        let texture = ctx.load_texture(
                            format!("portrait_{index}_{name}"),
                            egui::ColorImage::from_rgba_unmultiplied(
                                [image.width as usize, image.height as usize],
                                &image.rgba,
                            ),
                            egui::TextureOptions::default(),
                        );
                        PortraitState::Ready { image, texture }
                    }
                    Err(e) => PortraitState::Failed(e.to_string()),
                };
                if let Some(p) = self.ui.portraits.get_mut(index) {
                    p.state = state;
                }
            }
            EngineResponse::Finished => {
                self.ui.generating = false;
                self.ui.story_pending = false;
            }
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for StoryApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.ui.settings.ui_scale);

        while let Ok(resp) = self.resp_rx.try_recv() {
            self.apply_response(ctx, resp);
        }

        draw_form_panel(ctx, self);
        draw_story_panel(ctx, &mut self.ui);

        // keep polling the worker while it is busy
        if self.ui.generating {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }
    }
}
