use eframe::egui;

use story_forge::engine::export::{image_file_name, write_image, write_story, STORY_FILE_NAME};
use story_forge::model::generated_image::GeneratedImage;
use story_forge::model::story_result::StoryResult;

use super::app::{Portrait, PortraitState, UiState};

pub fn draw_story_panel(ctx: &egui::Context, state: &mut UiState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("AI Story Generator");
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            if state.story_pending {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Crafting your story...");
                });
            }

            let Some(story) = &state.story else {
                return;
            };

            // an empty body means there is nothing to show or illustrate
            if story.body.is_empty() {
                return;
            }

            if let Err(e) = draw_story(ui, story) {
                state.ui_error = Some(e);
            }

            for portrait in &state.portraits {
                ui.add_space(12.0);
                if let Err(e) = draw_portrait(ui, portrait, state.shown_genre.label()) {
                    state.ui_error = Some(e);
                }
            }
        });
    });
}

fn draw_story(ui: &mut egui::Ui, story: &StoryResult) -> Result<(), String> {
    ui.heading(&story.title);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(&story.body);
    });

    if ui.button("Download Story").clicked() {
        let target = rfd::FileDialog::new()
            .set_file_name(STORY_FILE_NAME)
            .add_filter("Text", &["txt"])
            .save_file();

        if let Some(path) = target {
            write_story(&path, story).map_err(|e| format!("Failed to save story: {e}"))?;
        }
    }

    Ok(())
}

fn draw_portrait(ui: &mut egui::Ui, portrait: &Portrait, genre: &str) -> Result<(), String> {
    ui.heading(format!("Image for {}", portrait.name));

    match &portrait.state {
        PortraitState::Waiting => {
            ui.label("Waiting for the story...");
        }
        PortraitState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Creating an image for {}...", portrait.name));
            });
        }
        PortraitState::Ready { image, texture } => {
            ui.add(egui::Image::new(texture).max_width(ui.available_width()));
            ui.label(format!("{} - {} Character", portrait.name, genre));

            if ui
                .button(format!("Download {}'s Image", portrait.name))
                .clicked()
            {
                save_image(&portrait.name, image)?;
            }
        }
        PortraitState::Failed(reason) => {
            ui.colored_label(
                egui::Color32::LIGHT_RED,
                format!(
                    "Failed to generate image for {}. Try again later.",
                    portrait.name
                ),
            );
            ui.small(reason);
        }
    }

    Ok(())
}

fn save_image(name: &str, image: &GeneratedImage) -> Result<(), String> {
    let target = rfd::FileDialog::new()
        .set_file_name(image_file_name(name))
        .add_filter("PNG image", &["png"])
        .save_file();

    if let Some(path) = target {
        write_image(&path, image).map_err(|e| format!("Failed to save image: {e}"))?;
    }
    Ok(())
}
