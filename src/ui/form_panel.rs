use eframe::egui;

use story_forge::model::story_request::{
    Genre, LengthClass, WritingStyle, MAX_CHARACTERS, MIN_CHARACTERS,
};

use super::app::StoryApp;

pub fn draw_form_panel(ctx: &egui::Context, app: &mut StoryApp) {
    egui::SidePanel::left("story_settings")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.heading("Story Settings");
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                draw_story_options(ui, app);
                ui.separator();
                draw_characters(ui, app);
                ui.separator();

                let generate = ui.add_enabled(
                    !app.ui.generating,
                    egui::Button::new("Generate Story"),
                );
                if generate.clicked() {
                    app.start_generation();
                }

                if let Some(err) = &app.ui.ui_error {
                    ui.colored_label(egui::Color32::LIGHT_RED, err);
                }

                ui.separator();
                ui.collapsing("Display", |ui| {
                    ui.label("UI Scale");
                    let scale = ui.add(egui::Slider::new(
                        &mut app.ui.settings.ui_scale,
                        0.75..=2.0,
                    ));
                    if scale.drag_stopped() || (scale.changed() && !scale.dragged()) {
                        app.save_settings();
                    }
                });
            });
        });
}

fn draw_story_options(ui: &mut egui::Ui, app: &mut StoryApp) {
    let form = &mut app.ui.form;

    ui.label("Genre");
    egui::ComboBox::from_id_salt("genre")
        .selected_text(form.genre.label())
        .show_ui(ui, |ui| {
            for genre in Genre::ALL {
                ui.selectable_value(&mut form.genre, genre, genre.label());
            }
        });

    ui.label("Writing Style");
    egui::ComboBox::from_id_salt("writing_style")
        .selected_text(form.writing_style.label())
        .show_ui(ui, |ui| {
            for style in WritingStyle::ALL {
                ui.selectable_value(&mut form.writing_style, style, style.label());
            }
        });

    ui.label("Story Length");
    for length in LengthClass::ALL {
        ui.radio_value(&mut form.length_class, length, length.label());
    }
}

fn draw_characters(ui: &mut egui::Ui, app: &mut StoryApp) {
    let form = &mut app.ui.form;

    ui.label("Number of Characters");
    ui.add(egui::Slider::new(
        &mut form.num_characters,
        MIN_CHARACTERS..=MAX_CHARACTERS,
    ));

    for (i, c) in form
        .characters
        .iter_mut()
        .take(form.num_characters)
        .enumerate()
    {
        ui.group(|ui| {
            ui.label(format!("Character {} Name", i + 1));
            ui.text_edit_singleline(&mut c.name);

            ui.label(format!("Character {} Traits", i + 1));
            ui.text_edit_multiline(&mut c.traits);

            ui.label(format!("Character {} Background", i + 1));
            ui.text_edit_multiline(&mut c.background);
        });
        ui.add_space(4.0);
    }
}
