pub mod app;
pub mod form_panel;
pub mod story_panel;
