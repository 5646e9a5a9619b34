use crate::model::character::Character;
use crate::model::story_request::{Genre, StoryRequest};

/// Builds the prompts sent to the inference API.
/// This struct is intentionally dumb: it only formats text.
/// No parsing, no networking.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn story(request: &StoryRequest) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "Write a {} story in the {} genre with a {} tone.\n",
            request.length_class.description(),
            request.genre.label(),
            request.writing_style.label(),
        ));
        prompt.push_str("The story should focus on the following characters:\n");
        push_character_blocks(&mut prompt, &request.characters);
        prompt.push_str(
            "Ensure the story is engaging, well-structured, and includes a character arc.\n",
        );

        prompt
    }

    /// Subject description for one character's portrait.
    pub fn character_image(genre: Genre, character: &Character) -> String {
        format!(
            "A {} character with traits: {}, in an artistic fantasy style.",
            genre.label().to_lowercase(),
            character.traits
        )
    }

    /// Wraps a subject description into the text sent to the image model.
    pub fn image_request(subject: &str) -> String {
        format!("A high-quality image of {subject} in an artistic style.")
    }
}

fn push_character_blocks(prompt: &mut String, characters: &[Character]) {
    let blocks: Vec<String> = characters.iter().map(character_block).collect();
    prompt.push_str(&blocks.join("\n"));
    prompt.push('\n');
}

fn character_block(c: &Character) -> String {
    format!(
        "- Name: {}\n  - Traits: {}\n  - Background: {}",
        c.name, c.traits, c.background
    )
}
