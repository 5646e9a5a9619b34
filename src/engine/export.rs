use std::fs;
use std::path::Path;

use crate::model::generated_image::GeneratedImage;
use crate::model::story_result::StoryResult;

pub const STORY_FILE_NAME: &str = "generated_story.txt";

/// Suggested download name for a character portrait.
pub fn image_file_name(character_name: &str) -> String {
    let stem: String = character_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if stem.is_empty() {
        "character.png".to_string()
    } else {
        format!("{stem}.png")
    }
}

/// Writes the formatted body, the same text shown on screen.
pub fn write_story(path: &Path, story: &StoryResult) -> anyhow::Result<()> {
    fs::write(path, &story.body)?;
    tracing::info!(path = %path.display(), "story saved");
    Ok(())
}

pub fn write_image(path: &Path, image: &GeneratedImage) -> anyhow::Result<()> {
    fs::write(path, &image.png)?;
    tracing::info!(path = %path.display(), "image saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::story_parser::split_story;
    use crate::model::generated_image::tests::png_fixture;

    #[test]
    fn test_image_file_name_plain() {
        assert_eq!(image_file_name("Ada"), "Ada.png");
        assert_eq!(image_file_name("Character 1"), "Character 1.png");
    }

    #[test]
    fn test_image_file_name_strips_separators() {
        let name = image_file_name("../etc/passwd");
        assert!(!name.contains('/'));
        assert_eq!(name, ".._etc_passwd.png");
        assert!(!image_file_name("a\\b").contains('\\'));
    }

    #[test]
    fn test_image_file_name_blank() {
        assert_eq!(image_file_name("   "), "character.png");
    }

    #[test]
    fn test_write_story_writes_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORY_FILE_NAME);

        write_story(&path, &split_story("A. B.")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "A\n\nB.");
    }

    #[test]
    fn test_write_image_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Ada.png");
        let image = GeneratedImage::decode(&png_fixture(2, 2)).unwrap();

        write_image(&path, &image).unwrap();

        let written = fs::read(&path).unwrap();
        assert_eq!(written, image.png);
        assert!(image::load_from_memory(&written).is_ok());
    }
}
