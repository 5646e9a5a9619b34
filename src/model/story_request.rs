use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::InferenceError;
use crate::model::character::Character;

pub const MIN_CHARACTERS: usize = 1;
pub const MAX_CHARACTERS: usize = 2;

/* =========================
   Genre
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Genre {
    #[default]
    Fantasy,
    SciFi,
    Mystery,
    Horror,
    Romance,
    Adventure,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Fantasy,
        Genre::SciFi,
        Genre::Mystery,
        Genre::Horror,
        Genre::Romance,
        Genre::Adventure,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Genre::Fantasy => "Fantasy",
            Genre::SciFi => "Sci-Fi",
            Genre::Mystery => "Mystery",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::Adventure => "Adventure",
        }
    }
}

/* =========================
   Writing Style
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WritingStyle {
    #[default]
    Formal,
    Humorous,
    Dark,
    Casual,
}

impl WritingStyle {
    pub const ALL: [WritingStyle; 4] = [
        WritingStyle::Formal,
        WritingStyle::Humorous,
        WritingStyle::Dark,
        WritingStyle::Casual,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WritingStyle::Formal => "Formal",
            WritingStyle::Humorous => "Humorous",
            WritingStyle::Dark => "Dark",
            WritingStyle::Casual => "Casual",
        }
    }
}

/* =========================
   Length Class
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthClass {
    #[default]
    ShortStory,
    EpisodeBased,
    LongNovel,
}

impl LengthClass {
    pub const ALL: [LengthClass; 3] = [
        LengthClass::ShortStory,
        LengthClass::EpisodeBased,
        LengthClass::LongNovel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LengthClass::ShortStory => "Short Story",
            LengthClass::EpisodeBased => "Episode-Based",
            LengthClass::LongNovel => "Long Novel",
        }
    }

    /// Phrase interpolated into the prompt ("Write a <phrase> story ...").
    pub fn description(self) -> &'static str {
        match self {
            LengthClass::ShortStory => "2 paragraphs",
            LengthClass::EpisodeBased => "a few short episodes",
            LengthClass::LongNovel => "2 pages long",
        }
    }
}

fn parse_label<T: Copy>(
    all: &[T],
    label_of: fn(T) -> &'static str,
    kind: &str,
    s: &str,
) -> Result<T, InferenceError> {
    all.iter()
        .copied()
        .find(|v| label_of(*v) == s.trim())
        .ok_or_else(|| InferenceError::ConfigError {
            reason: format!("unknown {kind} '{s}'"),
        })
}

impl FromStr for Genre {
    type Err = InferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Genre::ALL, Genre::label, "genre", s)
    }
}

impl FromStr for WritingStyle {
    type Err = InferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&WritingStyle::ALL, WritingStyle::label, "writing style", s)
    }
}

impl FromStr for LengthClass {
    type Err = InferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&LengthClass::ALL, LengthClass::label, "length class", s)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for WritingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for LengthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/* =========================
   Story Request
   ========================= */

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRequest {
    pub genre: Genre,
    pub writing_style: WritingStyle,
    pub length_class: LengthClass,
    pub characters: Vec<Character>,
}

impl StoryRequest {
    pub fn new(
        genre: Genre,
        writing_style: WritingStyle,
        length_class: LengthClass,
        characters: Vec<Character>,
    ) -> Result<Self, InferenceError> {
        if !(MIN_CHARACTERS..=MAX_CHARACTERS).contains(&characters.len()) {
            return Err(InferenceError::ConfigError {
                reason: format!(
                    "a story needs {MIN_CHARACTERS} to {MAX_CHARACTERS} characters, got {}",
                    characters.len()
                ),
            });
        }

        Ok(Self {
            genre,
            writing_style,
            length_class,
            characters,
        })
    }

    /// Builds a request from the display labels a form hands over.
    pub fn parse(
        genre: &str,
        writing_style: &str,
        length_class: &str,
        characters: Vec<Character>,
    ) -> Result<Self, InferenceError> {
        Self::new(
            genre.parse()?,
            writing_style.parse()?,
            length_class.parse()?,
            characters,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_class_labels_parse() {
        for length in LengthClass::ALL {
            assert_eq!(length.label().parse::<LengthClass>().unwrap(), length);
        }
    }

    #[test]
    fn test_unknown_length_class_is_config_error() {
        let err = "Epic Saga".parse::<LengthClass>().unwrap_err();
        assert!(matches!(err, InferenceError::ConfigError { .. }));
        assert!(err.to_string().contains("Epic Saga"));
    }

    #[test]
    fn test_sci_fi_label_keeps_hyphen() {
        assert_eq!("Sci-Fi".parse::<Genre>().unwrap(), Genre::SciFi);
        assert!("SciFi".parse::<Genre>().is_err());
    }

    #[test]
    fn test_character_count_bounds() {
        let none = StoryRequest::new(
            Genre::Fantasy,
            WritingStyle::Formal,
            LengthClass::ShortStory,
            vec![],
        );
        assert!(matches!(none, Err(InferenceError::ConfigError { .. })));

        let three = StoryRequest::new(
            Genre::Fantasy,
            WritingStyle::Formal,
            LengthClass::ShortStory,
            (0..3).map(Character::placeholder).collect(),
        );
        assert!(three.is_err());

        let two = StoryRequest::new(
            Genre::Fantasy,
            WritingStyle::Formal,
            LengthClass::ShortStory,
            (0..2).map(Character::placeholder).collect(),
        );
        assert!(two.is_ok());
    }

    #[test]
    fn test_parse_from_labels() {
        let request = StoryRequest::parse(
            "Mystery",
            "Dark",
            "Long Novel",
            vec![Character::placeholder(0)],
        )
        .unwrap();

        assert_eq!(request.genre, Genre::Mystery);
        assert_eq!(request.writing_style, WritingStyle::Dark);
        assert_eq!(request.length_class, LengthClass::LongNovel);
    }
}
