use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub traits: String,
    pub background: String,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        traits: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            traits: traits.into(),
            background: background.into(),
        }
    }

    /// Form defaults for the character in slot `index` (zero based).
    pub fn placeholder(index: usize) -> Self {
        Self {
            name: format!("Character {}", index + 1),
            traits: "Brave, witty, curious".into(),
            background:
                "A young adventurer seeking the truth about an ancient prophecy."
                    .into(),
        }
    }
}
