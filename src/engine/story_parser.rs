use crate::model::story_result::{StoryResult, UNTITLED_STORY};

/// Splits provider text into a title and paragraphs.
///
/// Naive by design: every ". " starts a new paragraph and the title is
/// whatever precedes the first ".", so abbreviations, decimals and quoted
/// dialogue are cut too. Output must stay reproducible, so do not swap this
/// for a sentence tokenizer.
pub fn split_story(raw: &str) -> StoryResult {
    let body = raw.split(". ").collect::<Vec<_>>().join("\n\n");

    let title = match raw.split_once('.') {
        Some((before, _)) => before.to_string(),
        None => UNTITLED_STORY.to_string(),
    };

    StoryResult {
        title,
        body,
        raw: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_period_space() {
        let story = split_story("A. B. C.");
        assert_eq!(story.body, "A\n\nB\n\nC.");
        assert_eq!(story.title, "A");
        assert_eq!(story.raw, "A. B. C.");
    }

    #[test]
    fn test_no_period_is_untitled() {
        let story = split_story("Once upon a time there was a fox");
        assert_eq!(story.title, "Untitled Story");
        assert_eq!(story.body, "Once upon a time there was a fox");
    }

    #[test]
    fn test_decimals_and_abbreviations_are_cut() {
        let story = split_story("Dr. Smith paid 3.50 coins. Then left");
        assert_eq!(story.title, "Dr");
        assert_eq!(story.body, "Dr\n\nSmith paid 3.50 coins\n\nThen left");
    }

    #[test]
    fn test_leading_period_gives_empty_title() {
        let story = split_story(".hidden");
        assert_eq!(story.title, "");
        assert_eq!(story.body, ".hidden");
    }
}
