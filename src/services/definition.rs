//! Dictionary definitions

use crate::core::Word;

/// Text used when no definition could be fetched
pub const DEFINITION_UNAVAILABLE: &str = "Definition not available";
/// Clue text when the target has no usable definition
pub const NO_CLUE: &str = "No clue available";

/// One meaning of a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sense {
    pub part_of_speech: Option<String>,
    pub definition: String,
    pub example: Option<String>,
}

/// Definition of a word as shown to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub word: String,
    pub phonetic: Option<String>,
    pub senses: Vec<Sense>,
    available: bool,
}

impl Definition {
    #[must_use]
    pub fn new(word: impl Into<String>, phonetic: Option<String>, senses: Vec<Sense>) -> Self {
        let available = !senses.is_empty();
        Self {
            word: word.into(),
            phonetic,
            senses,
            available,
        }
    }

    /// Placeholder stored when the lookup fails
    #[must_use]
    pub fn unavailable(word: &Word) -> Self {
        Self {
            word: word.text().to_string(),
            phonetic: None,
            senses: vec![Sense {
                part_of_speech: None,
                definition: DEFINITION_UNAVAILABLE.to_string(),
                example: None,
            }],
            available: false,
        }
    }

    /// `false` for the placeholder
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// First definition text, or [`NO_CLUE`]
    #[must_use]
    pub fn clue(&self) -> String {
        self.senses
            .first()
            .filter(|_| self.available)
            .map_or_else(|| NO_CLUE.to_string(), |sense| sense.definition.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_not_available() {
        let definition = Definition::unavailable(&Word::new("crane").unwrap());
        assert!(!definition.is_available());
        assert_eq!(definition.word, "CRANE");
        assert_eq!(definition.senses[0].definition, DEFINITION_UNAVAILABLE);
        assert_eq!(definition.clue(), NO_CLUE);
    }

    #[test]
    fn clue_is_first_sense() {
        let definition = Definition::new(
            "crane",
            Some("/kɹeɪn/".to_string()),
            vec![
                Sense {
                    part_of_speech: Some("noun".to_string()),
                    definition: "A large long-necked bird.".to_string(),
                    example: None,
                },
                Sense {
                    part_of_speech: Some("verb".to_string()),
                    definition: "To stretch out one's neck.".to_string(),
                    example: None,
                },
            ],
        );
        assert!(definition.is_available());
        assert_eq!(definition.clue(), "A large long-necked bird.");
    }

    #[test]
    fn no_senses_means_no_clue() {
        let definition = Definition::new("crane", None, Vec::new());
        assert!(!definition.is_available());
        assert_eq!(definition.clue(), NO_CLUE);
    }
}
