//! HTTP word source
//!
//! - Datamuse for the candidate pool
//! - dictionaryapi.dev for definitions and dictionary checks
//! - WordFinder for constraint-matching suggestions
//!
//! Responses are decoded into the typed structs below; nothing outside this
//! module sees raw JSON.

use super::{Definition, Sense, SourceError, SUGGESTION_LIMIT, WordSource};
use crate::config::SourceConfig;
use crate::core::Word;
use crate::suggest::Constraints;
use async_trait::async_trait;
use rand::seq::{IndexedRandom, SliceRandom};
use reqwest::StatusCode;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Letter groups; one random starting letter is drawn from each per fetch
const LETTER_GROUPS: [&str; 5] = ["AEIOU", "BCDFG", "HJKLM", "NPQRS", "TVWXYZ"];

/// Filler words never used as targets
pub const STOPLIST: &[&str] = &[
    "WORDS", "THING", "STUFF", "ITEMS", "TYPES", "ABOUT", "OTHER", "THESE", "THOSE", "THEIR",
    "THERE", "WHERE", "WHICH", "EVERY",
];

#[derive(Debug, Deserialize)]
struct DatamuseWord {
    word: String,
}

#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    word: String,
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Meaning {
    #[serde(default)]
    part_of_speech: Option<String>,
    #[serde(default)]
    definitions: Vec<MeaningDefinition>,
}

#[derive(Debug, Deserialize)]
struct MeaningDefinition {
    definition: String,
    #[serde(default)]
    example: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WordFinderResponse {
    #[serde(default)]
    word_pages: Vec<WordFinderPage>,
}

#[derive(Debug, Default, Deserialize)]
struct WordFinderPage {
    #[serde(default)]
    word_list: Vec<DatamuseWord>,
}

impl DictionaryEntry {
    /// First definition of every meaning
    fn into_definition(self) -> Definition {
        let senses = self
            .meanings
            .into_iter()
            .filter_map(|meaning| {
                let first = meaning.definitions.into_iter().next()?;
                Some(Sense {
                    part_of_speech: meaning.part_of_speech.filter(|p| !p.is_empty()),
                    definition: first.definition,
                    example: first.example.filter(|e| !e.is_empty()),
                })
            })
            .collect();
        Definition::new(
            self.word.to_uppercase(),
            self.phonetic.filter(|p| !p.is_empty()),
            senses,
        )
    }
}

/// Keep five-letter alphabetic entries, uppercased
fn playable(raw: &str) -> Option<Word> {
    if raw.len() == 5 && raw.bytes().all(|b| b.is_ascii_alphabetic()) {
        Word::new(raw).ok()
    } else {
        None
    }
}

/// Word source backed by public word APIs
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl HttpWordSource {
    /// Build a client with the configured timeout
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("wordle_game/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn dictionary_url(&self, word: &Word) -> String {
        format!(
            "{}/{}",
            self.config.dictionary_url.trim_end_matches('/'),
            word.text().to_lowercase()
        )
    }

    async fn fetch_group(&self, letter: char) -> Result<Vec<Word>, SourceError> {
        let pattern = format!("{}????", letter.to_ascii_lowercase());
        let response = self
            .client
            .get(&self.config.datamuse_url)
            .query(&[("sp", pattern.as_str()), ("md", "f"), ("max", "50")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                status: response.status().as_u16(),
                url: self.config.datamuse_url.clone(),
            });
        }

        let entries: Vec<DatamuseWord> = response.json().await?;
        debug!(%letter, count = entries.len(), "datamuse words received");
        Ok(entries
            .iter()
            .filter_map(|entry| playable(&entry.word))
            .filter(|word| !STOPLIST.contains(&word.text()))
            .collect())
    }
}

#[async_trait]
impl WordSource for HttpWordSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn candidate_pool(&self) -> Result<Vec<Word>, SourceError> {
        let letters: Vec<char> = {
            let mut rng = rand::rng();
            LETTER_GROUPS
                .iter()
                .filter_map(|group| group.as_bytes().choose(&mut rng).map(|&b| char::from(b)))
                .collect()
        };

        let mut seen = FxHashSet::default();
        let mut words = Vec::new();
        for letter in letters {
            match self.fetch_group(letter).await {
                Ok(batch) => words.extend(batch.into_iter().filter(|w| seen.insert(w.clone()))),
                Err(e) => warn!(%letter, error = %e, "skipping letter group"),
            }
        }

        if words.is_empty() {
            return Err(SourceError::Empty("datamuse"));
        }
        words.shuffle(&mut rand::rng());
        debug!(count = words.len(), "candidate pool fetched");
        Ok(words)
    }

    async fn is_word_valid(&self, word: &Word) -> Result<bool, SourceError> {
        let url = self.dictionary_url(word);
        let response = self.client.get(&url).send().await?;
        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(SourceError::Status {
                status: status.as_u16(),
                url,
            }),
        }
    }

    async fn definition(&self, word: &Word) -> Result<Definition, SourceError> {
        let url = self.dictionary_url(word);
        let response = self.client.get(&url).send().await?;
        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => return Err(SourceError::NotFound(word.to_string())),
            status => {
                return Err(SourceError::Status {
                    status: status.as_u16(),
                    url,
                });
            }
        }

        let entries: Vec<DictionaryEntry> = response.json().await?;
        entries
            .into_iter()
            .next()
            .map(DictionaryEntry::into_definition)
            .ok_or_else(|| SourceError::NotFound(word.to_string()))
    }

    async fn suggestions(&self, constraints: &Constraints) -> Result<Vec<Word>, SourceError> {
        let contains = constraints.pattern();
        let include = constraints.required_letters();
        let exclude = constraints.excluded_letters();

        let mut query: Vec<(&str, &str)> = vec![
            ("contains", contains.as_str()),
            ("include_letters", include.as_str()),
            ("length", "5"),
            ("word_sorting", "az"),
            ("group_by_length", "true"),
            ("page_size", "20"),
            ("dictionary", "wordle"),
        ];
        if !exclude.is_empty() {
            query.push(("exclude_letters", exclude.as_str()));
        }

        let response = self
            .client
            .get(&self.config.wordfinder_url)
            .query(&query)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SourceError::Status {
                status: response.status().as_u16(),
                url: self.config.wordfinder_url.clone(),
            });
        }

        let body: WordFinderResponse = response.json().await?;
        Ok(body
            .word_pages
            .iter()
            .flat_map(|page| &page.word_list)
            .filter_map(|entry| playable(&entry.word))
            .take(SUGGESTION_LIMIT)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_dictionary_entry() {
        let json = r#"[{
            "word": "crane",
            "phonetic": "/kɹeɪn/",
            "meanings": [
                {"partOfSpeech": "noun", "definitions": [
                    {"definition": "A large wading bird.", "example": "A crane stood in the marsh."},
                    {"definition": "A lifting machine."}
                ]},
                {"partOfSpeech": "verb", "definitions": [
                    {"definition": "To extend one's neck."}
                ]},
                {"partOfSpeech": "adjective", "definitions": []}
            ]
        }]"#;

        let entries: Vec<DictionaryEntry> = serde_json::from_str(json).unwrap();
        let definition = entries.into_iter().next().unwrap().into_definition();

        assert_eq!(definition.word, "CRANE");
        assert_eq!(definition.phonetic.as_deref(), Some("/kɹeɪn/"));
        assert_eq!(
            definition.senses,
            vec![
                Sense {
                    part_of_speech: Some("noun".to_string()),
                    definition: "A large wading bird.".to_string(),
                    example: Some("A crane stood in the marsh.".to_string()),
                },
                Sense {
                    part_of_speech: Some("verb".to_string()),
                    definition: "To extend one's neck.".to_string(),
                    example: None,
                },
            ]
        );
        assert!(definition.is_available());
    }

    #[test]
    fn decode_entry_without_meanings() {
        let entries: Vec<DictionaryEntry> =
            serde_json::from_str(r#"[{"word": "qwert"}]"#).unwrap();
        let definition = entries.into_iter().next().unwrap().into_definition();
        assert!(!definition.is_available());
    }

    #[test]
    fn decode_wordfinder_pages() {
        let json = r#"{"word_pages": [
            {"word_list": [{"word": "crane"}, {"word": "cranes"}]},
            {"word_list": [{"word": "brace"}]},
            {}
        ]}"#;
        let body: WordFinderResponse = serde_json::from_str(json).unwrap();
        let words: Vec<Word> = body
            .word_pages
            .iter()
            .flat_map(|page| &page.word_list)
            .filter_map(|entry| playable(&entry.word))
            .collect();
        assert_eq!(
            words,
            vec![Word::new("crane").unwrap(), Word::new("brace").unwrap()]
        );

        let empty: WordFinderResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.word_pages.is_empty());
    }

    #[test]
    fn playable_rejects_phrases_and_lengths() {
        assert!(playable("crane").is_some());
        assert!(playable("ice age").is_none());
        assert!(playable("cr-ne").is_none());
        assert!(playable("cranes").is_none());
    }

    #[test]
    fn dictionary_url_is_lowercase() {
        let source = HttpWordSource::new(&SourceConfig::default()).unwrap();
        assert_eq!(
            source.dictionary_url(&Word::new("CRANE").unwrap()),
            "https://api.dictionaryapi.dev/api/v2/entries/en/crane"
        );
    }
}
