use std::collections::HashSet;

use serde::Serialize;

use crate::dictionary::Word;

pub const NO_EXAMPLE: &str = "No example available";

/// Flattened, deduplicated view of every entry returned for one lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub word: String,
    pub meanings: Vec<Meaning>,
    pub phonetics: Vec<String>,
    pub audio_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definition: String,
    pub example: String,
}

/// Insertion ordered set of strings.
#[derive(Debug, Default)]
pub struct UniqueList {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl UniqueList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` unless it is already present, returns true if it was new
    pub fn insert(&mut self, value: &str) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_owned());
        self.items.push(value.to_owned());
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Whether an audio url points at the US recording.
///
/// The API names its files like `.../hello-us.mp3` or `.../en-us-run.mp3`,
/// so this is a plain substring/suffix check on the url.
pub fn is_us_audio(url: &str) -> bool {
    url.contains("-us-") || url.ends_with("us.mp3")
}

/// Reshapes the raw entries into a single [`ViewModel`].
///
/// Returns `None` for an empty slice since there is no headword to take.
pub fn normalize(entries: &[Word]) -> Option<ViewModel> {
    let first = entries.first()?;

    let mut meanings = Vec::new();
    let mut phonetics = UniqueList::new();
    let mut audio_urls = UniqueList::new();

    for entry in entries {
        for phonetic in &entry.phonetics {
            if let Some(text) = phonetic.text.as_deref().filter(|text| !text.is_empty()) {
                phonetics.insert(text);
            }
            if let Some(audio) = phonetic.audio.as_deref().filter(|audio| is_us_audio(audio)) {
                audio_urls.insert(audio);
            }
        }

        for meaning in &entry.meanings {
            meanings.extend(meaning.definitions.iter().map(|definition| Meaning {
                part_of_speech: meaning.part_of_speech.clone(),
                definition: definition.definition.clone(),
                example: definition
                    .example
                    .clone()
                    .filter(|example| !example.is_empty())
                    .unwrap_or_else(|| NO_EXAMPLE.to_owned()),
            }));
        }
    }

    Some(ViewModel {
        word: first.word.clone(),
        meanings,
        phonetics: phonetics.into_vec(),
        audio_urls: audio_urls.into_vec(),
    })
}
