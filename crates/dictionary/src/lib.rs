use dictionary_api::get_definition;
use futures::{future::BoxFuture, FutureExt};

mod dictionary;
mod dictionary_api;
mod normalize;

pub use dictionary::{NotFoundError, Phonetic, Word, WordDefinition, WordMeaning};
pub use normalize::{is_us_audio, normalize, Meaning, UniqueList, ViewModel, NO_EXAMPLE};

pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries";
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary service: {0}")]
    Fetch(reqwest::Error),
    #[error("failed to read the dictionary response: {0}")]
    Deserialize(reqwest::Error),
    #[error("no definitions found: {}", .0.message)]
    NotFound(NotFoundError),
    #[error("dictionary service answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("dictionary service returned no entries")]
    EmptyResponse,
    #[error("invalid dictionary url {0}")]
    InvalidUrl(String),
}

impl DictionaryError {
    /// Short text meant for the person who asked for the word.
    pub fn user_message(&self) -> &'static str {
        match self {
            DictionaryError::NotFound(_)
            | DictionaryError::Status(_)
            | DictionaryError::EmptyResponse => "Word not found",
            DictionaryError::Fetch(_)
            | DictionaryError::Deserialize(_)
            | DictionaryError::InvalidUrl(_) => "Could not reach the dictionary service.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryConfig {
    pub base_url: String,
    pub language: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
            language: DEFAULT_LANGUAGE.to_owned(),
        }
    }
}

/// Anything able to turn a word into a [`ViewModel`].
pub trait Lookup: Send + Sync {
    fn lookup(&self, word: &str) -> BoxFuture<'static, Result<ViewModel, DictionaryError>>;
}

#[derive(Clone)]
pub struct Dictionary {
    client: reqwest::Client,
    config: DictionaryConfig,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_config(DictionaryConfig::default())
    }

    pub fn with_config(config: DictionaryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    pub async fn get_definition(&self, word: &str) -> Result<Vec<Word>, DictionaryError> {
        get_definition(&self.client, &self.config, word).await
    }

    pub async fn define(&self, word: &str) -> Result<ViewModel, DictionaryError> {
        let entries = self.get_definition(word).await?;
        tracing::debug!(word, entries = entries.len(), "normalizing entries");
        normalize(&entries).ok_or(DictionaryError::EmptyResponse)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Lookup for Dictionary {
    fn lookup(&self, word: &str) -> BoxFuture<'static, Result<ViewModel, DictionaryError>> {
        let dictionary = self.clone();
        let word = word.to_owned();
        async move { dictionary.define(&word).await }.boxed()
    }
}
