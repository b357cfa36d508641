use std::env;

use dictionary::{DictionaryConfig, DEFAULT_API_URL, DEFAULT_LANGUAGE};

use crate::{audio::DEFAULT_PLAYER, cli::Cli, utilities::str_to_bool};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    /// Player command line, the audio url is appended to it
    pub audio_player: String,
    pub color: bool,
    pub json: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = var("DICTIONARY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let language = var("DICTIONARY_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let audio_player = var("DIC_AUDIO_PLAYER").unwrap_or_else(|| DEFAULT_PLAYER.to_string());

        // https://no-color.org/
        let color = var("DIC_COLOR")
            .and_then(str_to_bool)
            .unwrap_or_else(|| var("NO_COLOR").map_or(true, |value| value.is_empty()));

        Config {
            dictionary: DictionaryConfig { base_url, language },
            audio_player,
            color,
            json: false,
        }
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(api_url) = &cli.api_url {
            self.dictionary.base_url = api_url.clone();
        }
        if let Some(language) = &cli.language {
            self.dictionary.language = language.clone();
        }
        if let Some(player) = &cli.player {
            self.audio_player = player.clone();
        }
        if cli.no_color {
            self.color = false;
        }
        self.json = cli.json;
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}
