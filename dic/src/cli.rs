use clap::Parser;

/// Look up English words from the terminal
#[derive(Parser, Debug)]
#[command(name = "dic", version, long_about = None)]
pub struct Cli {
    /// Word to look up, starts the interactive prompt when omitted
    pub word: Vec<String>,

    /// Dictionary API base url (overrides $DICTIONARY_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Dictionary language code (overrides $DICTIONARY_LANGUAGE)
    #[arg(long)]
    pub language: Option<String>,

    /// Command used to play pronunciations, the url is appended (overrides $DIC_AUDIO_PLAYER)
    #[arg(long)]
    pub player: Option<String>,

    /// Print results as json
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn word(&self) -> Option<String> {
        if self.word.is_empty() {
            None
        } else {
            Some(self.word.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_word_means_interactive() {
        let cli = Cli::try_parse_from(["dic"]).unwrap();
        assert_eq!(cli.word(), None);
        assert!(!cli.json);
    }

    #[test]
    fn joins_words_and_reads_flags() {
        let cli = Cli::try_parse_from([
            "dic",
            "--json",
            "--language",
            "en",
            "--api-url",
            "http://localhost:8080/entries",
            "ice",
            "cream",
        ])
        .unwrap();
        assert_eq!(cli.word().as_deref(), Some("ice cream"));
        assert!(cli.json);
        assert_eq!(cli.language.as_deref(), Some("en"));
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8080/entries"));
    }

    #[test]
    fn verifies_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
