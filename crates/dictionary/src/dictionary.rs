use serde::Deserialize;

/// One lexical entry as returned by the dictionary API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<WordMeaning>,
    #[serde(default)]
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMeaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<WordDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordDefinition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// Body the API sends alongside a 404.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotFoundError {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub resolution: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str = r#"[
      {
        "word": "hello",
        "phonetic": "həˈləʊ",
        "phonetics": [
          { "text": "həˈləʊ", "audio": "//ssl.gstatic.com/dictionary/static/sounds/20200429/hello--_gb_1.mp3" },
          { "text": "hɛˈləʊ" }
        ],
        "origin": "early 19th century: variant of earlier hollo ; related to holla.",
        "meanings": [
          {
            "partOfSpeech": "exclamation",
            "definitions": [
              {
                "definition": "used as a greeting or to begin a phone conversation.",
                "example": "hello there, Katie!",
                "synonyms": [],
                "antonyms": []
              }
            ]
          },
          {
            "partOfSpeech": "noun",
            "definitions": [
              { "definition": "an utterance of ‘hello’; a greeting." }
            ],
            "synonyms": ["greeting"]
          }
        ]
      }
    ]"#;

    #[test]
    fn deserializes_api_payload() {
        let words: Vec<Word> = serde_json::from_str(HELLO).unwrap();
        assert_eq!(words.len(), 1);
        let hello = &words[0];
        assert_eq!(hello.word, "hello");
        assert_eq!(hello.phonetics.len(), 2);
        assert!(hello.phonetics[1].audio.is_none());
        assert_eq!(hello.meanings[0].part_of_speech, "exclamation");
        assert_eq!(
            hello.meanings[0].definitions[0].example.as_deref(),
            Some("hello there, Katie!")
        );
        assert!(hello.meanings[1].definitions[0].example.is_none());
        assert_eq!(hello.meanings[1].synonyms, vec!["greeting"]);
        assert!(hello.source_urls.is_empty());
    }

    #[test]
    fn missing_arrays_default_to_empty() {
        let word: Word = serde_json::from_str(r#"{ "word": "bare" }"#).unwrap();
        assert!(word.phonetics.is_empty());
        assert!(word.meanings.is_empty());
    }

    #[test]
    fn deserializes_not_found_body() {
        let body = r#"{
            "title": "No Definitions Found",
            "message": "Sorry pal, we couldn't find definitions for the word you were looking for.",
            "resolution": "You can try the search again at later time or head to the web instead."
        }"#;
        let error: NotFoundError = serde_json::from_str(body).unwrap();
        assert_eq!(error.title, "No Definitions Found");
    }
}
