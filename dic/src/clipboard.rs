use std::str::FromStr;

use crate::view::{ViewState, NO_AUDIO};

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is unavailable: {0}")]
    Unavailable(arboard::Error),
    #[error("failed to write to the clipboard: {0}")]
    Write(arboard::Error),
}

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard.
///
/// Opened on first use and kept for the rest of the session, some platforms
/// drop the copied text together with the handle.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(ClipboardError::Unavailable)?,
        };
        let result = clipboard.set_text(text).map_err(ClipboardError::Write);
        self.inner = Some(clipboard);
        result
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Word,
    Phonetic,
    Audio,
    Definition,
    Example,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown copy target {0}, expected one of word, phonetic, audio, definition, example.")]
pub struct UnknownCopyTarget(String);

impl FromStr for CopyTarget {
    type Err = UnknownCopyTarget;

    fn from_str(target: &str) -> Result<Self, Self::Err> {
        match &target.to_lowercase()[..] {
            "word" | "w" => Ok(CopyTarget::Word),
            "phonetic" | "phonetics" | "ph" => Ok(CopyTarget::Phonetic),
            "audio" | "a" => Ok(CopyTarget::Audio),
            "definition" | "def" | "d" => Ok(CopyTarget::Definition),
            "example" | "ex" | "e" => Ok(CopyTarget::Example),
            _ => Err(UnknownCopyTarget(target.to_owned())),
        }
    }
}

pub fn copy_text(view: &ViewState, target: CopyTarget) -> String {
    let model = view.model();
    match target {
        CopyTarget::Word => model.word.clone(),
        CopyTarget::Phonetic => model.phonetics.join(", "),
        CopyTarget::Audio if model.audio_urls.is_empty() => NO_AUDIO.to_owned(),
        CopyTarget::Audio => model.audio_urls.join(", "),
        CopyTarget::Definition => view.current_definition().to_owned(),
        CopyTarget::Example => view.current_example().to_owned(),
    }
}
