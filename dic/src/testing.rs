//! Stand-ins for the collaborators `App` is wired with.

use std::{
    collections::HashMap,
    io,
    sync::{Arc, Mutex},
};

use dictionary::{DictionaryError, Lookup, Meaning, NotFoundError, ViewModel};
use futures::{future::BoxFuture, FutureExt};

use crate::{
    audio::{Playback, PlaybackError},
    clipboard::{Clipboard, ClipboardError},
    view::{Render, ViewState},
};

#[derive(Clone, Default)]
pub(crate) struct FakeLookup {
    pub(crate) words: HashMap<String, ViewModel>,
    pub(crate) requests: Arc<Mutex<Vec<String>>>,
}

impl FakeLookup {
    pub(crate) fn with(models: &[ViewModel]) -> Self {
        Self {
            words: models
                .iter()
                .map(|model| (model.word.clone(), model.clone()))
                .collect(),
            requests: Arc::default(),
        }
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Lookup for FakeLookup {
    fn lookup(&self, word: &str) -> BoxFuture<'static, Result<ViewModel, DictionaryError>> {
        self.requests.lock().unwrap().push(word.to_owned());
        let result = self
            .words
            .get(word)
            .cloned()
            .ok_or_else(|| DictionaryError::NotFound(NotFoundError::default()));
        async move { result }.boxed()
    }
}

#[derive(Default)]
pub(crate) struct RecordingView {
    pub(crate) rendered: Vec<(String, usize)>,
    pub(crate) alerts: Vec<String>,
}

impl Render for RecordingView {
    fn render(&mut self, view: &ViewState) -> io::Result<()> {
        self.rendered
            .push((view.model().word.clone(), view.selected()));
        Ok(())
    }

    fn alert(&mut self, message: &str) -> io::Result<()> {
        self.alerts.push(message.to_owned());
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeClipboard {
    pub(crate) copied: Vec<String>,
    pub(crate) broken: bool,
}

impl Clipboard for FakeClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.broken {
            return Err(ClipboardError::Write(arboard::Error::ContentNotAvailable));
        }
        self.copied.push(text.to_owned());
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakePlayer {
    pub(crate) played: Vec<String>,
    pub(crate) broken: bool,
}

impl Playback for FakePlayer {
    fn play(&mut self, url: &str) -> Result<(), PlaybackError> {
        if self.broken {
            return Err(PlaybackError::NoPlayer);
        }
        self.played.push(url.to_owned());
        Ok(())
    }
}

pub(crate) fn model(word: &str) -> ViewModel {
    ViewModel {
        word: word.to_owned(),
        meanings: vec![
            Meaning {
                part_of_speech: "verb".to_owned(),
                definition: "move fast".to_owned(),
                example: "She runs daily.".to_owned(),
            },
            Meaning {
                part_of_speech: "noun".to_owned(),
                definition: "an act of running".to_owned(),
                example: "No example available".to_owned(),
            },
        ],
        phonetics: vec!["/rʌn/".to_owned()],
        audio_urls: vec![
            format!("https://x/en-us-{word}.mp3"),
            format!("https://x/{word}-us.mp3"),
        ],
    }
}
