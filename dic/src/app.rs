use dictionary::{DictionaryError, Lookup, ViewModel};
use futures::future::BoxFuture;

use crate::{
    audio::Playback,
    clipboard::{copy_text, Clipboard, CopyTarget},
    select::resolve_selection,
    sequence::{LookupSequencer, LookupTicket},
    view::{Render, ViewState},
};

pub const ENTER_A_WORD: &str = "Please enter a word!";
pub const NOTHING_SHOWN: &str = "Look up a word first.";
pub const COPIED: &str = "Copied to clipboard!";
pub const COPY_FAILED: &str = "Failed to copy text.";
pub const NO_SUCH_MEANING: &str = "Couldn't find that meaning, pick a number from the list.";
pub const NO_SUCH_AUDIO: &str = "There is no such pronunciation.";
pub const NO_US_AUDIO: &str = "No US pronunciation available.";
pub const PLAYBACK_FAILED: &str = "Failed to play audio.";

/// A lookup that has been issued but not completed yet.
pub struct PendingLookup {
    pub ticket: LookupTicket,
    pub word: String,
    pub future: BoxFuture<'static, Result<ViewModel, DictionaryError>>,
}

/// Everything the prompt needs, with each collaborator handed in by `main`.
pub struct App<L, V, C, P> {
    lookup: L,
    view: V,
    clipboard: C,
    player: P,
    sequencer: LookupSequencer,
    current: Option<ViewState>,
}

impl<L, V, C, P> App<L, V, C, P>
where
    L: Lookup,
    V: Render,
    C: Clipboard,
    P: Playback,
{
    pub fn new(lookup: L, view: V, clipboard: C, player: P) -> Self {
        Self {
            lookup,
            view,
            clipboard,
            player,
            sequencer: LookupSequencer::new(),
            current: None,
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&ViewState> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Starts a lookup for `word`, nothing is requested for a blank word
    pub fn request_lookup(&mut self, word: &str) -> anyhow::Result<Option<PendingLookup>> {
        let word = word.trim();
        if word.is_empty() {
            self.view.alert(ENTER_A_WORD)?;
            return Ok(None);
        }
        let ticket = self.sequencer.issue();
        tracing::debug!(ticket = ticket.number(), word, "issuing lookup");
        Ok(Some(PendingLookup {
            ticket,
            word: word.to_owned(),
            future: self.lookup.lookup(word),
        }))
    }

    /// Shows the outcome of a lookup if it is still the latest one, returns whether it was shown
    pub fn complete_lookup(
        &mut self,
        ticket: LookupTicket,
        result: Result<ViewModel, DictionaryError>,
    ) -> anyhow::Result<bool> {
        if !self.sequencer.accept(ticket) {
            tracing::debug!(ticket = ticket.number(), "discarding stale lookup");
            return Ok(false);
        }
        match result {
            Ok(model) => {
                let view = self.current.insert(ViewState::new(model));
                self.view.render(view)?;
                Ok(true)
            }
            Err(error) => {
                tracing::warn!(ticket = ticket.number(), "lookup failed: {error}");
                self.view.alert(error.user_message())?;
                Ok(false)
            }
        }
    }

    /// Issues a lookup and waits for it, returns whether a word was rendered
    pub async fn lookup_now(&mut self, word: &str) -> anyhow::Result<bool> {
        let Some(pending) = self.request_lookup(word)? else {
            return Ok(false);
        };
        let result = pending.future.await;
        self.complete_lookup(pending.ticket, result)
    }

    pub fn select(&mut self, query: &str) -> anyhow::Result<()> {
        let Some(view) = self.current.as_mut() else {
            self.view.alert(NOTHING_SHOWN)?;
            return Ok(());
        };
        match resolve_selection(view, query) {
            Some(index) => {
                view.select(index);
                self.view.render(view)?;
            }
            None => self.view.alert(NO_SUCH_MEANING)?,
        }
        Ok(())
    }

    /// Plays the `number`-th (1-based) US pronunciation, the first one by default
    pub fn play(&mut self, number: Option<usize>) -> anyhow::Result<()> {
        let Some(view) = self.current.as_ref() else {
            self.view.alert(NOTHING_SHOWN)?;
            return Ok(());
        };
        let urls = &view.model().audio_urls;
        if urls.is_empty() {
            self.view.alert(NO_US_AUDIO)?;
            return Ok(());
        }
        let Some(url) = urls.get(number.unwrap_or(1).wrapping_sub(1)) else {
            self.view.alert(NO_SUCH_AUDIO)?;
            return Ok(());
        };
        if let Err(error) = self.player.play(url) {
            tracing::warn!("{error}");
            self.view.alert(PLAYBACK_FAILED)?;
        }
        Ok(())
    }

    pub fn copy(&mut self, target: CopyTarget) -> anyhow::Result<()> {
        let Some(view) = self.current.as_ref() else {
            self.view.alert(NOTHING_SHOWN)?;
            return Ok(());
        };
        let text = copy_text(view, target);
        match self.clipboard.copy(&text) {
            Ok(()) => self.view.alert(COPIED)?,
            Err(error) => {
                tracing::warn!("{error}");
                self.view.alert(COPY_FAILED)?;
            }
        }
        Ok(())
    }

    pub fn notify(&mut self, message: &str) -> anyhow::Result<()> {
        self.view.alert(message)?;
        Ok(())
    }

    pub fn show(&mut self) -> anyhow::Result<()> {
        match self.current.as_ref() {
            Some(view) => self.view.render(view)?,
            None => self.view.alert(NOTHING_SHOWN)?,
        }
        Ok(())
    }
}
