use std::io::{self, Write};

use dictionary::{ViewModel, NO_EXAMPLE};
use owo_colors::OwoColorize;

pub const NO_DEFINITION: &str = "No definition available";
pub const NO_AUDIO: &str = "No audio available";

const LABEL_DEFINITION_CHARS: usize = 30;

/// The word currently on screen plus which of its meanings is selected.
#[derive(Debug, Clone)]
pub struct ViewState {
    model: ViewModel,
    selected: usize,
}

impl ViewState {
    pub fn new(model: ViewModel) -> Self {
        Self { model, selected: 0 }
    }

    pub fn model(&self) -> &ViewModel {
        &self.model
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns false and keeps the old selection if `index` is out of range
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.model.meanings.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn current_definition(&self) -> &str {
        self.model
            .meanings
            .get(self.selected)
            .map(|meaning| &meaning.definition[..])
            .unwrap_or(NO_DEFINITION)
    }

    pub fn current_example(&self) -> &str {
        self.model
            .meanings
            .get(self.selected)
            .map(|meaning| &meaning.example[..])
            .unwrap_or(NO_EXAMPLE)
    }

    pub fn labels(&self) -> Vec<String> {
        self.model
            .meanings
            .iter()
            .map(|meaning| meaning_label(&meaning.part_of_speech, &meaning.definition))
            .collect()
    }
}

/// `"<part of speech>: <first 30 characters of the definition>..."`
pub fn meaning_label(part_of_speech: &str, definition: &str) -> String {
    let head: String = definition.chars().take(LABEL_DEFINITION_CHARS).collect();
    format!("{part_of_speech}: {head}...")
}

pub trait Render {
    fn render(&mut self, view: &ViewState) -> io::Result<()>;
    fn alert(&mut self, message: &str) -> io::Result<()>;
}

pub struct TerminalView<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, styled: impl FnOnce(&str) -> String) -> String {
        if self.color {
            styled(text)
        } else {
            text.to_owned()
        }
    }
}

impl<W: Write> Render for TerminalView<W> {
    fn render(&mut self, view: &ViewState) -> io::Result<()> {
        let model = view.model();
        let headword = self.paint(&model.word, |text| text.bold().bright_cyan().to_string());
        writeln!(self.out, "{headword}")?;
        if !model.phonetics.is_empty() {
            let phonetics = self.paint(&model.phonetics.join(", "), |text| text.dimmed().to_string());
            writeln!(self.out, "    {phonetics}")?;
        }
        for (index, url) in model.audio_urls.iter().enumerate() {
            writeln!(self.out, "    audio [{}]: {url}", index + 1)?;
        }

        if !model.meanings.is_empty() {
            writeln!(self.out, "    meanings:")?;
        }
        for (index, label) in view.labels().iter().enumerate() {
            if index == view.selected() {
                let line = format!("> [{}] {label}", index + 1);
                let line = self.paint(&line, |text| text.bright_green().to_string());
                writeln!(self.out, "      {line}")?;
            } else {
                writeln!(self.out, "        [{}] {label}", index + 1)?;
            }
        }

        writeln!(self.out, "    {}", view.current_definition())?;
        let example = self.paint(view.current_example(), |text| text.italic().to_string());
        writeln!(self.out, "      example: {example}")?;
        self.out.flush()
    }

    fn alert(&mut self, message: &str) -> io::Result<()> {
        let message = self.paint(message, |text| text.bright_yellow().to_string());
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }
}

/// Prints every rendered view model as pretty json, alerts go to `err`.
pub struct JsonView<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> JsonView<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }
}

impl<W: Write, E: Write> Render for JsonView<W, E> {
    fn render(&mut self, view: &ViewState) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, view.model())?;
        writeln!(self.out)?;
        self.out.flush()
    }

    fn alert(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.err, "{message}")
    }
}
