use std::io;

use app::App;
use audio::{AudioPlayer, Playback};
use clap::Parser;
use cli::Cli;
use clipboard::{Clipboard, SystemClipboard};
use commands::{Command, HELP};
use config::Config;
use dictionary::{Dictionary, DictionaryError, Lookup, ViewModel};
use sequence::LookupTicket;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing_subscriber::EnvFilter;
use utilities::prompt;
use view::{JsonView, Render, TerminalView};

mod app;
mod audio;
mod cli;
mod clipboard;
mod commands;
mod config;
mod select;
mod sequence;
#[cfg(test)]
mod testing;
mod utilities;
mod view;

/// Exit code of a one-shot lookup that did not find the word
const EXIT_LOOKUP_FAILED: i32 = 1;

const PROMPT: &str = ">> ";

type Completion = (LookupTicket, Result<ViewModel, DictionaryError>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::new();
    config.apply_cli(&cli);
    tracing::debug!(?config, "starting dic v{}", env!("CARGO_PKG_VERSION"));

    let dict = Dictionary::with_config(config.dictionary.clone());
    let clipboard = SystemClipboard::default();
    let player = AudioPlayer::new(&config.audio_player);
    let prompt_text = prompt_for(&config);
    let found = if config.json {
        let view = JsonView::new(io::stdout(), io::stderr());
        run(App::new(dict, view, clipboard, player), cli.word(), prompt_text).await?
    } else {
        let view = TerminalView::new(io::stdout(), config.color);
        run(App::new(dict, view, clipboard, player), cli.word(), prompt_text).await?
    };
    if !found {
        std::process::exit(EXIT_LOOKUP_FAILED);
    }
    Ok(())
}

/// stdout carries nothing but json documents in json mode
fn prompt_for(config: &Config) -> Option<&'static str> {
    (!config.json).then_some(PROMPT)
}

/// Looks up `word` once, or starts the prompt when there is none.
/// Returns false when a one-shot lookup showed nothing.
async fn run<L, V, C, P>(
    mut app: App<L, V, C, P>,
    word: Option<String>,
    prompt_text: Option<&str>,
) -> anyhow::Result<bool>
where
    L: Lookup,
    V: Render,
    C: Clipboard,
    P: Playback,
{
    match word {
        Some(word) => app.lookup_now(&word).await,
        None => {
            interactive(&mut app, prompt_text).await?;
            Ok(true)
        }
    }
}

async fn interactive<L, V, C, P>(
    app: &mut App<L, V, C, P>,
    prompt_text: Option<&str>,
) -> anyhow::Result<()>
where
    L: Lookup,
    V: Render,
    C: Clipboard,
    P: Playback,
{
    let (sender, mut receiver) = mpsc::unbounded_channel::<Completion>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    app.notify("Type `help` to see the commands.")?;
    if let Some(prompt_text) = prompt_text {
        prompt(prompt_text)?;
    }
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if !handle_line(app, &line, &sender)? {
                    break;
                }
            }
            Some((ticket, result)) = receiver.recv() => {
                app.complete_lookup(ticket, result)?;
            }
        }
        if let Some(prompt_text) = prompt_text {
            prompt(prompt_text)?;
        }
    }
    Ok(())
}

/// Runs one prompt line, returns false when the user asked to leave
fn handle_line<L, V, C, P>(
    app: &mut App<L, V, C, P>,
    line: &str,
    sender: &mpsc::UnboundedSender<Completion>,
) -> anyhow::Result<bool>
where
    L: Lookup,
    V: Render,
    C: Clipboard,
    P: Playback,
{
    let Some(command) = Command::parse(line) else {
        return Ok(true);
    };
    match command {
        Command::Exit => return Ok(false),
        Command::Define(word) => {
            if let Some(pending) = app.request_lookup(&word)? {
                let sender = sender.clone();
                tokio::spawn(async move {
                    let result = pending.future.await;
                    tracing::debug!(word = %pending.word, "lookup settled");
                    // the prompt may already be closed
                    sender.send((pending.ticket, result)).ok();
                });
            }
        }
        Command::Select(query) => app.select(&query)?,
        Command::Play(number) => app.play(number)?,
        Command::Copy(target) => app.copy(target)?,
        Command::Show => app.show()?,
        Command::Help => app.notify(HELP)?,
        Command::Invalid(message) => app.notify(&message)?,
        Command::Unknown(command) => app.notify(&format!("Unknown command {command}."))?,
    }
    Ok(true)
}
