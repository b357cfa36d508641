use std::{io, process::Stdio};

use tokio::process::{Child, Command};

pub const DEFAULT_PLAYER: &str = "mpv --no-video --really-quiet";

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("no audio player is configured")]
    NoPlayer,
    #[error("failed to start audio player {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

pub trait Playback {
    fn play(&mut self, url: &str) -> Result<(), PlaybackError>;
}

/// Plays pronunciations through an external player command.
///
/// Owns the running player process, starting a new recording stops the
/// previous one.
pub struct AudioPlayer {
    command: Vec<String>,
    current: Option<Child>,
}

impl AudioPlayer {
    /// `command_line` is split on whitespace, the url is appended as the last argument
    pub fn new(command_line: &str) -> Self {
        Self {
            command: command_line.split_whitespace().map(str::to_owned).collect(),
            current: None,
        }
    }

    #[cfg(test)]
    pub fn is_playing(&mut self) -> bool {
        match &mut self.current {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }

    pub fn stop(&mut self) {
        if let Some(mut child) = self.current.take() {
            if let Err(error) = child.start_kill() {
                tracing::debug!("audio player already gone: {error}");
            }
        }
    }
}

impl Playback for AudioPlayer {
    fn play(&mut self, url: &str) -> Result<(), PlaybackError> {
        let (program, args) = self.command.split_first().ok_or(PlaybackError::NoPlayer)?;
        let child = Command::new(program)
            .args(args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| PlaybackError::Spawn {
                program: program.clone(),
                source,
            })?;
        tracing::debug!(url, program = %program, "playing audio");
        self.stop();
        self.current = Some(child);
        Ok(())
    }
}
