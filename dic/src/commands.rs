use crate::clipboard::CopyTarget;

pub const HELP: &str = "\
Commands:
    define <word>          look up a word (aliases: find, d)
    select <n|text>        show another meaning (alias: s)
    play [n]               play the n-th US pronunciation (alias: p)
    copy <target>          copy word, phonetic, audio, definition or example (alias: c)
    show                   print the current word again
    help                   show this message (alias: h)
    exit                   leave (aliases: quit, leave, q, e, l)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Define(String),
    Select(String),
    Play(Option<usize>),
    Copy(CopyTarget),
    Show,
    Help,
    Exit,
    /// Recognised command with arguments that make no sense, holds the message to show
    Invalid(String),
    Unknown(String),
}

impl Command {
    /// Parses one line typed at the prompt, `None` for a blank line
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let mut command_parts = line.split_ascii_whitespace();
        let command = command_parts.next()?;
        let rest = command_parts.collect::<Vec<&str>>().join(" ");
        let parsed = match &command.to_lowercase()[..] {
            "exit" | "leave" | "quit" | "e" | "q" | "l" => Command::Exit,
            "define" | "find" | "d" => Command::Define(rest),
            "select" | "s" => Command::Select(rest),
            "play" | "p" if rest.is_empty() => Command::Play(None),
            "play" | "p" => match rest.parse::<usize>() {
                Ok(number) => Command::Play(Some(number)),
                Err(_) => Command::Invalid(format!("Expected an audio number, got {rest}.")),
            },
            "copy" | "c" => match rest.parse::<CopyTarget>() {
                Ok(target) => Command::Copy(target),
                Err(error) => Command::Invalid(error.to_string()),
            },
            "show" => Command::Show,
            "help" | "h" | "?" => Command::Help,
            _ => Command::Unknown(command.to_owned()),
        };
        Some(parsed)
    }
}
