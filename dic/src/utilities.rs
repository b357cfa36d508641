use std::io::{self, Write};

pub fn prompt(prompt: &str) -> io::Result<()> {
    print!("{prompt}");
    io::stdout().flush()
}

pub fn str_to_bool(mut str: String) -> Option<bool> {
    str.make_ascii_lowercase();
    match str.trim() {
        "y" | "yes" | "yeah" | "yea" | "true" | "on" | "1" => Some(true),
        "n" | "no" | "nope" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}
