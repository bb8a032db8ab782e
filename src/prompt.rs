use std::io::{self, BufRead, Write};

/// Source of interactive answers during login.
pub trait CredentialPrompt {
    /// Shows `label` and returns one line of input without its line ending.
    fn ask(&mut self, label: &str) -> io::Result<String>;
}

/// Reads answers line by line from standard input. Input is echoed.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl CredentialPrompt for StdinPrompt {
    fn ask(&mut self, label: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{label}")?;
        stdout.flush()?;

        read_answer(&mut io::stdin().lock())
    }
}

fn read_answer(reader: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no input on standard input",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
