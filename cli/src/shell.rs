//! # Interactive Shell
//!
//! Reads one command per line, parses it with clap and runs it against the
//! [`Library`]. A failing command is reported and the session goes on; only
//! `exit` or the end of the input stops it.

use std::io::{self, BufRead, Write};

use anyhow::bail;
use biblio_common::config::Config;
use biblio_core::Library;
use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use tracing::{debug, error};

use crate::commands::{ShellCommand, ShellLine, book, loan, student};
use crate::terminal::print;

const PROMPT: &str = "biblio> ";

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn run<R: BufRead>(library: &mut Library, input: R, cfg: &Config, interactive: bool) -> anyhow::Result<()> {
    let mut lines = input.lines();

    loop {
        if interactive {
            prompt()?;
        }
        let Some(line) = lines.next() else {
            break;
        };

        match execute(library, &line?, cfg) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => error!("{err}"),
        }
    }

    print::end_of_program();
    Ok(())
}

/// Runs a single shell line. Blank lines and `#` comments are skipped.
pub fn execute(library: &mut Library, line: &str, cfg: &Config) -> anyhow::Result<Flow> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Flow::Continue);
    }

    let words = split_words(line)?;
    debug!("shell words: {words:?}");

    let parsed = match ShellLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(err) if matches!(err.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand) => {
            print::print(err.to_string().trim_end());
            return Ok(Flow::Continue);
        }
        Err(err) => bail!("{}", err.to_string().trim_end()),
    };

    match parsed.command {
        ShellCommand::Student(command) => student::student(command, library, cfg)?,
        ShellCommand::Book(command) => book::book(command, library, cfg)?,
        ShellCommand::Loan(command) => loan::loan(command, library, cfg)?,
        ShellCommand::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

/// Splits a line on whitespace. Double quotes group words, so `"Don Quijote"` is one argument.
pub fn split_words(line: &str) -> anyhow::Result<Vec<String>> {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        bail!("unterminated quote in: {line}");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn prompt() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{PROMPT}")?;
    stdout.flush()
}
