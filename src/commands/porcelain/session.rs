//! Interactive session
//!
//! The commit history lives only as long as the repository value that made it.
//! A session keeps one repository open and reads commands from its input, one
//! per line, so that several commits can be made and listed in a single run:
//!
//! ```text
//! add a.txt b.txt
//! commit -m "first commit"
//! log --oneline
//! exit
//! ```
//!
//! A failing command is reported on stderr and the session carries on.

use crate::CommitDisplayFormat;
use crate::areas::repository::Repository;
use crate::commands::porcelain::log::LogOptions;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Parser)]
#[command(no_binary_name = true, disable_help_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand)]
enum SessionCommand {
    /// Stage files and directories
    Add {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Commit the staged files
    Commit {
        #[arg(short, long)]
        message: String,
    },
    /// List staged artifacts
    Status,
    /// Show the commits made in this session
    Log {
        #[arg(long)]
        oneline: bool,
    },
    /// End the session
    #[command(alias = "quit")]
    Exit,
}

impl Repository {
    pub fn session(&mut self, input: impl BufRead) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line?;
            let words = split_words(&line);
            if words.is_empty() || words[0].starts_with('#') {
                continue;
            }

            let command = match SessionLine::try_parse_from(&words) {
                Ok(parsed) => parsed.command,
                Err(e) => {
                    eprintln!("{}", e.render());
                    continue;
                }
            };

            debug!(line = %line, "session command");
            let result = match command {
                SessionCommand::Add { paths } => self.add(&paths),
                SessionCommand::Commit { message } => self.record(&message),
                SessionCommand::Status => self.status(),
                SessionCommand::Log { oneline } => {
                    let format = if oneline {
                        CommitDisplayFormat::OneLine
                    } else {
                        CommitDisplayFormat::Medium
                    };
                    self.log(&LogOptions { format })
                }
                SessionCommand::Exit => break,
            };

            if let Err(e) = result {
                eprintln!("Error: {e:#}");
            }
        }

        self.writer().flush()?;

        Ok(())
    }
}

/// Split a command line on whitespace, keeping quoted runs together
fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote = None;

    for c in line.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_word {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("add a.txt b.txt", vec!["add", "a.txt", "b.txt"])]
    #[case("  commit   -m  \"first commit\" ", vec!["commit", "-m", "first commit"])]
    #[case("commit -m 'it''s'", vec!["commit", "-m", "its"])]
    #[case("commit -m \"\"", vec!["commit", "-m", ""])]
    #[case("", vec![])]
    fn splits_words_and_quotes(#[case] line: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_words(line), expected);
    }

    #[test]
    fn parses_session_commands() {
        let parsed = SessionLine::try_parse_from(["commit", "-m", "first commit"]).unwrap();
        assert!(matches!(
            parsed.command,
            SessionCommand::Commit { message } if message == "first commit"
        ));

        let parsed = SessionLine::try_parse_from(["log", "--oneline"]).unwrap();
        assert!(matches!(parsed.command, SessionCommand::Log { oneline: true }));

        assert!(SessionLine::try_parse_from(["push"]).is_err());
        assert!(SessionLine::try_parse_from(["add"]).is_err());
    }
}
