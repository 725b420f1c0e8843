// src/interactive.rs
//! Line-oriented interactive mode.
//!
//! Reads one line at a time from any `BufRead` and writes to any `Write`,
//! so the loop runs the same against a terminal or an in-memory buffer.

use anyhow::Result;
use chrono::Local;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

use crate::engine::{Analyzer, Method};
use crate::history::History;
use crate::report::render_report;
use crate::samples::SampleKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Export,
    Empty,
    /// `sample <kind>` with an unknown kind.
    UnknownSample(String),
    Analyze(String),
}

/// Interpret one input line. Keywords are case-insensitive.
pub fn parse_command(line: &str) -> Command {
    let text = line.trim();
    let lower = text.to_lowercase();
    match lower.as_str() {
        "" => Command::Empty,
        "exit" | "quit" => Command::Exit,
        "help" => Command::Help,
        "export" => Command::Export,
        _ => match lower.strip_prefix("sample ") {
            Some(kind) => match kind.parse::<SampleKind>() {
                Ok(k) => Command::Analyze(k.text().to_string()),
                Err(()) => Command::UnknownSample(kind.trim().to_string()),
            },
            None => Command::Analyze(text.to_string()),
        },
    }
}

pub const HELP: &str = "\nAvailable commands:
  exit - Quit the program
  help - Show this help message
  export - Save the last 3 analyses to a text file
  sample positive - Load a positive sample text
  sample negative - Load a negative sample text
  sample neutral - Load a neutral sample text";

pub struct Session<'a> {
    pub analyzer: &'a Analyzer,
    pub history: &'a History,
    pub method: Method,
    /// Where `export` writes its file.
    pub export_dir: PathBuf,
}

impl Session<'_> {
    /// Run until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<()> {
        writeln!(out, "Sentiment Analysis Tool - Interactive Mode")?;
        writeln!(out, "Type 'exit' to quit, 'help' for options")?;
        writeln!(out, "{}", "-".repeat(50))?;

        let mut line = String::new();
        loop {
            write!(out, "\nEnter text to analyze: ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out, "\n\nGoodbye!")?;
                return Ok(());
            }

            match parse_command(&line) {
                Command::Exit => {
                    writeln!(out, "Goodbye!")?;
                    return Ok(());
                }
                Command::Help => writeln!(out, "{HELP}")?,
                Command::Empty => writeln!(out, "Please enter some text to analyze.")?,
                Command::UnknownSample(kind) => writeln!(
                    out,
                    "Unknown sample '{kind}'. Use positive, negative or neutral."
                )?,
                Command::Export => match self.history.export_recent(&self.export_dir) {
                    Ok(Some(path)) => writeln!(out, "Results exported to {}", path.display())?,
                    Ok(None) => writeln!(out, "No analysis results to export.")?,
                    Err(e) => {
                        warn!(error = %e, "export failed");
                        writeln!(out, "Error: failed to export results: {e:#}")?;
                    }
                },
                Command::Analyze(text) => {
                    let result = self.analyzer.analyze_with(&text, self.method);
                    self.history.record(&text, self.method, &result);
                    write!(out, "{}", render_report(&text, &result, Local::now()))?;
                }
            }
        }
    }
}
