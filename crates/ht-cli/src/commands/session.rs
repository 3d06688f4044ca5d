//! Interactive session: the numbered menu loop.
//!
//! The session reads from any `BufRead` and writes to any `Write`, so the same
//! code drives a terminal, a piped script, or an in-memory test buffer.
//! Invalid input is reported and asked for again; end of input ends the
//! session cleanly from any prompt.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use ht_core::{
    ActivityRecord, ActivityType, RecordStore, compute, format_record_date, parse_record_date,
    parse_value,
};

use crate::Config;
use crate::commands::render;

/// A main menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Stats,
    Quit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::List),
            "3" => Ok(Self::Stats),
            "4" => Ok(Self::Quit),
            _ => Err("invalid option, enter a number between 1 and 4".to_string()),
        }
    }
}

/// Settings for one session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Source of the date used when the user leaves the date blank. Read at
    /// each date prompt.
    pub clock: fn() -> NaiveDate,
    pub label_width: usize,
    pub json: bool,
}

impl SessionOptions {
    pub fn from_config(config: &Config, json: bool) -> Self {
        Self {
            clock: local_today,
            label_width: config.effective_label_width(),
            json,
        }
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether the session keeps going after a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu loop over an input and an output stream.
pub struct Session<R, W> {
    input: R,
    output: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub const fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    /// Runs the menu until the user quits or input ends.
    pub fn run(&mut self, store: &mut RecordStore) -> Result<()> {
        writeln!(self.output, "HEALTH TRACKER - log and review your health activities")?;

        loop {
            write!(self.output, "{}", render::format_menu(store))?;
            let choice = self.prompt_until("Choose an option: ", |s| s.parse::<MenuChoice>())?;
            let Some(choice) = choice else {
                break;
            };
            tracing::debug!(?choice, "menu choice");

            let flow = match choice {
                MenuChoice::Add => self.add_record(store)?,
                MenuChoice::List => self.list_records(store)?,
                MenuChoice::Stats => self.show_stats(store)?,
                MenuChoice::Quit => Flow::Exit,
            };
            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.output)?;
        writeln!(self.output, "Thanks for using Health Tracker. Keep taking care of your health!")?;
        self.output.flush()?;
        Ok(())
    }

    fn add_record(&mut self, store: &mut RecordStore) -> Result<Flow> {
        writeln!(self.output)?;
        writeln!(self.output, "ADD RECORD")?;

        if store.is_full() {
            writeln!(self.output, "Error: maximum number of records reached ({}).", store.capacity())?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Examples: Caminhada, Corrida, Água, Sono, Meditação")?;
        let Some(activity) = self.prompt_until("Activity type: ", |s| ActivityType::new(s))? else {
            return Ok(Flow::Exit);
        };

        writeln!(self.output, "Date format: dd/MM/yyyy (e.g. 28/11/2025). Leave blank for today.")?;
        let clock = self.options.clock;
        let parse_date = |s: &str| {
            parse_record_date(s, clock()).map(|date| (date, s.trim().is_empty()))
        };
        let Some((date, defaulted)) = self.prompt_until("Date: ", parse_date)? else {
            return Ok(Flow::Exit);
        };
        if defaulted {
            writeln!(self.output, "(using today: {})", format_record_date(date))?;
        }

        writeln!(self.output, "Value: minutes of exercise, liters of water, hours of sleep...")?;
        let Some(value) = self.prompt_until("Value: ", parse_value)? else {
            return Ok(Flow::Exit);
        };

        let record = match ActivityRecord::new(activity, date, value) {
            Ok(record) => record,
            Err(e) => {
                writeln!(self.output, "Error: {e}")?;
                return Ok(Flow::Continue);
            }
        };

        match store.append(record.clone()) {
            Ok(()) => write!(self.output, "{}", render::format_added(&record))?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn list_records(&mut self, store: &RecordStore) -> Result<Flow> {
        writeln!(self.output)?;
        let listing = render::format_listing(store.all(), self.options.label_width);
        write!(self.output, "{listing}")?;
        Ok(Flow::Continue)
    }

    fn show_stats(&mut self, store: &RecordStore) -> Result<Flow> {
        writeln!(self.output)?;
        let result = compute(store.all());
        if self.options.json {
            writeln!(self.output, "{}", render::format_stats_json(&result)?)?;
        } else {
            write!(self.output, "{}", render::format_stats(&result, self.options.label_width))?;
        }
        Ok(Flow::Continue)
    }

    /// Prompts until `parse` accepts a line. Returns `None` at end of input.
    fn prompt_until<T, E: Display>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "Error: {e}")?,
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Runs an interactive session with a fresh store sized from `config`.
pub fn run<R: BufRead, W: Write>(input: R, output: W, config: &Config, json: bool) -> Result<()> {
    let mut store = RecordStore::with_capacity(config.capacity);
    let mut session = Session::new(input, output, SessionOptions::from_config(config, json));
    session.run(&mut store)?;
    tracing::debug!(records = store.len(), "session ended");
    Ok(())
}
