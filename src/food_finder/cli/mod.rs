//! # Interactive Guide
//!
//! The command loop that users talk to. It reads one line at a time, parses it
//! into an [`Action`], runs the matching command against the registry and
//! writes the rendered result.
//!
//! ```text
//!   Running ──(read line)──▶ dispatch ──▶ write output ──┐
//!      ▲                                                 │
//!      └─────────────────────────────────────────────────┘
//!   Running ──(quit / end of input)──▶ Halted
//! ```
//!
//! The guide is generic over its input and output, so tests drive it with
//! byte slices and `Vec<u8>` while `main` hands it locked stdin/stdout.

use crate::commands::{self, add::Answers, list::SortKey};
use crate::currency::CurrencyOptions;
use crate::error::Result;
use crate::registry::Registry;
use crate::store::LineBackend;
use crate::text::TextExt;
use std::io::{BufRead, Write};

pub mod render;

use render::{render_action_header, render_messages, render_table};

pub const ACTIONS: [&str; 4] = ["list", "find", "add", "quit"];

const PROMPT: &str = "> ";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List(SortKey),
    Find(String),
    Add,
    Quit,
    Unknown(String),
}

impl Action {
    /// Splits a line into a command word (case-insensitive) and its argument.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "list" => {
                let mut words = argument.split_whitespace();
                let key = match words.next() {
                    Some(word) if word.eq_ignore_ascii_case("by") => words.next(),
                    other => other,
                };
                Action::List(SortKey::parse(key))
            }
            "find" => Action::Find(argument.to_string()),
            "add" => Action::Add,
            "quit" => Action::Quit,
            _ => Action::Unknown(line.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
}

pub struct Guide<'r, B: LineBackend> {
    registry: &'r mut Registry<B>,
    currency: CurrencyOptions,
    use_color: bool,
    state: State,
}

impl<'r, B: LineBackend> Guide<'r, B> {
    pub fn new(registry: &'r mut Registry<B>) -> Self {
        Self {
            registry,
            currency: CurrencyOptions::default(),
            use_color: false,
            state: State::Running,
        }
    }

    pub fn with_currency(mut self, currency: CurrencyOptions) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Runs the loop until `quit` or end of input.
    pub fn launch<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        self.state = State::Running;
        write_introduction(out)?;

        while self.state == State::Running {
            let Some(line) = prompt(&mut input, out, PROMPT)? else {
                log::debug!("End of input, halting");
                self.halt(out)?;
                break;
            };
            let action = Action::parse(&line);
            log::debug!("Dispatching {:?}", action);
            self.perform(action, &mut input, out)?;
        }
        Ok(())
    }

    pub fn perform<R: BufRead, W: Write>(
        &mut self,
        action: Action,
        input: &mut R,
        out: &mut W,
    ) -> Result<()> {
        match action {
            Action::List(key) => self.list(key, out),
            Action::Find(keyword) => self.find(&keyword, out),
            Action::Add => self.add(input, out),
            Action::Quit => self.halt(out),
            Action::Unknown(_) => {
                writeln!(out, "\nAction not recognized.")?;
                write_actions(out)
            }
        }
    }

    fn list<W: Write>(&self, key: SortKey, out: &mut W) -> Result<()> {
        let result = commands::list::run(&*self.registry, key);
        write!(out, "{}", render_action_header("Listing restaurants"))?;
        write!(out, "{}", render_table(&result.listed, &self.currency))?;
        writeln!(out, "Sort using: 'list price' or 'list by price'\n")?;
        Ok(())
    }

    fn find<W: Write>(&self, keyword: &str, out: &mut W) -> Result<()> {
        write!(out, "{}", render_action_header("Find a restaurant"))?;
        if keyword.is_blank() {
            writeln!(out, "Find using a key phrase to search the restaurant list.")?;
            writeln!(out, "Examples: 'find tamale', 'find Mexican', 'find mex'\n")?;
            return Ok(());
        }
        let result = commands::find::run(&*self.registry, keyword);
        write!(out, "{}", render_table(&result.listed, &self.currency))?;
        Ok(())
    }

    fn add<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        write!(out, "{}", render_action_header("Add a restaurant"))?;
        let answers = Answers {
            name: prompt(input, out, "Restaurant name: ")?.unwrap_or_default(),
            cuisine: prompt(input, out, "Cuisine type: ")?.unwrap_or_default(),
            price: prompt(input, out, "Average price: ")?.unwrap_or_default(),
        };
        let result = commands::add::run(&mut *self.registry, answers);
        writeln!(out, "{}", render_messages(&result.messages, self.use_color))?;
        Ok(())
    }

    fn halt<W: Write>(&mut self, out: &mut W) -> Result<()> {
        writeln!(out, "\n<<< Goodbye and Bon Appetit! >>>\n")?;
        out.flush()?;
        self.state = State::Halted;
        Ok(())
    }
}

fn write_introduction<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n\n<<< Welcome to the Food Finder >>>\n")?;
    writeln!(
        out,
        "This is an interactive guide to help you find the food you crave.\n"
    )?;
    write_actions(out)
}

fn write_actions<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Actions: {}", ACTIONS.join(", "))?;
    Ok(())
}

/// Writes `text`, then reads one line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
