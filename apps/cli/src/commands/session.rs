//! # Session Command
//!
//! Interactive, line-oriented editing of a roster with calculate-on-demand.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────────┐     ┌──────────────┐     ┌──────────────┐            │
//! │  │ One blank    │────►│  Editing     │────►│  Report      │            │
//! │  │ participant  │     │  roster      │     │  printed     │            │
//! │  └──────────────┘     └──────────────┘     └──────┬───────┘            │
//! │                         ▲    add / name / paid    │                     │
//! │                         │    personal / remove    │                     │
//! │                         │    bill / tip           │                     │
//! │                         └─────────────────────────┘                     │
//! │                                  calculate (fresh snapshot every time)  │
//! │                                                                         │
//! │  quit or end of input ends the session. Errors are printed and the     │
//! │  session carries on.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use clap::Args;
use rust_decimal::Decimal;
use tabsplit_core::validation::{lenient_amount, lenient_percent};
use tabsplit_core::{split, Rate};
use tracing::{debug, info, warn};

use super::note_coercion;
use crate::error::{CliError, CliResult};
use crate::render;
use crate::state::{AppConfig, OutputFormat, Roster};

/// Arguments for `tabsplit session`.
#[derive(Debug, Clone, Default, Args)]
pub struct SessionArgs {
    /// Starting bill
    #[arg(short, long)]
    pub bill: Option<String>,

    /// Starting tip percent
    #[arg(short, long)]
    pub tip: Option<String>,

    /// Output format for calculated reports
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub const HELP: &str = "\
Commands:
  add [name]              add a participant
  name <id> <name>        rename a participant
  paid <id> <amount>      set what a participant paid
  personal <id> <amount>  set a participant's personal items (before tax)
  remove <id>             remove a participant
  list                    show participants and their ids
  bill <amount>           set the total bill (before tax and tip)
  tip <percent>           set the tip percent
  calculate               split the bill
  help                    show this message
  quit                    leave
Ids can be shortened to their first few characters.
";

/// One parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Name { id: String, name: String },
    Paid { id: String, amount: String },
    Personal { id: String, amount: String },
    Remove(String),
    List,
    Bill(String),
    Tip(String),
    Calculate,
    Help,
    Quit,
}

impl Command {
    /// Parses a line; blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> CliResult<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "add" => Command::Add(rest.to_string()),
            "name" => {
                let (id, name) = split_id(rest, "name <id> <name>")?;
                Command::Name { id, name }
            }
            "paid" => {
                let (id, amount) = split_id(rest, "paid <id> <amount>")?;
                Command::Paid { id, amount }
            }
            "personal" => {
                let (id, amount) = split_id(rest, "personal <id> <amount>")?;
                Command::Personal { id, amount }
            }
            "remove" | "rm" => Command::Remove(required(rest, "remove <id>")?),
            "list" | "ls" => Command::List,
            "bill" => Command::Bill(required(rest, "bill <amount>")?),
            "tip" => Command::Tip(required(rest, "tip <percent>")?),
            "calculate" | "calc" => Command::Calculate,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CliError::UnknownCommand(word.to_string())),
        };

        Ok(Some(command))
    }
}

fn required(rest: &str, usage: &'static str) -> CliResult<String> {
    if rest.is_empty() {
        Err(CliError::Usage(usage))
    } else {
        Ok(rest.to_string())
    }
}

// The value half may be blank: `paid <id>` clears the amount back to zero.
fn split_id(rest: &str, usage: &'static str) -> CliResult<(String, String)> {
    match rest.split_once(char::is_whitespace) {
        Some((id, value)) => Ok((id.to_string(), value.trim().to_string())),
        None if !rest.is_empty() => Ok((rest.to_string(), String::new())),
        None => Err(CliError::Usage(usage)),
    }
}

/// Whether the session should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive session: the roster plus the bill and tip being edited.
#[derive(Debug)]
pub struct Session {
    roster: Roster,
    bill: Decimal,
    tip: Rate,
    config: AppConfig,
}

impl Session {
    /// Starts a session with one blank participant.
    pub fn new(config: AppConfig) -> Self {
        Session {
            roster: Roster::with_blank_entry(),
            bill: Decimal::ZERO,
            tip: config.default_tip,
            config,
        }
    }

    /// Starts a session from command-line arguments.
    pub fn from_args(args: &SessionArgs, config: &AppConfig) -> Self {
        let config = AppConfig {
            format: args.format.unwrap_or(config.format),
            ..config.clone()
        };
        let mut session = Session::new(config);

        if let Some(raw) = &args.bill {
            session.set_bill(raw);
        }
        if let Some(raw) = &args.tip {
            session.set_tip(raw);
        }
        session
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn bill(&self) -> Decimal {
        self.bill
    }

    pub fn tip(&self) -> Rate {
        self.tip
    }

    /// Reads commands from `input` until `quit` or end of input.
    ///
    /// `prompt` prints `> ` before each line; pass `false` when input is not
    /// a terminal.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        prompt: bool,
    ) -> CliResult<()> {
        info!("session started");
        writeln!(out, "Type 'help' for commands.")?;
        write!(out, "{}", render::render_roster(self.roster.entries(), &self.config))?;

        let mut lines = input.lines();
        loop {
            if prompt {
                write!(out, "> ")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            let flow = match Command::parse(&line) {
                Ok(Some(command)) => match self.execute(command, out) {
                    Ok(flow) => flow,
                    Err(err) => {
                        warn!(%err, "session command failed");
                        writeln!(out, "error: {}", err)?;
                        Flow::Continue
                    }
                },
                Ok(None) => Flow::Continue,
                Err(err) => {
                    writeln!(out, "error: {}", err)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        info!(participants = self.roster.len(), "session ended");
        Ok(())
    }

    /// Applies one command, writing any feedback to `out`.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> CliResult<Flow> {
        debug!(?command, "execute");

        match command {
            Command::Add(name) => {
                let id = self.roster.add(&name);
                let entry = self
                    .roster
                    .entries()
                    .iter()
                    .find(|e| e.id == id)
                    .ok_or_else(|| CliError::ParticipantNotFound(id.to_string()))?;
                writeln!(
                    out,
                    "added {} ({})",
                    entry.participant.display_name(),
                    entry.short_id()
                )?;
            }
            Command::Name { id, name } => {
                let id = self.roster.resolve(&id)?;
                self.roster.rename(id, &name)?;
            }
            Command::Paid { id, amount } => {
                let id = self.roster.resolve(&id)?;
                let parsed = self.roster.set_paid(id, &amount)?;
                note_coercion(&parsed, &amount);
                writeln!(out, "paid {}", self.config.format_amount(parsed.value))?;
            }
            Command::Personal { id, amount } => {
                let id = self.roster.resolve(&id)?;
                let parsed = self.roster.set_personal(id, &amount)?;
                note_coercion(&parsed, &amount);
                writeln!(
                    out,
                    "personal items {}",
                    self.config.format_amount(parsed.value)
                )?;
            }
            Command::Remove(id) => {
                let id = self.roster.resolve(&id)?;
                let entry = self.roster.remove(id)?;
                writeln!(out, "removed {}", entry.participant.display_name())?;
            }
            Command::List => {
                write!(
                    out,
                    "{}",
                    render::render_roster(self.roster.entries(), &self.config)
                )?;
                writeln!(
                    out,
                    "bill {}, tip {}%",
                    self.config.format_amount(self.bill),
                    self.tip
                )?;
            }
            Command::Bill(raw) => {
                self.set_bill(&raw);
                writeln!(out, "bill {}", self.config.format_amount(self.bill))?;
            }
            Command::Tip(raw) => {
                self.set_tip(&raw);
                writeln!(out, "tip {}%", self.tip)?;
            }
            Command::Calculate => self.calculate(out)?,
            Command::Help => write!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn set_bill(&mut self, raw: &str) {
        let parsed = lenient_amount(raw, "total bill");
        note_coercion(&parsed, raw);
        self.bill = parsed.value;
    }

    fn set_tip(&mut self, raw: &str) {
        let parsed = lenient_percent(raw, "tip");
        note_coercion(&parsed, raw);
        self.tip = parsed.value;
    }

    fn calculate<W: Write>(&self, out: &mut W) -> CliResult<()> {
        let participants = self.roster.snapshot();
        info!(
            participants = participants.len(),
            bill = %self.bill,
            tip = %self.tip,
            "calculating split"
        );

        match split::compute(self.bill, self.tip, &participants) {
            Some(report) => {
                write!(out, "{}", render::render(&report, &self.config)?)?;
                if self.config.format == OutputFormat::Json {
                    writeln!(out)?;
                }
            }
            None => writeln!(out, "{}", render::NO_RESULT_PROMPT)?,
        }
        Ok(())
    }
}
