//! Interactive dashboard session.
//!
//! A session owns one store and one creation form for the lifetime of the
//! process. Each input line is parsed as a small command language; nothing is
//! written anywhere when the session ends.

use std::io::{self, BufRead, IsTerminal};

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use super::{ls_output, show_output, stats_output};
use crate::config::Config;
use crate::display::{format_form, format_ticket_card};
use crate::error::{HelpdeskError, Result};
use crate::store::{Tab, TicketStore};
use crate::ticket::{SubmitOutcome, TicketForm};
use crate::types::{TicketCategory, TicketPriority};

#[derive(Parser, Debug)]
#[command(multicall = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Open the new ticket form
    New,

    /// Set the draft title
    Title {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Set the draft description
    Description {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Choose the draft category (label, erp, hardware, general or 1-3)
    Category {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        value: Vec<String>,
    },

    /// Choose the draft priority (label, low, medium, high or critical)
    Priority {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        value: Vec<String>,
    },

    /// Show the form and its current draft
    Form,

    /// Create a ticket from the draft
    Submit,

    /// Hide the form, keeping the draft
    Cancel,

    /// List tickets under a tab (all, new, active, resolved)
    Ls {
        #[arg(value_parser = parse_tab)]
        tab: Option<Tab>,
    },

    /// Show dashboard counters
    Stats,

    /// Show one ticket
    Show {
        /// Ticket ID
        id: String,
    },

    /// Leave the session
    #[command(visible_alias = "exit")]
    Quit,
}

fn parse_tab(s: &str) -> std::result::Result<Tab, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid tab. Must be one of: {}",
            crate::store::queries::VALID_TABS.join(", ")
        )
    })
}

/// Title and description take the rest of the line verbatim, so text that
/// starts with `-` or contains `--` is not read as flags.
fn free_text_command(line: &str) -> Option<SessionCommand> {
    let (word, rest) = line.trim().split_once(char::is_whitespace)?;
    let text = vec![rest.trim().to_string()];
    match word {
        "title" => Some(SessionCommand::Title { text }),
        "description" => Some(SessionCommand::Description { text }),
        _ => None,
    }
}

/// What the loop should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionReply {
    Output(String),
    Silent,
    Quit,
}

pub struct Session {
    store: TicketStore,
    form: TicketForm,
}

impl Session {
    pub fn new(store: TicketStore) -> Self {
        Session {
            store,
            form: TicketForm::new(),
        }
    }

    pub fn store(&self) -> &TicketStore {
        &self.store
    }

    pub fn form(&self) -> &TicketForm {
        &self.form
    }

    pub fn prompt(&self) -> &'static str {
        if self.form.is_open() {
            "helpdesk [новая заявка]> "
        } else {
            "helpdesk> "
        }
    }

    /// Run one input line against the session
    pub fn execute(&mut self, line: &str) -> Result<SessionReply> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(SessionReply::Silent);
        }

        if let Some(command) = free_text_command(line) {
            return self.apply(command);
        }

        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                let rendered = e.render().to_string();
                return match e.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                        Ok(SessionReply::Output(rendered.trim_end().to_string()))
                    }
                    _ => Err(HelpdeskError::Other(rendered.trim_end().to_string())),
                };
            }
        };

        self.apply(parsed.command)
    }

    fn apply(&mut self, command: SessionCommand) -> Result<SessionReply> {
        match command {
            SessionCommand::New => {
                self.form.open();
                Ok(SessionReply::Output(format_form(&self.form)))
            }
            SessionCommand::Title { text } => {
                self.form.set_title(text.join(" "))?;
                Ok(SessionReply::Silent)
            }
            SessionCommand::Description { text } => {
                self.form.set_description(text.join(" "))?;
                Ok(SessionReply::Silent)
            }
            SessionCommand::Category { value } => {
                let category: TicketCategory = value.join(" ").parse()?;
                self.form.set_category(category)?;
                Ok(SessionReply::Silent)
            }
            SessionCommand::Priority { value } => {
                let priority: TicketPriority = value.join(" ").parse()?;
                self.form.set_priority(priority)?;
                Ok(SessionReply::Silent)
            }
            SessionCommand::Form => Ok(SessionReply::Output(format_form(&self.form))),
            SessionCommand::Submit => match self.form.submit(&mut self.store)? {
                SubmitOutcome::Created(id) => {
                    let ticket = self.store.find(&id)?;
                    Ok(SessionReply::Output(format!(
                        "Создана заявка {}\n{}",
                        id,
                        format_ticket_card(ticket)
                    )))
                }
                SubmitOutcome::Refused(_) => Ok(SessionReply::Silent),
            },
            SessionCommand::Cancel => {
                self.form.close();
                Ok(SessionReply::Silent)
            }
            SessionCommand::Ls { tab } => {
                let text = ls_output(&self.store, tab.unwrap_or_default())?.render(false)?;
                Ok(SessionReply::Output(text))
            }
            SessionCommand::Stats => {
                Ok(SessionReply::Output(stats_output(&self.store)?.render(false)?))
            }
            SessionCommand::Show { id } => {
                Ok(SessionReply::Output(show_output(&self.store, &id)?.render(false)?))
            }
            SessionCommand::Quit => Ok(SessionReply::Quit),
        }
    }
}

/// Print a reply; returns false once the session should end
fn dispatch(session: &mut Session, line: &str) -> bool {
    match session.execute(line) {
        Ok(SessionReply::Output(text)) => println!("{}", text),
        Ok(SessionReply::Silent) => {}
        Ok(SessionReply::Quit) => return false,
        Err(e) => eprintln!("{}", e),
    }
    true
}

/// Run the session over already-open line input, without prompting
pub fn run_lines(session: &mut Session, input: impl BufRead) -> Result<()> {
    for line in input.lines() {
        if !dispatch(session, &line?) {
            break;
        }
    }
    Ok(())
}

fn run_interactive(session: &mut Session, keep_history: bool) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("IT Helpdesk. Type 'help' for commands, 'quit' to leave.");

    loop {
        match editor.readline(session.prompt()) {
            Ok(line) => {
                if keep_history && !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                if !dispatch(session, &line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

/// Start an interactive session over a fresh store
pub fn cmd_session(config: &Config) -> Result<()> {
    let mut session = Session::new(TicketStore::from_config(config)?);
    tracing::debug!(tickets = session.store().len(), "session started");

    let stdin = io::stdin();
    if stdin.is_terminal() {
        run_interactive(&mut session, config.history)
    } else {
        run_lines(&mut session, stdin.lock())
    }
}
