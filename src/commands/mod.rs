mod ls;
mod session;
mod show;
mod stats;

pub use ls::{cmd_ls, ls_output};
pub use session::{Session, SessionReply, cmd_session};
pub use show::{cmd_show, show_output};
pub use stats::{cmd_stats, stats_output};

use serde_json::Value;

use crate::display::to_pretty_json;
use crate::error::Result;

/// Result of a command, renderable either as JSON or as text
#[derive(Debug, Clone)]
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        CommandOutput { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Text form, or pretty JSON when asked for (or when no text exists)
    pub fn render(&self, output_json: bool) -> Result<String> {
        match (&self.text, output_json) {
            (Some(text), false) => Ok(text.clone()),
            _ => to_pretty_json(&self.json),
        }
    }

    pub fn print(&self, output_json: bool) -> Result<()> {
        println!("{}", self.render(output_json)?);
        Ok(())
    }
}
