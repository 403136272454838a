//! Terminal rendering of tickets, the dashboard and the creation form.
//!
//! Colors are applied only when stdout supports them, so piped output stays
//! plain text.

use owo_colors::{OwoColorize, Stream};

use crate::types::{TicketPriority, TicketStatus};

pub mod cli_formatting;
pub mod data_formatting;

pub use cli_formatting::*;
pub use data_formatting::*;

pub fn format_priority_colored(priority: TicketPriority) -> String {
    let badge = format!("[{}]", priority);
    match priority {
        TicketPriority::Critical => badge
            .if_supports_color(Stream::Stdout, |s| s.red())
            .to_string(),
        TicketPriority::High => badge
            .if_supports_color(Stream::Stdout, |s| s.bright_red())
            .to_string(),
        TicketPriority::Medium => badge
            .if_supports_color(Stream::Stdout, |s| s.yellow())
            .to_string(),
        TicketPriority::Low => badge
            .if_supports_color(Stream::Stdout, |s| s.green())
            .to_string(),
    }
}

pub fn format_status_colored(status: TicketStatus) -> String {
    let badge = format!("[{}]", status);
    match status {
        TicketStatus::New => badge
            .if_supports_color(Stream::Stdout, |s| s.blue())
            .to_string(),
        TicketStatus::InProgress => badge
            .if_supports_color(Stream::Stdout, |s| s.magenta())
            .to_string(),
        TicketStatus::Resolved => badge
            .if_supports_color(Stream::Stdout, |s| s.green())
            .to_string(),
        TicketStatus::Closed => badge
            .if_supports_color(Stream::Stdout, |s| s.dimmed())
            .to_string(),
    }
}

pub(crate) fn bold(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |s| s.bold())
        .to_string()
}

pub(crate) fn dimmed(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |s| s.dimmed())
        .to_string()
}

pub(crate) fn cyan(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |s| s.cyan())
        .to_string()
}
