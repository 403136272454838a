use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::Result;
use crate::ticket::Ticket;

/// Shorten text to at most `max_chars` characters, marking the cut with `…`
///
/// Counts characters, not bytes, so Cyrillic text is never split mid-char.
///
/// # Examples
///
/// ```
/// use helpdesk::display::truncate_text;
///
/// assert_eq!(truncate_text("Настройка VPN", 20), "Настройка VPN");
/// assert_eq!(truncate_text("Настройка VPN подключения", 10), "Настройка…");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

/// Maximum title width in list tables
const TABLE_TITLE_WIDTH: usize = 48;

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Приоритет")]
    priority: String,
    #[tabled(rename = "Статус")]
    status: String,
    #[tabled(rename = "Категория")]
    category: String,
    #[tabled(rename = "Название")]
    title: String,
    #[tabled(rename = "Создана")]
    created: String,
    #[tabled(rename = "Исполнитель")]
    assignee: String,
}

impl From<&Ticket> for TicketRow {
    fn from(ticket: &Ticket) -> Self {
        TicketRow {
            id: ticket.id.clone(),
            priority: ticket.priority.to_string(),
            status: ticket.status.to_string(),
            category: ticket.category.to_string(),
            title: truncate_text(&ticket.title, TABLE_TITLE_WIDTH),
            created: ticket.created_at.to_string(),
            assignee: ticket.assignee.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Render tickets as a plain table, one row per ticket in the given order
pub fn format_ticket_table(tickets: &[&Ticket]) -> String {
    let rows: Vec<TicketRow> = tickets.iter().map(|t| TicketRow::from(*t)).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Pretty-printed JSON for `--json` output
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
