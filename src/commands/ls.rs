use super::CommandOutput;
use crate::display::{format_tab_bar, format_ticket_table};
use crate::error::Result;
use crate::store::{Tab, TicketStore};

/// Tickets under one status tab, newest first
pub fn ls_output(store: &TicketStore, tab: Tab) -> Result<CommandOutput> {
    let tickets = store.tab(tab);
    let json = serde_json::to_value(&tickets)?;

    let mut text = format_tab_bar(store, tab);
    text.push_str("\n\n");
    if tickets.is_empty() {
        text.push_str("Заявок нет");
    } else {
        text.push_str(&format_ticket_table(&tickets));
    }

    Ok(CommandOutput::new(json).with_text(text))
}

/// List tickets, filtered by tab
pub fn cmd_ls(store: &TicketStore, tab: Tab, output_json: bool) -> Result<()> {
    ls_output(store, tab)?.print(output_json)
}
