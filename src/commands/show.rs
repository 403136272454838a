use super::CommandOutput;
use crate::display::format_ticket_card;
use crate::error::Result;
use crate::store::TicketStore;

pub fn show_output(store: &TicketStore, id: &str) -> Result<CommandOutput> {
    let ticket = store.find(id)?;
    let json = serde_json::to_value(ticket)?;
    Ok(CommandOutput::new(json).with_text(format_ticket_card(ticket)))
}

/// Display a single ticket
pub fn cmd_show(store: &TicketStore, id: &str, output_json: bool) -> Result<()> {
    show_output(store, id)?.print(output_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HelpdeskError;

    #[test]
    fn test_show_json() {
        let store = TicketStore::seeded("HD").unwrap();
        let rendered = show_output(&store, "hd-001").unwrap().render(true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["id"], "HD-001");
        assert_eq!(value["assignee"], "Иванов И.И.");
    }

    #[test]
    fn test_show_unknown_ticket() {
        let store = TicketStore::seeded("HD").unwrap();
        assert!(matches!(
            show_output(&store, "HD-404"),
            Err(HelpdeskError::TicketNotFound(_))
        ));
    }
}
