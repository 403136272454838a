use super::CommandOutput;
use crate::display::format_dashboard;
use crate::error::Result;
use crate::store::TicketStore;

pub fn stats_output(store: &TicketStore) -> Result<CommandOutput> {
    let summary = store.summary();
    let json = serde_json::to_value(&summary)?;
    Ok(CommandOutput::new(json).with_text(format_dashboard(&summary)))
}

/// Show dashboard counters and category cards
pub fn cmd_stats(store: &TicketStore, output_json: bool) -> Result<()> {
    stats_output(store)?.print(output_json)
}
