mod draft;
mod form;

pub use draft::{TicketDraft, ValidatedDraft};
pub use form::{SubmitOutcome, TicketForm};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::types::{TicketCategory, TicketPriority, TicketStatus};

/// A single reported issue or request.
///
/// Tickets are append-only: once a store hands one out it is never edited,
/// re-assigned or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub created_at: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

impl Ticket {
    /// Finalize a validated draft into a brand new ticket
    pub(crate) fn from_draft(id: String, draft: ValidatedDraft, created_at: Date) -> Self {
        Ticket {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            priority: draft.priority,
            status: TicketStatus::New,
            created_at,
            assignee: None,
        }
    }
}
