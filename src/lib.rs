pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod store;
pub mod ticket;
pub mod types;
pub mod utils;

pub use config::Config;
pub use error::{HelpdeskError, RequiredField, Result};
pub use store::{CategoryCounts, DashboardSummary, StatusCounts, Tab, TicketStore};
pub use ticket::{SubmitOutcome, Ticket, TicketDraft, TicketForm};
pub use types::{DEFAULT_ID_PREFIX, TicketCategory, TicketPriority, TicketStatus};
