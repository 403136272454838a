//! In-memory ticket store.
//!
//! A `TicketStore` is the single owner of every ticket in a session. Tickets
//! are kept newest first; views over them live in [`queries`].

pub mod queries;
mod seed;

pub use queries::{CategoryCounts, CategorySummary, DashboardSummary, StatusCounts, Tab};
pub use seed::sample_tickets;

use std::collections::HashSet;
use std::collections::vec_deque::{self, VecDeque};

use jiff::civil::Date;

use crate::config::Config;
use crate::error::{HelpdeskError, Result};
use crate::ticket::{Ticket, TicketDraft};
use crate::types::DEFAULT_ID_PREFIX;
use crate::utils::{format_ticket_id, parse_ticket_sequence, today, validate_prefix};

#[derive(Debug, Clone)]
pub struct TicketStore {
    tickets: VecDeque<Ticket>,
    prefix: String,
    /// Sequence number handed to the next created ticket. Only ever grows.
    next_sequence: u32,
}

impl Default for TicketStore {
    fn default() -> Self {
        TicketStore {
            tickets: VecDeque::new(),
            prefix: DEFAULT_ID_PREFIX.to_string(),
            next_sequence: 1,
        }
    }
}

impl TicketStore {
    /// Create an empty store using the default `HD` prefix
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with a custom id prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self> {
        Self::from_tickets(prefix, Vec::new())
    }

    /// Create a store holding the sample fixture tickets
    pub fn seeded(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        let tickets = sample_tickets(&prefix);
        Self::from_tickets(prefix, tickets)
    }

    /// Build a store from configuration, seeding it when requested
    pub fn from_config(config: &Config) -> Result<Self> {
        if config.seed_sample_data {
            Self::seeded(config.id_prefix.clone())
        } else {
            Self::with_prefix(config.id_prefix.clone())
        }
    }

    /// Build a store from existing tickets, kept in the given order.
    ///
    /// The id counter resumes after the highest sequence number found among
    /// ids carrying `prefix`.
    pub fn from_tickets(prefix: impl Into<String>, tickets: Vec<Ticket>) -> Result<Self> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;

        let mut seen = HashSet::new();
        let mut highest = 0;
        for ticket in &tickets {
            if !seen.insert(ticket.id.to_ascii_uppercase()) {
                return Err(HelpdeskError::DuplicateTicketId(ticket.id.clone()));
            }
            if let Some(sequence) = parse_ticket_sequence(&ticket.id, &prefix) {
                highest = highest.max(sequence);
            }
        }

        let next_sequence = highest
            .checked_add(1)
            .ok_or_else(|| HelpdeskError::Other("ticket sequence exhausted".to_string()))?;

        Ok(TicketStore {
            tickets: tickets.into(),
            prefix,
            next_sequence,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Id the next successful `create` will assign
    pub fn next_id(&self) -> String {
        format_ticket_id(&self.prefix, self.next_sequence)
    }

    /// Create a ticket dated today
    pub fn create(&mut self, draft: &TicketDraft) -> Result<&Ticket> {
        self.create_on(draft, today())
    }

    /// Create a ticket with an explicit creation date.
    ///
    /// Fails with `MissingField` and leaves the store untouched when the draft
    /// lacks a title, description or category.
    pub fn create_on(&mut self, draft: &TicketDraft, created_at: Date) -> Result<&Ticket> {
        let validated = draft.validate()?;

        let sequence = self.next_sequence;
        self.next_sequence = sequence
            .checked_add(1)
            .ok_or_else(|| HelpdeskError::Other("ticket sequence exhausted".to_string()))?;

        let id = format_ticket_id(&self.prefix, sequence);
        let ticket = Ticket::from_draft(id, validated, created_at);
        tracing::info!(
            id = %ticket.id,
            category = %ticket.category,
            priority = %ticket.priority,
            "created ticket"
        );

        self.tickets.push_front(ticket);
        Ok(&self.tickets[0])
    }

    /// All tickets, newest first
    pub fn list(&self) -> vec_deque::Iter<'_, Ticket> {
        self.tickets.iter()
    }

    /// Find a ticket by id, ignoring ASCII case
    pub fn get(&self, id: &str) -> Option<&Ticket> {
        let id = id.trim();
        self.tickets.iter().find(|t| t.id.eq_ignore_ascii_case(id))
    }

    /// Like [`TicketStore::get`], but a missing ticket is an error
    pub fn find(&self, id: &str) -> Result<&Ticket> {
        self.get(id)
            .ok_or_else(|| HelpdeskError::TicketNotFound(id.trim().to_string()))
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RequiredField;
    use crate::types::{TicketCategory, TicketPriority, TicketStatus};
    use jiff::civil::date;

    fn printer_jam() -> TicketDraft {
        TicketDraft::new("Printer jam")
            .description("Jam on floor 2")
            .category(TicketCategory::Hardware)
    }

    fn ids(store: &TicketStore) -> Vec<&str> {
        store.list().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_seeded_store_contents() {
        let store = TicketStore::seeded("HD").unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(ids(&store), vec!["HD-001", "HD-002", "HD-003"]);
        assert_eq!(store.next_id(), "HD-004");
    }

    #[test]
    fn test_empty_store_starts_at_one() {
        let store = TicketStore::new();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), "HD-001");
    }

    #[test]
    fn test_create_printer_jam_scenario() {
        let mut store = TicketStore::seeded("HD").unwrap();
        let ticket = store.create_on(&printer_jam(), date(2024, 2, 1)).unwrap();

        assert_eq!(ticket.id, "HD-004");
        assert_eq!(ticket.status, TicketStatus::New);
        assert_eq!(ticket.priority, TicketPriority::Medium);
        assert_eq!(ticket.category, TicketCategory::Hardware);
        assert_eq!(ticket.created_at, date(2024, 2, 1));
        assert_eq!(ticket.assignee, None);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_create_prepends_newest_first() {
        let mut store = TicketStore::seeded("HD").unwrap();
        for title in ["first", "second", "third"] {
            let draft = TicketDraft::new(title)
                .description("details")
                .category(TicketCategory::General);
            store.create_on(&draft, date(2024, 2, 1)).unwrap();
        }

        assert_eq!(store.len(), 6);
        assert_eq!(
            ids(&store),
            vec!["HD-006", "HD-005", "HD-004", "HD-001", "HD-002", "HD-003"]
        );
        let titles: Vec<_> = store.list().take(3).map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_create_rejects_missing_fields_without_mutation() {
        let mut store = TicketStore::seeded("HD").unwrap();
        let drafts = [
            (
                TicketDraft::new("").description("d").category(TicketCategory::Erp),
                RequiredField::Title,
            ),
            (
                TicketDraft::new("t").description("   ").category(TicketCategory::Erp),
                RequiredField::Description,
            ),
            (TicketDraft::new("t").description("d"), RequiredField::Category),
        ];

        for (draft, field) in drafts {
            let err = store.create_on(&draft, date(2024, 2, 1)).unwrap_err();
            assert!(matches!(err, HelpdeskError::MissingField(f) if f == field));
            assert_eq!(store.len(), 3);
            assert_eq!(store.next_id(), "HD-004");
        }
    }

    #[test]
    fn test_n_creations_yield_n_plus_three_newest_first() {
        for n in 0..12u32 {
            let mut store = TicketStore::seeded("HD").unwrap();
            for i in 0..n {
                let draft = TicketDraft::new(format!("ticket {i}"))
                    .description("details")
                    .category(TicketCategory::ALL[(i % 3) as usize]);
                store.create_on(&draft, date(2024, 2, 1)).unwrap();
            }

            assert_eq!(store.len(), n as usize + 3);
            assert_eq!(store.category_counts().all(), store.len());

            let created: Vec<String> = store.list().take(n as usize).map(|t| t.id.clone()).collect();
            let expected: Vec<String> = (4..4 + n).rev().map(|s| format_ticket_id("HD", s)).collect();
            assert_eq!(created, expected);
        }
    }

    #[test]
    fn test_duplicate_titles_allowed() {
        let mut store = TicketStore::new();
        store.create_on(&printer_jam(), date(2024, 2, 1)).unwrap();
        store.create_on(&printer_jam(), date(2024, 2, 1)).unwrap();
        assert_eq!(ids(&store), vec!["HD-002", "HD-001"]);
    }

    #[test]
    fn test_counter_resumes_after_highest_sequence() {
        let mut tickets = sample_tickets("HD");
        tickets[1].id = "HD-010".to_string();
        let mut store = TicketStore::from_tickets("HD", tickets).unwrap();
        assert_eq!(store.next_id(), "HD-011");

        let ticket = store.create_on(&printer_jam(), date(2024, 2, 1)).unwrap();
        assert_eq!(ticket.id, "HD-011");
    }

    #[test]
    fn test_counter_resumes_after_lowercase_id() {
        let mut tickets = sample_tickets("HD");
        tickets[2].id = "hd-004".to_string();
        let mut store = TicketStore::from_tickets("HD", tickets).unwrap();
        assert_eq!(store.next_id(), "HD-005");

        let created = store.create_on(&printer_jam(), date(2024, 2, 1)).unwrap().id.clone();
        assert_eq!(created, "HD-005");
        for id in ["HD-004", "HD-005"] {
            let matches = store.list().filter(|t| t.id.eq_ignore_ascii_case(id)).count();
            assert_eq!(matches, 1, "{id} should match exactly one ticket");
        }
    }

    #[test]
    fn test_from_tickets_rejects_duplicate_ids() {
        let mut tickets = sample_tickets("HD");
        tickets[2].id = "hd-001".to_string();
        assert!(matches!(
            TicketStore::from_tickets("HD", tickets),
            Err(HelpdeskError::DuplicateTicketId(id)) if id == "hd-001"
        ));
    }

    #[test]
    fn test_custom_prefix() {
        let mut store = TicketStore::seeded("OPS").unwrap();
        assert_eq!(ids(&store), vec!["OPS-001", "OPS-002", "OPS-003"]);
        let ticket = store.create_on(&printer_jam(), date(2024, 2, 1)).unwrap();
        assert_eq!(ticket.id, "OPS-004");
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        assert!(matches!(
            TicketStore::with_prefix("H D"),
            Err(HelpdeskError::InvalidPrefix(_, _))
        ));
    }

    #[test]
    fn test_get_and_find() {
        let store = TicketStore::seeded("HD").unwrap();
        assert_eq!(
            store.get("hd-002").map(|t| t.title.as_str()),
            Some("Замена картриджа в принтере HP LaserJet")
        );
        assert!(store.get("HD-099").is_none());
        assert!(matches!(
            store.find(" HD-099 "),
            Err(HelpdeskError::TicketNotFound(id)) if id == "HD-099"
        ));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            seed_sample_data: false,
            id_prefix: "IT".to_string(),
            ..Default::default()
        };
        let store = TicketStore::from_config(&config).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), "IT-001");

        let store = TicketStore::from_config(&Config::default()).unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_create_uses_today() {
        let mut store = TicketStore::new();
        let before = today();
        let created = store.create(&printer_jam()).unwrap().created_at;
        let after = today();
        assert!(created == before || created == after);
    }
}
