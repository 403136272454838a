//! Read-only projections of a ticket store.
//!
//! Nothing here is cached: every count and tab is recomputed from the current
//! tickets on each call, so the views can never drift from the store.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::TicketStore;
use crate::error::HelpdeskError;
use crate::ticket::Ticket;
use crate::types::{TicketCategory, TicketStatus};

/// Status tabs of the ticket list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    All,
    New,
    Active,
    Resolved,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::All, Tab::New, Tab::Active, Tab::Resolved];

    /// The status a ticket needs to appear in this tab, `None` for `All`
    pub fn status(&self) -> Option<TicketStatus> {
        match self {
            Tab::All => None,
            Tab::New => Some(TicketStatus::New),
            Tab::Active => Some(TicketStatus::InProgress),
            Tab::Resolved => Some(TicketStatus::Resolved),
        }
    }

    /// The status tab a ticket lands in. Closed tickets only show under `All`.
    pub fn for_status(status: TicketStatus) -> Option<Tab> {
        match status {
            TicketStatus::New => Some(Tab::New),
            TicketStatus::InProgress => Some(Tab::Active),
            TicketStatus::Resolved => Some(Tab::Resolved),
            TicketStatus::Closed => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::New => "new",
            Tab::Active => "active",
            Tab::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::All => "Все",
            Tab::New => "Новые",
            Tab::Active => "Активные",
            Tab::Resolved => "Решенные",
        }
    }

    pub fn contains(&self, ticket: &Ticket) -> bool {
        self.status().is_none_or(|status| ticket.status == status)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(tab) = Tab::ALL.into_iter().find(|t| t.label() == s) {
            return Ok(tab);
        }
        match s.to_lowercase().as_str() {
            "all" => Ok(Tab::All),
            "new" => Ok(Tab::New),
            "active" | "in-progress" => Ok(Tab::Active),
            "resolved" => Ok(Tab::Resolved),
            _ => Err(HelpdeskError::InvalidTab(s.to_string())),
        }
    }
}

pub const VALID_TABS: &[&str] = &["all", "new", "active", "resolved"];

/// Tickets visible under `tab`, in the order given
pub fn filter_tab<'a>(tickets: impl IntoIterator<Item = &'a Ticket>, tab: Tab) -> Vec<&'a Ticket> {
    tickets.into_iter().filter(|t| tab.contains(t)).collect()
}

fn category_index(category: TicketCategory) -> usize {
    match category {
        TicketCategory::Erp => 0,
        TicketCategory::Hardware => 1,
        TicketCategory::General => 2,
    }
}

fn status_index(status: TicketStatus) -> usize {
    match status {
        TicketStatus::New => 0,
        TicketStatus::InProgress => 1,
        TicketStatus::Resolved => 2,
        TicketStatus::Closed => 3,
    }
}

/// Ticket count per category plus the `all` total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    all: usize,
    by_category: [usize; 3],
}

impl CategoryCounts {
    pub fn from_tickets<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        let mut counts = CategoryCounts::default();
        for ticket in tickets {
            counts.all += 1;
            counts.by_category[category_index(ticket.category)] += 1;
        }
        counts
    }

    pub fn all(&self) -> usize {
        self.all
    }

    pub fn get(&self, category: TicketCategory) -> usize {
        self.by_category[category_index(category)]
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TicketCategory::ALL.len() + 1))?;
        map.serialize_entry("all", &self.all)?;
        for category in TicketCategory::ALL {
            map.serialize_entry(category.label(), &self.get(category))?;
        }
        map.end()
    }
}

/// Ticket count per status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    by_status: [usize; 4],
}

impl StatusCounts {
    pub fn from_tickets<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        let mut counts = StatusCounts::default();
        for ticket in tickets {
            counts.by_status[status_index(ticket.status)] += 1;
        }
        counts
    }

    pub fn get(&self, status: TicketStatus) -> usize {
        self.by_status[status_index(status)]
    }

    pub fn total(&self) -> usize {
        self.by_status.iter().sum()
    }
}

impl Serialize for StatusCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TicketStatus::ALL.len()))?;
        for status in TicketStatus::ALL {
            map.serialize_entry(status.label(), &self.get(status))?;
        }
        map.end()
    }
}

/// One category card on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: TicketCategory,
    pub description: &'static str,
    pub count: usize,
}

/// Everything the dashboard header shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub status_counts: StatusCounts,
    pub category_counts: CategoryCounts,
    pub categories: Vec<CategorySummary>,
}

impl DashboardSummary {
    pub fn from_tickets<'a>(tickets: impl IntoIterator<Item = &'a Ticket> + Clone) -> Self {
        let status_counts = StatusCounts::from_tickets(tickets.clone());
        let category_counts = CategoryCounts::from_tickets(tickets);

        let categories = TicketCategory::ALL
            .into_iter()
            .map(|category| CategorySummary {
                category,
                description: category.description(),
                count: category_counts.get(category),
            })
            .collect();

        DashboardSummary {
            total: category_counts.all(),
            in_progress: status_counts.get(TicketStatus::InProgress),
            resolved: status_counts.get(TicketStatus::Resolved),
            status_counts,
            category_counts,
            categories,
        }
    }
}

impl TicketStore {
    /// Tickets visible under a status tab, newest first
    pub fn tab(&self, tab: Tab) -> Vec<&Ticket> {
        filter_tab(self.list(), tab)
    }

    pub fn category_counts(&self) -> CategoryCounts {
        CategoryCounts::from_tickets(self.list())
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::from_tickets(self.list())
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::from_tickets(self.list())
    }
}
