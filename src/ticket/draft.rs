use crate::error::{RequiredField, Result};
use crate::types::{TicketCategory, TicketPriority};
use crate::utils::{require_choice, require_text};

/// User-entered fields of a ticket that does not exist yet.
///
/// Text fields may hold anything while being edited; they are only checked
/// when the draft is validated for creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub category: Option<TicketCategory>,
    pub priority: TicketPriority,
}

/// A draft whose required fields are present, with text trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    pub title: String,
    pub description: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
}

impl TicketDraft {
    pub fn new(title: impl Into<String>) -> Self {
        TicketDraft {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: TicketCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn priority(mut self, priority: TicketPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Check required fields in form order: title, description, category
    pub fn validate(&self) -> Result<ValidatedDraft> {
        let title = require_text(&self.title, RequiredField::Title)?;
        let description = require_text(&self.description, RequiredField::Description)?;
        let category = require_choice(self.category, RequiredField::Category)?;

        Ok(ValidatedDraft {
            title: title.to_string(),
            description: description.to_string(),
            category,
            priority: self.priority,
        })
    }
}
