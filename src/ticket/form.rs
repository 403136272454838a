use jiff::civil::Date;

use crate::error::{HelpdeskError, RequiredField, Result};
use crate::store::TicketStore;
use crate::ticket::TicketDraft;
use crate::types::{TicketCategory, TicketPriority};
use crate::utils::today;

/// What happened to a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A ticket was created with this id; the form is now closed and reset
    Created(String),
    /// A required field was empty; nothing changed and the form stays open
    Refused(RequiredField),
}

/// The ticket creation form: a draft plus whether the form is showing.
///
/// Closing the form hides it but keeps whatever was typed, so reopening
/// resumes the same draft. Only a successful submit clears it.
#[derive(Debug, Clone, Default)]
pub struct TicketForm {
    draft: TicketDraft,
    open: bool,
}

impl TicketForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &TicketDraft {
        &self.draft
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    fn draft_mut(&mut self) -> Result<&mut TicketDraft> {
        if !self.open {
            return Err(HelpdeskError::FormClosed);
        }
        Ok(&mut self.draft)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.draft_mut()?.title = title.into();
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<()> {
        self.draft_mut()?.description = description.into();
        Ok(())
    }

    pub fn set_category(&mut self, category: TicketCategory) -> Result<()> {
        self.draft_mut()?.category = Some(category);
        Ok(())
    }

    pub fn set_priority(&mut self, priority: TicketPriority) -> Result<()> {
        self.draft_mut()?.priority = priority;
        Ok(())
    }

    /// Submit the draft, dating the ticket today
    pub fn submit(&mut self, store: &mut TicketStore) -> Result<SubmitOutcome> {
        self.submit_on(store, today())
    }

    pub fn submit_on(&mut self, store: &mut TicketStore, created_at: Date) -> Result<SubmitOutcome> {
        if !self.open {
            return Err(HelpdeskError::FormClosed);
        }

        match store.create_on(&self.draft, created_at) {
            Ok(ticket) => {
                let id = ticket.id.clone();
                self.draft = TicketDraft::default();
                self.open = false;
                Ok(SubmitOutcome::Created(id))
            }
            Err(HelpdeskError::MissingField(field)) => {
                tracing::debug!(%field, "ticket submission refused");
                Ok(SubmitOutcome::Refused(field))
            }
            Err(e) => Err(e),
        }
    }
}
