use std::fmt;

use thiserror::Error;

/// Draft fields that must be filled before a ticket can be created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    Description,
    Category,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Title => write!(f, "title"),
            RequiredField::Description => write!(f, "description"),
            RequiredField::Category => write!(f, "category"),
        }
    }
}

#[derive(Error, Debug)]
pub enum HelpdeskError {
    #[error("required field '{0}' is empty")]
    MissingField(RequiredField),

    #[error("ticket '{0}' not found")]
    TicketNotFound(String),

    #[error("invalid priority '{0}' (expected low, medium, high or critical)")]
    InvalidPriority(String),

    #[error("duplicate ticket id '{0}'")]
    DuplicateTicketId(String),

    #[error("invalid status '{0}' (expected new, in-progress, resolved or closed)")]
    InvalidStatus(String),

    #[error("invalid category '{0}' (expected erp, hardware, general or 1-3)")]
    InvalidCategory(String),

    #[error("invalid tab '{0}' (expected all, new, active or resolved)")]
    InvalidTab(String),

    #[error("invalid id prefix '{0}': {1}")]
    InvalidPrefix(String, String),

    #[error("form is not open (use 'new' first)")]
    FormClosed,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, HelpdeskError>;
