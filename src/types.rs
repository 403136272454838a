use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HelpdeskError;

pub const DEFAULT_ID_PREFIX: &str = "HD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TicketStatus {
    #[default]
    #[serde(rename = "Новая")]
    New,
    #[serde(rename = "В работе")]
    InProgress,
    #[serde(rename = "Решена")]
    Resolved,
    #[serde(rename = "Закрыта")]
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::New,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::New => "Новая",
            TicketStatus::InProgress => "В работе",
            TicketStatus::Resolved => "Решена",
            TicketStatus::Closed => "Закрыта",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TicketStatus {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(status) = TicketStatus::ALL.into_iter().find(|v| v.label() == s) {
            return Ok(status);
        }
        match s.to_lowercase().as_str() {
            "new" => Ok(TicketStatus::New),
            "in-progress" | "in_progress" | "active" => Ok(TicketStatus::InProgress),
            "resolved" => Ok(TicketStatus::Resolved),
            "closed" => Ok(TicketStatus::Closed),
            _ => Err(HelpdeskError::InvalidStatus(s.to_string())),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum TicketPriority {
    #[serde(rename = "Низкий")]
    Low,
    #[default]
    #[serde(rename = "Средний")]
    Medium,
    #[serde(rename = "Высокий")]
    High,
    #[serde(rename = "Критический")]
    Critical,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Critical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Низкий",
            TicketPriority::Medium => "Средний",
            TicketPriority::High => "Высокий",
            TicketPriority::Critical => "Критический",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TicketPriority {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(priority) = TicketPriority::ALL.into_iter().find(|v| v.label() == s) {
            return Ok(priority);
        }
        match s.to_lowercase().as_str() {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            "critical" => Ok(TicketPriority::Critical),
            _ => Err(HelpdeskError::InvalidPriority(s.to_string())),
        }
    }
}

/// Topical routing bucket for a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketCategory {
    #[serde(rename = "1С:ERP, 1С:Документооборот")]
    Erp,
    #[serde(rename = "Компьютерная и орг.техника")]
    Hardware,
    #[serde(rename = "Общие вопросы")]
    General,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Erp,
        TicketCategory::Hardware,
        TicketCategory::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TicketCategory::Erp => "1С:ERP, 1С:Документооборот",
            TicketCategory::Hardware => "Компьютерная и орг.техника",
            TicketCategory::General => "Общие вопросы",
        }
    }

    /// Short blurb shown on the dashboard category card
    pub fn description(&self) -> &'static str {
        match self {
            TicketCategory::Erp => "Техническая поддержка систем 1С, настройка, обновления",
            TicketCategory::Hardware => "Ремонт компьютеров, принтеров, настройка оборудования",
            TicketCategory::General => "Консультации, настройка ПО, обучение пользователей",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TicketCategory {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(category) = TicketCategory::ALL.into_iter().find(|v| v.label() == s) {
            return Ok(category);
        }
        match s.to_lowercase().as_str() {
            "1" | "erp" | "1c" => Ok(TicketCategory::Erp),
            "2" | "hardware" => Ok(TicketCategory::Hardware),
            "3" | "general" => Ok(TicketCategory::General),
            _ => Err(HelpdeskError::InvalidCategory(s.to_string())),
        }
    }
}
