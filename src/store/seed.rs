//! Fixture tickets every seeded store starts with.

use jiff::civil::date;

use crate::ticket::Ticket;
use crate::types::{TicketCategory, TicketPriority, TicketStatus};
use crate::utils::format_ticket_id;

/// The three sample tickets, in display order
pub fn sample_tickets(prefix: &str) -> Vec<Ticket> {
    vec![
        Ticket {
            id: format_ticket_id(prefix, 1),
            title: "Не работает 1С:ERP".to_string(),
            description: "При попытке входа в систему выдает ошибку соединения с базой данных"
                .to_string(),
            category: TicketCategory::Erp,
            priority: TicketPriority::High,
            status: TicketStatus::InProgress,
            created_at: date(2024, 1, 15),
            assignee: Some("Иванов И.И.".to_string()),
        },
        Ticket {
            id: format_ticket_id(prefix, 2),
            title: "Замена картриджа в принтере HP LaserJet".to_string(),
            description: "Требуется замена тонер-картриджа в принтере на 3 этаже".to_string(),
            category: TicketCategory::Hardware,
            priority: TicketPriority::Medium,
            status: TicketStatus::New,
            created_at: date(2024, 1, 15),
            assignee: None,
        },
        Ticket {
            id: format_ticket_id(prefix, 3),
            title: "Настройка VPN подключения".to_string(),
            description: "Новому сотруднику необходимо настроить VPN для удаленной работы"
                .to_string(),
            category: TicketCategory::General,
            priority: TicketPriority::Medium,
            status: TicketStatus::Resolved,
            created_at: date(2024, 1, 14),
            assignee: Some("Петров П.П.".to_string()),
        },
    ]
}
