use super::{bold, cyan, dimmed, format_priority_colored, format_status_colored};
use crate::store::{DashboardSummary, Tab, TicketStore};
use crate::ticket::{Ticket, TicketForm};

/// Format a ticket as a multi-line card
pub fn format_ticket_card(ticket: &Ticket) -> String {
    let mut meta = vec![ticket.category.to_string(), ticket.created_at.to_string()];
    if let Some(assignee) = &ticket.assignee {
        meta.push(assignee.clone());
    }

    format!(
        "{} {} {}\n  {}\n  {}\n  {}",
        cyan(&ticket.id),
        format_priority_colored(ticket.priority),
        format_status_colored(ticket.status),
        bold(&ticket.title),
        ticket.description,
        dimmed(&meta.join(" · "))
    )
}

/// Tab strip with per-tab counts, the active tab in bold
pub fn format_tab_bar(store: &TicketStore, active: Tab) -> String {
    Tab::ALL
        .into_iter()
        .map(|tab| {
            let label = format!("{} ({})", tab.label(), store.tab(tab).len());
            if tab == active {
                bold(&format!("[{label}]"))
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Dashboard counters, status breakdown and category cards
pub fn format_dashboard(summary: &DashboardSummary) -> String {
    let mut lines = vec![
        format!("Всего заявок: {}", summary.total),
        format!("В работе: {}", summary.in_progress),
        format!("Решено: {}", summary.resolved),
        String::new(),
        bold("Статусы"),
    ];

    for status in crate::types::TicketStatus::ALL {
        lines.push(format!(
            "  {} {}",
            format_status_colored(status),
            summary.status_counts.get(status)
        ));
    }

    lines.push(String::new());
    lines.push(bold("Категории"));
    for card in &summary.categories {
        lines.push(format!("  {} ({} заявок)", card.category, card.count));
        lines.push(format!("    {}", dimmed(card.description)));
    }

    lines.join("\n")
}

/// Current state of the creation form
pub fn format_form(form: &TicketForm) -> String {
    let draft = form.draft();
    let or_placeholder = |value: &str, placeholder: &str| {
        if value.trim().is_empty() {
            dimmed(placeholder)
        } else {
            value.to_string()
        }
    };

    let state = if form.is_open() { "открыта" } else { "скрыта" };
    let category = draft
        .category
        .map(|c| c.to_string())
        .unwrap_or_default();

    [
        format!("{} ({})", bold("Создать новую заявку"), state),
        format!(
            "  Название заявки:   {}",
            or_placeholder(&draft.title, "Краткое описание проблемы")
        ),
        format!(
            "  Категория:         {}",
            or_placeholder(&category, "Выберите категорию")
        ),
        format!("  Приоритет:         {}", draft.priority),
        format!(
            "  Описание проблемы: {}",
            or_placeholder(
                &draft.description,
                "Подробное описание проблемы или запроса"
            )
        ),
    ]
    .join("\n")
}
