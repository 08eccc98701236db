use chrono::{Datelike, Local};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use fastclear_core::model::format_gbp;

use crate::app::{App, Field, NoticeKind};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: header, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    draw_header(frame, app, *header_area);

    // Main content: form on the left, estimate sidebar on the right
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(*content_area);

    let content = content_chunks.as_ref();
    let [form_area, sidebar_area] = content else {
        return;
    };

    draw_form(frame, app, *form_area);
    draw_sidebar(frame, app, *sidebar_area);
    draw_status(frame, app, *status_area);
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = vec![
        Line::from("Same-day rubbish clearance & recycling"),
        Line::from("📞 07904 127 054 · 💬 wa.me/447904127054 · 🌐 fastclearportsmouth.co.uk"),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(app.selection.business_name.clone()),
    );
    frame.render_widget(header, area);
}

fn draw_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items = Field::ORDER
        .iter()
        .map(|&field| {
            let prefix = if field == app.focused_field() {
                "> "
            } else {
                "  "
            };
            ListItem::new(format!("{prefix}{}", field_line(app, field)))
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Get your quote"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.focus));
    frame.render_stateful_widget(list, area, &mut state);
}

fn field_line(app: &App, field: Field) -> String {
    match field {
        Field::CustomerName => format!("Customer name: {}", app.selection.customer_name),
        Field::Phone => format!("Phone: {}", app.selection.phone),
        Field::Email => format!("Email: {}", app.selection.email),
        Field::Postcode => format!("Postcode: {}", app.selection.postcode),
        Field::Address => format!("Address: {}", app.selection.address),
        Field::WasteType => {
            let value = app
                .selection
                .category
                .map_or_else(|| "Select (Space)".to_owned(), |category| category.to_string());
            format!("Waste type: {value}")
        }
        Field::LoadSize => {
            let value = app
                .selection
                .load_size
                .map_or("Select (Space)", |size| size.label());
            format!("Load size: {value}")
        }
        Field::DateTime => format!("Preferred date & time: {}", app.selection.date_time),
        Field::Extras => extras_line(app),
        Field::Notes => format!("Notes: {}", app.selection.notes),
        Field::Agree => {
            let mark = if app.selection.agree { "x" } else { " " };
            format!("[{mark}] I confirm the details are correct. Final price may change after on-site assessment.")
        }
        Field::CopyButton => "[ Copy quote ]".to_owned(),
        Field::SubmitButton => format!("[ {} ]", app.submit_label()),
    }
}

fn extras_line(app: &App) -> String {
    let cursor_active = app.focused_field() == Field::Extras;

    let entries = app
        .service
        .extras()
        .iter()
        .enumerate()
        .map(|(index, extra)| {
            let mark = if app.selection.has_extra(&extra.id) {
                "x"
            } else {
                " "
            };
            let entry = format!("[{mark}] {} ({})", extra.label, format_gbp(extra.price));
            if cursor_active && index == app.extra_cursor {
                format!("‹{entry}›")
            } else {
                entry
            }
        })
        .collect::<Vec<String>>();

    format!("Extras: {}", entries.join("  "))
}

fn draw_sidebar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [estimate_area, availability_area, small_print_area] = chunks else {
        return;
    };

    draw_estimate(frame, app, *estimate_area);

    let availability = Paragraph::new(vec![
        Line::from("• Mon–Sat: 08:00–18:00"),
        Line::from("• Same-day bookings subject to confirmation"),
        Line::from("• Bank holidays: limited service"),
    ])
    .block(Block::default().borders(Borders::ALL).title("Availability"))
    .wrap(Wrap { trim: true });
    frame.render_widget(availability, *availability_area);

    let year = Local::now().year();
    let small_print = Paragraph::new(format!(
        "© {year} {}. Waste carrier licensed. Prices include labour & disposal. Final quote confirmed on site.",
        app.selection.business_name
    ))
    .block(Block::default().borders(Borders::ALL).title("Small print"))
    .wrap(Wrap { trim: true });
    frame.render_widget(small_print, *small_print_area);
}

fn draw_estimate(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let estimate = app.service.estimate(&app.selection);

    // The base row stays blank until a category and size are chosen
    let base = if estimate.base.is_zero() {
        "—".to_owned()
    } else {
        format_gbp(estimate.base)
    };

    let lines = vec![
        Line::from(format!("Base price  {base}")),
        Line::from(format!("Extras      {}", format_gbp(estimate.extras))),
        Line::from(format!("Travel fee  {}", format_gbp(estimate.travel))),
        Line::from("─────────────────────"),
        Line::styled(
            format!("Total       {}", format_gbp(estimate.total)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Estimate"));
    frame.render_widget(panel, area);
}

fn draw_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let nav_hint = "Tab/↓ next · Shift-Tab/↑ prev · Space toggle/cycle · Enter activate · Esc quit";

    let status_text = if app.is_submitting {
        format!("Sending booking request… · {nav_hint}")
    } else if let Some(notice) = &app.notice {
        format!("{} · {nav_hint}", notice.text)
    } else {
        nav_hint.to_owned()
    };

    let status_style = if matches!(
        app.notice.as_ref().map(|notice| notice.kind),
        Some(NoticeKind::Error)
    ) {
        Style::default().fg(Color::Red)
    } else if app.is_submitting {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, area);
}
