//! Screen layout
//!
//! Header tabs, the current page, an optional log pane and the footer, with
//! the menu editor drawn as a modal on top.

use ratatui::{prelude::*, widgets::*};
use shared::OrderStatus;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::list::LoadState;
use crate::notify::NoticeLevel;
use crate::shell::Page;
use crate::tui::app::{App, FormField, InputMode};
use crate::views::dashboard::{format_total, initials, local_time, order_summary, reservation_summary, table_label};
use crate::views::{EditorMode, Trend};

fn status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Completed => Color::Green,
        OrderStatus::Preparing => Color::Yellow,
        OrderStatus::Pending => Color::LightRed,
        OrderStatus::Unknown => Color::Gray,
    }
}

fn titled(title: impl Into<String>, color: Color) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title.into()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Page
            Constraint::Length(3), // Notices / help
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    let body = if app.show_logs {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[1]);
        draw_logs(f, app, split[1]);
        split[0]
    } else {
        chunks[1]
    };

    match app.page() {
        Page::Dashboard => draw_dashboard(f, app, body),
        Page::Orders => draw_orders(f, app, body),
        Page::Menu => draw_menu(f, app, body),
    }

    draw_footer(f, app, chunks[2]);

    if app.input_mode == InputMode::Editing {
        draw_editor(f, app, body);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!("{} {}", i + 1, page.title())))
        .collect();
    let selected = Page::ALL.iter().position(|p| *p == app.page()).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" Thal Admin ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn draw_logs(f: &mut Frame, app: &App, area: Rect) {
    let widget = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::DIM),
                )
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(widget, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let line = match app.notices.latest() {
        Some(notice) => {
            let color = match notice.level {
                NoticeLevel::Success => Color::Green,
                NoticeLevel::Info => Color::Cyan,
                NoticeLevel::Warning => Color::Yellow,
                NoticeLevel::Error => Color::Red,
            };
            Line::from(Span::styled(notice.message.clone(), Style::default().fg(color)))
        }
        None => Line::from(Span::styled(help_text(app), Style::default().add_modifier(Modifier::DIM))),
    };
    f.render_widget(Paragraph::new(line).block(Block::default().borders(Borders::ALL)), area);
}

fn help_text(app: &App) -> &'static str {
    match (app.input_mode, app.page()) {
        (InputMode::Search, _) => "Type to filter · Enter keep · Esc clear",
        (InputMode::Editing, _) => "Tab next field · F2 cycle category · Enter on image attaches · Ctrl+S save · Esc cancel",
        (_, Page::Dashboard) => "1/2/3 pages · r reload · l logs · x logout · q quit",
        (_, Page::Orders) => "↑↓ select · / search · f status · c complete · r reload · l logs · q quit",
        (_, Page::Menu) => "↑↓ select · / search · a add · e edit · d delete · r reload · l logs · q quit",
    }
}

fn load_label(state: &LoadState) -> String {
    match state {
        LoadState::Idle => String::new(),
        LoadState::Loading => " loading…".to_string(),
        LoadState::Loaded => String::new(),
        LoadState::Failed(message) => format!(" ({message})"),
    }
}

fn draw_search(f: &mut Frame, app: &App, area: Rect, prefix: String) {
    let searching = app.input_mode == InputMode::Search;
    let style = if searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let label_width = prefix.chars().count() + "Search: ".len();
    let text = Line::from(vec![
        Span::raw(prefix),
        Span::raw("Search: "),
        Span::styled(app.search.value().to_string(), style),
    ]);
    f.render_widget(Paragraph::new(text).block(Block::default().borders(Borders::ALL)), area);

    if searching {
        let x = area.x + 1 + (label_width + app.search.visual_cursor()) as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn draw_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(rows[0]);
    for (metric, card) in app.dashboard.metrics().iter().zip(cards.iter()) {
        let change_color = match metric.trend {
            Trend::Up => Color::Green,
            Trend::Down => Color::Red,
        };
        let text = vec![
            Line::from(Span::styled(metric.value, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(metric.change, Style::default().fg(change_color))),
        ];
        f.render_widget(Paragraph::new(text).block(titled(metric.title, Color::Blue)), *card);
    }

    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let loading = if app.dashboard.is_loading() { " loading…" } else { "" };

    let orders: Vec<ListItem> = app
        .dashboard
        .recent_orders()
        .iter()
        .map(|order| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!(" {:<2} ", initials(order.name.as_deref())),
                        Style::default().fg(Color::Black).bg(Color::LightRed),
                    ),
                    Span::raw(" "),
                    Span::styled(order.name.clone().unwrap_or_default(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::raw(format_total(order.total)),
                    Span::raw("  "),
                    Span::styled(order.status.as_str(), Style::default().fg(status_color(order.status))),
                ]),
                Line::from(Span::styled(
                    format!("     {}", order_summary(order)),
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ])
        })
        .collect();
    f.render_widget(
        List::new(orders).block(titled(format!("Recent Orders{loading}"), Color::Magenta)),
        lists[0],
    );

    let reservations: Vec<ListItem> = app
        .dashboard
        .todays_reservations()
        .iter()
        .map(|r| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(r.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(table_label(r), Style::default().fg(Color::Cyan)),
                ]),
                Line::from(Span::styled(reservation_summary(r), Style::default().add_modifier(Modifier::DIM))),
            ])
        })
        .collect();
    f.render_widget(
        List::new(reservations).block(titled("Today's Reservations", Color::Magenta)),
        lists[1],
    );
}

fn draw_orders(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);
    draw_search(f, app, rows[0], format!("Status: {} · ", app.orders.status));

    let visible = app.orders.visible();
    let table_rows: Vec<Row> = visible
        .iter()
        .map(|order| {
            Row::new(vec![
                Cell::from(order.id.clone()),
                Cell::from(order.name.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(order.item_count().to_string()),
                Cell::from(format_total(order.total)),
                Cell::from(Span::styled(order.status.as_str(), Style::default().fg(status_color(order.status)))),
                Cell::from(local_time(order.created_at)),
            ])
        })
        .collect();

    let title = format!(
        "Orders ({}/{}){}",
        visible.len(),
        app.orders.orders().items().len(),
        load_label(app.orders.orders().state())
    );
    let table = Table::new(
        table_rows,
        [
            Constraint::Length(26),
            Constraint::Min(16),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(9),
        ],
    )
    .header(Row::new(["ID", "Customer", "Items", "Total", "Status", "Time"]).style(Style::default().add_modifier(Modifier::BOLD)))
    .block(titled(title, Color::Cyan))
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if !visible.is_empty() {
        state.select(Some(app.orders.selected_index()));
    }
    f.render_stateful_widget(table, rows[1], &mut state);
}

fn draw_menu(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);
    draw_search(f, app, rows[0], String::new());

    let visible = app.menu.visible();
    let table_rows: Vec<Row> = visible
        .iter()
        .map(|item| {
            Row::new(vec![
                Cell::from(item.name.clone()),
                Cell::from(item.category.clone()),
                Cell::from(format_total(item.price)),
                Cell::from(item.description.clone()),
                Cell::from(if item.image.is_some() { "yes" } else { "-" }),
            ])
        })
        .collect();

    let title = format!(
        "Menu ({}/{}){}",
        visible.len(),
        app.menu.items().items().len(),
        load_label(app.menu.items().state())
    );
    let table = Table::new(
        table_rows,
        [
            Constraint::Min(18),
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(6),
        ],
    )
    .header(Row::new(["Name", "Category", "Price", "Description", "Image"]).style(Style::default().add_modifier(Modifier::BOLD)))
    .block(titled(title, Color::Cyan))
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if !visible.is_empty() {
        state.select(Some(app.menu.selected_index()));
    }
    f.render_stateful_widget(table, rows[1], &mut state);
}

/// Rect of `width` x `height` centred in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn draw_editor(f: &mut Frame, app: &App, area: Rect) {
    let (Some(form), Some(editor)) = (app.form.as_ref(), app.menu.editor()) else {
        return;
    };

    let popup = centered(area, 70, 20);
    f.render_widget(Clear, popup);

    let title = match editor.mode() {
        EditorMode::Create => "Add Menu Item",
        EditorMode::Edit { .. } => "Edit Menu Item",
    };
    let title = if app.is_saving() { format!("{title} (saving…)") } else { title.to_string() };
    let block = titled(title, Color::Yellow);
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut constraints = vec![Constraint::Length(3); FormField::ALL.len()];
    constraints.push(Constraint::Min(1));
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in FormField::ALL.iter().enumerate() {
        let focused = form.focus == i;
        let border = if focused { Color::Yellow } else { Color::DarkGray };
        let input = &form.inputs[i];
        f.render_widget(
            Paragraph::new(input.value().to_string()).block(titled(field.label(), border)),
            slots[i],
        );
        if focused {
            let x = slots[i].x + 1 + input.visual_cursor() as u16;
            f.set_cursor_position((x.min(slots[i].right().saturating_sub(2)), slots[i].y + 1));
        }
    }

    let preview = match (editor.image(), editor.preview()) {
        (Some(image), Some(preview)) => format!("Attached {} · preview {}", image.file_name, preview.location()),
        (Some(image), None) => format!("Attached {}", image.file_name),
        (None, Some(preview)) => format!("Current image {}", preview.location()),
        (None, None) if editor.is_create() => "No image attached (required)".to_string(),
        (None, None) => "No image".to_string(),
    };
    f.render_widget(
        Paragraph::new(preview)
            .style(Style::default().add_modifier(Modifier::DIM))
            .wrap(Wrap { trim: true }),
        slots[FormField::ALL.len()],
    );
}
