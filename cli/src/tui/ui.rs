use hard75_core::WeekProgress;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, ListState, Paragraph, Row, Table, Tabs},
    Frame,
};

use crate::tui::app::{App, InputMode};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Status / input
            Constraint::Length(1), // Footer
        ])
        .split(size);

    let title = if app.username.is_empty() {
        format!("75 HARD - DAY {}", app.day_counter)
    } else {
        format!("75 HARD - {} - DAY {}", app.username, app.day_counter)
    };
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let tabs = Tabs::new(app.trackers.iter().map(|t| t.kind().label()).collect::<Vec<_>>())
        .select(app.tab)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(tabs, main_chunks[1]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(main_chunks[2]);

    draw_week(f, app, content_chunks[0]);
    draw_items(f, app, content_chunks[1]);
    draw_status(f, app, main_chunks[3]);

    let footer = Paragraph::new(
        "tab: Switch | h/l: Day | j/k: Item | space: Toggle | r: Reset day | d: Delete | m: Rename | q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[4]);
}

fn draw_week(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let progress = WeekProgress::from_period(app.tracker().period());
    let items: Vec<ListItem> = progress
        .days
        .iter()
        .map(|day| {
            let (icon, style) = if day.is_complete {
                ("✔", Style::default().fg(Color::Green))
            } else {
                ("☐", Style::default())
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", icon), style),
                Span::raw(format!("{:<10}", day.label)),
                Span::styled(format!("{}/{}", day.completed, day.total), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" Week ").borders(Borders::ALL).border_type(BorderType::Rounded))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.day));
    f.render_stateful_widget(list, chunks[0], &mut state);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(progress.ratio().clamp(0.0, 1.0))
        .label(format!("{}/{}", progress.completed, progress.total));
    f.render_widget(gauge, chunks[1]);
}

fn draw_items(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(group) = app.group() else {
        f.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    };
    let title = format!(" {} ", group.label);

    let rows: Vec<Row> = group
        .items()
        .map(|item| {
            let status = if item.is_complete {
                Span::styled("✔", Style::default().fg(Color::Green))
            } else {
                Span::raw("☐")
            };
            Row::new(vec![
                status,
                Span::styled(item.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(item.sets.clone().unwrap_or_default(), Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(3), Constraint::Min(16), Constraint::Length(22)])
        .header(Row::new(vec!["St", "Item", "Sets"]).style(Style::default().fg(Color::Yellow)))
        .block(Block::default().title(title).borders(Borders::ALL).border_type(BorderType::Rounded))
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let widget = match app.input_mode {
        InputMode::Renaming => {
            f.set_cursor_position((area.x + 1 + app.cursor_position as u16, area.y + 1));
            Paragraph::new(app.input.as_str()).block(
                Block::default()
                    .title(" Rename (enter: save, esc: cancel) ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
        }
        InputMode::Normal => Paragraph::new(app.message.clone().unwrap_or_default())
            .style(Style::default().fg(Color::Magenta))
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded)),
    };
    f.render_widget(widget, area);
}
