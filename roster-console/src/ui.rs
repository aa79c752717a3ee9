//! Rendering

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, EmployeeForm, FIELD_LABELS, Mode};
use crate::format::format_salary;

const LABEL_WIDTH: u16 = 10;

pub fn ui(f: &mut Frame, app: &App) {
    let form_height = if matches!(app.mode, Mode::Browse) { 0 } else { 6 };
    let banner_height = if app.error.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(banner_height), // Error banner
            Constraint::Min(5),                // Table
            Constraint::Length(form_height),   // Add / edit form
            Constraint::Length(1),             // Key help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    if let Some(error) = &app.error {
        render_banner(f, error, chunks[1]);
    }
    render_table(f, app, chunks[2]);
    match &app.mode {
        Mode::Adding(form) => render_form(f, " Add Employee ", form, chunks[3]),
        Mode::Editing { id, form } => {
            render_form(f, &format!(" Edit Employee #{id} "), form, chunks[3])
        }
        Mode::Browse => {}
    }
    render_help(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let status = if app.loading {
        Span::styled(
            " Loading... ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!(" {} employees ", app.employees.len()),
            Style::default().fg(Color::Green),
        )
    };

    let title = Paragraph::new(Line::from(vec![
        Span::raw(" 📇 Manage Employees "),
        Span::raw(" | "),
        status,
        Span::raw(" | "),
        Span::styled(app.base_url.as_str(), Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn render_banner(f: &mut Frame, error: &str, area: Rect) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(error, Style::default().fg(Color::White)),
        Span::styled("  (x to dismiss)", Style::default().fg(Color::Gray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Error "),
    )
    .wrap(Wrap { trim: true });
    f.render_widget(banner, area);
}

fn render_table(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Employees ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    if app.employees.is_empty() {
        let text = if app.loading { "" } else { "No employees found" };
        let empty = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let editing = match &app.mode {
        Mode::Editing { id, form } => Some((*id, form)),
        _ => None,
    };

    let rows: Vec<Row> = app
        .employees
        .iter()
        .map(|e| match editing {
            // The row under edit shows the edit buffer
            Some((id, form)) if id == e.id => Row::new(vec![
                e.id.to_string(),
                form.value(0).to_string(),
                form.value(1).to_string(),
                form.value(2).to_string(),
                form.value(3).to_string(),
            ])
            .style(Style::default().fg(Color::Yellow)),
            _ => Row::new(vec![
                e.id.to_string(),
                e.name.clone(),
                e.email.clone(),
                e.position.clone(),
                format_salary(e.salary),
            ]),
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(24),
        Constraint::Percentage(32),
        Constraint::Percentage(24),
        Constraint::Min(12),
    ];

    let header = Row::new(vec!["ID", "Name", "Email", "Position", "Salary"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(table, area, &mut state);
}

fn render_form(f: &mut Frame, title: &str, form: &EmployeeForm, area: Rect) {
    let lines: Vec<Line> = FIELD_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == form.focus {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", format!("{label}:"), width = LABEL_WIDTH as usize),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(form.value(i), style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(paragraph, area);

    let cursor_x = area.x + 1 + LABEL_WIDTH + form.focused().visual_cursor() as u16;
    let cursor_y = area.y + 1 + form.focus as u16;
    f.set_cursor_position((cursor_x, cursor_y));
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help = match app.mode {
        Mode::Browse => "↑/↓ select  a add  e edit  d delete  r refresh  x dismiss  q quit",
        Mode::Adding(_) => "Tab next field  Enter add  Esc cancel",
        Mode::Editing { .. } => "Tab next field  Enter save  Esc cancel",
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
