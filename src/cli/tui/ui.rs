//! TUI rendering logic

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::cli::tui::app::App;
use crate::models::FocusedPane;
use crate::session::{DisplayKind, PayloadSource};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(35),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_port_selector(f, app, chunks[0]);
    render_payload(f, app, chunks[1]);
    render_buttons(f, app, chunks[2]);
    render_response(f, app, chunks[3]);
    render_help_bar(f, app, chunks[4]);

    if app.dropdown_open {
        render_port_dropdown(f, app, chunks[0]);
    }

    // Notices sit above everything else
    if app.has_notice() {
        render_notice(f, app);
    } else if app.show_help {
        render_help(f);
    }
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let block = Block::default().title(title).borders(Borders::ALL);
    if focused {
        block.border_style(Style::default().fg(Color::Cyan))
    } else {
        block
    }
}

fn render_port_selector(f: &mut Frame, app: &App, area: Rect) {
    let selector = &app.session.controls().selector;
    let focused = app.focused_pane == FocusedPane::PortSelector;

    let loading = if app.ports_loading { " 🔄" } else { "" };
    let title = format!("🔌 Port{}", loading);

    let label_style = if selector.selected().is_some() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let line = Line::from(vec![
        Span::styled(selector.selected_label().to_string(), label_style),
        Span::raw(" "),
        Span::styled("▼", Style::default().fg(Color::Cyan)),
    ]);

    f.render_widget(Paragraph::new(line).block(pane_block(title, focused)), area);
}

fn render_port_dropdown(f: &mut Frame, app: &App, anchor: Rect) {
    let selector = &app.session.controls().selector;

    let items: Vec<ListItem> = selector
        .options()
        .iter()
        .map(|option| {
            if option.is_placeholder() {
                ListItem::new(Span::styled(
                    option.label.clone(),
                    Style::default().fg(Color::Gray),
                ))
            } else {
                ListItem::new(option.label.clone())
            }
        })
        .collect();

    let height = u16::try_from(items.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let area = Rect {
        x: anchor.x + 1,
        y: anchor.y + anchor.height.saturating_sub(1),
        width: anchor.width.saturating_sub(2).min(48),
        height,
    }
    .intersection(f.area());

    f.render_widget(Clear, area);

    let title = if app.ports_loading {
        "Fetching ports..."
    } else {
        "Select a Port"
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    f.render_stateful_widget(list, area, &mut app.dropdown_state.clone());
}

fn render_payload(f: &mut Frame, app: &App, area: Rect) {
    let payload = &app.session.controls().payload;
    let focused = app.focused_pane == FocusedPane::Payload;

    let title = match app.session.source() {
        PayloadSource::Form => "📝 G-code".to_string(),
        PayloadSource::Literal { port, .. } => {
            format!("📝 G-code (literal test payload → {})", port)
        }
    };

    let mut lines: Vec<Line> = payload.text().split('\n').map(Line::from).collect();
    if focused && !payload.is_read_only() {
        // Cursor always sits at the end of the text
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
    }

    let style = if payload.is_read_only() {
        Style::default().fg(Color::Gray)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(lines)
        .style(style)
        .block(pane_block(title, focused))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_buttons(f: &mut Frame, app: &App, area: Rect) {
    let send_enabled = app.session.controls().send_button.is_enabled();

    let send = if send_enabled {
        Span::styled(
            " [ Send (Ctrl+S) ] ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            " [ Sending... ] ",
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        )
    };

    let release = Span::styled(
        " [ Release Port (Ctrl+R) ] ",
        Style::default().fg(Color::Black).bg(Color::Yellow),
    );

    let line = Line::from(vec![send, Span::raw("  "), release]);
    f.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_response(f: &mut Frame, app: &App, area: Rect) {
    let display = &app.session.controls().display;
    let focused = app.focused_pane == FocusedPane::Response;

    let title = match app.last_response_at {
        Some(at) => format!("📨 Response ({})", at.format("%H:%M:%S")),
        None => "📨 Response".to_string(),
    };

    let lines: Vec<Line> = match display.kind() {
        DisplayKind::Empty => vec![Line::from(Span::styled(
            "No response yet",
            Style::default().fg(Color::Gray),
        ))],
        DisplayKind::Response => {
            let mut lines = vec![Line::from(Span::styled(
                display.heading().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            lines.extend(display.body().lines().map(|l| Line::from(l.to_string())));
            lines
        }
        DisplayKind::Error => vec![Line::from(vec![
            Span::styled(
                display.heading().to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(display.body().to_string(), Style::default().fg(Color::Red)),
        ])],
    };

    let paragraph = Paragraph::new(lines)
        .block(pane_block(title, focused))
        .scroll((app.response_scroll, 0));

    f.render_widget(paragraph, area);
}

fn render_notice(f: &mut Frame, app: &App) {
    let Some(notice) = app.session.controls().current_notice() else {
        return;
    };

    let area = centered_rect(50, 20, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(notice.message.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] OK",
            Style::default().fg(Color::Cyan),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(notice.level.title())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(notice.level.color())),
        )
        .style(Style::default().bg(Color::Black))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);

    let mut help_text = vec![
        Line::from("📡 cncsend Help"),
        Line::from(""),
        Line::from("Tab/Shift+Tab   Switch pane"),
        Line::from("Enter/Space     Open port list (Port pane, refreshes ports)"),
        Line::from("↑/↓ or j/k      Move in port list / scroll response"),
        Line::from("Ctrl+S          Send payload to selected port"),
        Line::from("Ctrl+R          Release port"),
    ];
    #[cfg(feature = "lookup")]
    help_text.push(Line::from("Ctrl+L          Look up payload on legacy endpoint"));
    help_text.extend([
        Line::from("F1 or ?         Toggle this help"),
        Line::from("Esc/Ctrl+C      Quit"),
        Line::from(""),
        Line::from(format!(
            "Logs are written to {}",
            crate::utils::logging::log_dir().display()
        )),
    ]);

    let help_paragraph = Paragraph::new(help_text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default().bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(help_paragraph, area);
}

/// Helper function to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render the help bar at the bottom
fn render_help_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut help_text = match app.focused_pane {
        FocusedPane::PortSelector => vec![Span::styled(
            "[Enter]Choose Port ",
            Style::default().fg(Color::Cyan),
        )],
        FocusedPane::Payload => vec![Span::styled(
            "[Type]Edit G-code ",
            Style::default().fg(Color::Cyan),
        )],
        FocusedPane::Response => vec![Span::styled(
            "[↑↓]Scroll ",
            Style::default().fg(Color::Cyan),
        )],
    };

    help_text.extend(vec![
        Span::styled("[Tab]Switch Pane ", Style::default().fg(Color::White)),
        Span::styled("[Ctrl+S]Send ", Style::default().fg(Color::Green)),
        Span::styled("[Ctrl+R]Release ", Style::default().fg(Color::Yellow)),
        Span::styled("[F1]Help ", Style::default().fg(Color::Blue)),
        Span::styled("[Esc]Quit", Style::default().fg(Color::Red)),
    ]);

    let help_paragraph =
        Paragraph::new(Line::from(help_text)).block(Block::default().borders(Borders::ALL));

    f.render_widget(help_paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 20, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 8);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
    }
}
