//! TUI event loop and handling

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::cli::tui::app::App;
use crate::cli::tui::ui::ui;
use crate::models::{AppEvent, FocusedPane};

/// What the loop should do after a key press
#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Run the main TUI event loop
pub async fn run_tui_event_loop(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create event channel
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Spawn tick generator
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(250));
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|f| ui(f, &app)) {
            break Err(e.into());
        }

        tokio::select! {
            // Handle crossterm events
            _ = tokio::task::spawn_blocking(|| event::poll(Duration::from_millis(50))) => {
                match event::poll(Duration::from_millis(0)) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            if handle_key(&mut app, key, &tx) == KeyOutcome::Quit {
                                break Ok(());
                            }
                        }
                        Ok(_) => {}
                        Err(e) => break Err(e.into()),
                    },
                    Ok(false) => {}
                    Err(e) => break Err(e.into()),
                }
            }

            // Handle app events
            Some(event) = rx.recv() => {
                handle_app_event(&mut app, event);
            }
        }
    };

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Apply a finished background operation to the app
pub fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::PortsFetched(result) => app.handle_ports_fetched(result),
        AppEvent::SendFinished(result) => app.handle_send_finished(result),
        AppEvent::ReleaseFinished(result) => app.handle_release_finished(result),
        #[cfg(feature = "lookup")]
        AppEvent::LookupFinished(result) => app.handle_lookup_finished(result),
        AppEvent::Tick => {
            // Regular tick for UI updates
        }
    }
}

/// Handle one key press
pub fn handle_key(app: &mut App, key: KeyEvent, tx: &UnboundedSender<AppEvent>) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return KeyOutcome::Quit;
    }

    // Notices block everything else until acknowledged
    if app.has_notice() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_notice();
        }
        return KeyOutcome::Continue;
    }

    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('?')
        ) {
            app.show_help = false;
        }
        return KeyOutcome::Continue;
    }

    if app.dropdown_open {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.dropdown_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.dropdown_next(),
            KeyCode::Enter | KeyCode::Char(' ') => app.confirm_dropdown_selection(),
            KeyCode::Esc => app.close_port_dropdown(),
            _ => {}
        }
        return KeyOutcome::Continue;
    }

    match key.code {
        KeyCode::Char('s') if ctrl => app.start_send(tx.clone()),
        KeyCode::Char('r') if ctrl => app.start_release(tx.clone()),
        #[cfg(feature = "lookup")]
        KeyCode::Char('l') if ctrl => app.start_lookup(tx.clone()),
        KeyCode::Tab => app.toggle_focused_pane(),
        KeyCode::BackTab => app.toggle_focused_pane_back(),
        KeyCode::F(1) => app.show_help = true,
        KeyCode::Esc => return KeyOutcome::Quit,
        _ => match app.focused_pane {
            FocusedPane::PortSelector => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                    app.open_port_dropdown(tx.clone())
                }
                KeyCode::Char('q') => return KeyOutcome::Quit,
                KeyCode::Char('?') => app.show_help = true,
                _ => {}
            },
            FocusedPane::Payload => match key.code {
                KeyCode::Enter => app.input_char('\n'),
                KeyCode::Backspace => app.input_backspace(),
                KeyCode::Char(c) if !ctrl => app.input_char(c),
                _ => {}
            },
            FocusedPane::Response => match key.code {
                KeyCode::Up | KeyCode::Char('k') => app.scroll_response_up(),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_response_down(),
                KeyCode::PageUp => {
                    for _ in 0..10 {
                        app.scroll_response_up();
                    }
                }
                KeyCode::PageDown => {
                    for _ in 0..10 {
                        app.scroll_response_down();
                    }
                }
                KeyCode::Home => app.response_scroll = 0,
                KeyCode::Char('q') => return KeyOutcome::Quit,
                KeyCode::Char('?') => app.show_help = true,
                _ => {}
            },
        },
    }

    KeyOutcome::Continue
}
