//! TUI application state

use chrono::{DateTime, Local};
use ratatui::widgets::ListState;
use tokio::sync::mpsc::UnboundedSender;

use crate::models::{AppEvent, FocusedPane};
use crate::session::PortSession;

/// Terminal UI state wrapped around a port session
pub struct App {
    pub session: PortSession,
    pub focused_pane: FocusedPane,
    pub dropdown_open: bool,
    pub dropdown_state: ListState,
    pub ports_loading: bool,
    pub response_scroll: u16,
    pub last_response_at: Option<DateTime<Local>>,
    pub show_help: bool,
}

impl App {
    pub fn new(session: PortSession) -> Self {
        Self {
            session,
            focused_pane: FocusedPane::PortSelector,
            dropdown_open: false,
            dropdown_state: ListState::default(),
            ports_loading: false,
            response_scroll: 0,
            last_response_at: None,
            show_help: false,
        }
    }

    pub fn toggle_focused_pane(&mut self) {
        self.focused_pane = self.focused_pane.next();
    }

    pub fn toggle_focused_pane_back(&mut self) {
        self.focused_pane = self.focused_pane.previous();
    }

    /// Open the port dropdown; opening it refreshes the port list
    pub fn open_port_dropdown(&mut self, tx: UnboundedSender<AppEvent>) {
        self.dropdown_open = true;
        self.dropdown_state
            .select(Some(self.session.controls().selector.selected_index()));
        self.start_port_refresh(tx);
    }

    pub fn close_port_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    pub fn start_port_refresh(&mut self, tx: UnboundedSender<AppEvent>) {
        self.ports_loading = true;
        let api = self.session.api();

        tokio::spawn(async move {
            let result = api.list_ports().await;
            let _ = tx.send(AppEvent::PortsFetched(result));
        });
    }

    pub fn handle_ports_fetched(&mut self, result: crate::Result<Vec<String>>) {
        self.ports_loading = false;
        let _ = self.session.finish_port_refresh(result);
        self.dropdown_state
            .select(Some(self.session.controls().selector.selected_index()));
    }

    pub fn dropdown_next(&mut self) {
        let len = self.session.controls().selector.options().len();
        if len == 0 {
            return;
        }
        let current = self.dropdown_state.selected().unwrap_or(0);
        self.dropdown_state.select(Some((current + 1) % len));
    }

    pub fn dropdown_previous(&mut self) {
        let len = self.session.controls().selector.options().len();
        if len == 0 {
            return;
        }
        let current = self.dropdown_state.selected().unwrap_or(0);
        let previous = if current == 0 { len - 1 } else { current - 1 };
        self.dropdown_state.select(Some(previous));
    }

    /// Select the highlighted dropdown entry and close the dropdown
    pub fn confirm_dropdown_selection(&mut self) {
        if let Some(index) = self.dropdown_state.selected() {
            self.session.controls_mut().selector.select_index(index);
        }
        self.dropdown_open = false;
    }

    /// Start a send unless the send button is disabled
    pub fn start_send(&mut self, tx: UnboundedSender<AppEvent>) {
        if !self.session.controls().send_button.is_enabled() {
            log::debug!("Send ignored: a send is already in flight");
            return;
        }

        // Validation failures queue a notice and leave nothing to run
        let Ok(request) = self.session.begin_send() else {
            return;
        };

        let api = self.session.api();
        tokio::spawn(async move {
            let result = api.send_text(&request).await;
            let _ = tx.send(AppEvent::SendFinished(result));
        });
    }

    pub fn handle_send_finished(&mut self, result: crate::Result<serde_json::Value>) {
        let _ = self.session.finish_send(result);
        self.response_scroll = 0;
        self.last_response_at = Some(Local::now());
    }

    pub fn start_release(&mut self, tx: UnboundedSender<AppEvent>) {
        let api = self.session.api();
        tokio::spawn(async move {
            let result = api.release_port().await;
            let _ = tx.send(AppEvent::ReleaseFinished(result));
        });
    }

    pub fn handle_release_finished(&mut self, result: crate::Result<serde_json::Value>) {
        let _ = self.session.finish_release(result);
    }

    /// Look up the current payload text on the legacy endpoint
    #[cfg(feature = "lookup")]
    pub fn start_lookup(&mut self, tx: UnboundedSender<AppEvent>) {
        let input = self.session.controls().payload.trimmed().to_string();
        let api = self.session.api();
        tokio::spawn(async move {
            let result = api.lookup_value(&input).await;
            let _ = tx.send(AppEvent::LookupFinished(result));
        });
    }

    #[cfg(feature = "lookup")]
    pub fn handle_lookup_finished(&mut self, result: crate::Result<crate::models::LookupResponse>) {
        let _ = self.session.finish_lookup(result);
        self.response_scroll = 0;
        self.last_response_at = Some(Local::now());
    }

    pub fn has_notice(&self) -> bool {
        self.session.controls().current_notice().is_some()
    }

    pub fn dismiss_notice(&mut self) {
        self.session.controls_mut().dismiss_notice();
    }

    pub fn input_char(&mut self, c: char) {
        self.session.controls_mut().payload.push_char(c);
    }

    pub fn input_backspace(&mut self) {
        self.session.controls_mut().payload.backspace();
    }

    pub fn scroll_response_up(&mut self) {
        self.response_scroll = self.response_scroll.saturating_sub(1);
    }

    pub fn scroll_response_down(&mut self) {
        let lines = self.session.controls().display.text().lines().count();
        let max = u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX);
        self.response_scroll = self.response_scroll.saturating_add(1).min(max);
    }
}
