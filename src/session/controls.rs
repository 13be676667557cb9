//! UI controls manipulated by the port session
//!
//! These are plain state holders. Rendering surfaces (the TUI, the CLI
//! printer) read them; only [`PortSession`](super::PortSession) writes them
//! in response to operation results.

use std::collections::VecDeque;

use serde_json::Value;

use crate::models::pretty_json;

pub const SELECT_PORT_LABEL: &str = "Select a Port";
pub const NO_PORTS_LABEL: &str = "No Ports Found";
pub const FETCH_ERROR_LABEL: &str = "Error Fetching Ports";

/// One entry of the port selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortOption {
    pub value: String,
    pub label: String,
}

impl PortOption {
    /// Entry with an empty value, never a selectable port
    pub fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }

    pub fn port(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// Port dropdown: the option list plus the current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSelector {
    options: Vec<PortOption>,
    value: String,
}

impl Default for PortSelector {
    fn default() -> Self {
        Self {
            options: vec![PortOption::placeholder(SELECT_PORT_LABEL)],
            value: String::new(),
        }
    }
}

impl PortSelector {
    /// Selector preset to a single known port, without a port listing
    pub fn with_port(port: &str) -> Self {
        let mut selector = Self::default();
        let port = port.trim();
        if !port.is_empty() {
            selector.options.push(PortOption::port(port));
            selector.value = port.to_string();
        }
        selector
    }

    pub fn options(&self) -> &[PortOption] {
        &self.options
    }

    pub fn values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.label.as_str()).collect()
    }

    /// Raw selector value, empty when nothing is selected
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Selected port, if any
    pub fn selected(&self) -> Option<&str> {
        if self.value.is_empty() {
            None
        } else {
            Some(&self.value)
        }
    }

    /// Label shown for the current value
    pub fn selected_label(&self) -> &str {
        self.options
            .get(self.selected_index())
            .map(|o| o.label.as_str())
            .unwrap_or(SELECT_PORT_LABEL)
    }

    /// Index of the option matching the current value
    pub fn selected_index(&self) -> usize {
        self.options
            .iter()
            .position(|o| o.value == self.value)
            .unwrap_or(0)
    }

    /// Select an option by value. Unknown values clear the selection.
    pub fn select(&mut self, value: &str) -> bool {
        if self.options.iter().any(|o| o.value == value) {
            self.value = value.to_string();
            !value.is_empty()
        } else {
            self.value.clear();
            false
        }
    }

    /// Select an option by position. Placeholders clear the selection.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.options.get(index) {
            Some(option) => {
                self.value = option.value.clone();
                !option.is_placeholder()
            }
            None => false,
        }
    }

    /// Rebuild the option list from a fresh port listing.
    ///
    /// The placeholder always comes first. The previous value survives only
    /// if the new listing still contains it.
    pub fn replace_ports(&mut self, ports: &[String]) {
        let previous = std::mem::take(&mut self.value);

        self.options.clear();
        self.options.push(PortOption::placeholder(SELECT_PORT_LABEL));

        if ports.is_empty() {
            self.options.push(PortOption::placeholder(NO_PORTS_LABEL));
        } else {
            self.options
                .extend(ports.iter().map(|port| PortOption::port(port)));
        }

        if ports.contains(&previous) {
            self.value = previous;
        }
    }

    /// Replace the option list after a failed listing
    pub fn show_fetch_error(&mut self) {
        self.options = vec![PortOption::placeholder(FETCH_ERROR_LABEL)];
        self.value.clear();
    }
}

/// Payload text entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadInput {
    text: String,
    read_only: bool,
}

impl PayloadInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            read_only: false,
        }
    }

    /// Fixed payload that the user cannot edit
    pub fn read_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            read_only: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Payload as it is sent
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        if !self.read_only {
            self.text = text.into();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if !self.read_only {
            self.text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.read_only {
            self.text.pop();
        }
    }

    pub fn clear(&mut self) {
        if !self.read_only {
            self.text.clear();
        }
    }
}

/// Enabled state of the send button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendAffordance {
    enabled: bool,
}

impl Default for SendAffordance {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SendAffordance {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Idempotent: enabling twice leaves it enabled
    pub fn enable(&mut self) {
        self.enabled = true;
    }
}

/// What the response display currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Empty,
    Response,
    Error,
}

/// Response display area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDisplay {
    kind: DisplayKind,
    heading: String,
    body: String,
}

impl Default for ResponseDisplay {
    fn default() -> Self {
        Self {
            kind: DisplayKind::Empty,
            heading: String::new(),
            body: String::new(),
        }
    }
}

impl ResponseDisplay {
    pub fn kind(&self) -> DisplayKind {
        self.kind
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Heading and body as one block of text
    pub fn text(&self) -> String {
        match (self.heading.is_empty(), self.body.is_empty()) {
            (true, _) => self.body.clone(),
            (false, true) => self.heading.clone(),
            (false, false) => format!("{}\n{}", self.heading, self.body),
        }
    }

    /// Show a full server response, pretty-printed
    pub fn show_response(&mut self, value: &Value) {
        self.kind = DisplayKind::Response;
        self.heading = "Server Response:".to_string();
        self.body = pretty_json(value);
    }

    /// Show labeled result lines
    pub fn show_lines(&mut self, heading: &str, lines: &[String]) {
        self.kind = DisplayKind::Response;
        self.heading = heading.to_string();
        self.body = lines.join("\n");
    }

    pub fn show_error(&mut self, message: &str) {
        self.kind = DisplayKind::Error;
        self.heading = "Error:".to_string();
        self.body = message.to_string();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Blocking message the user has to acknowledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// All controls a session drives, handed to it at construction
#[derive(Debug, Clone, Default)]
pub struct SessionControls {
    pub selector: PortSelector,
    pub payload: PayloadInput,
    pub send_button: SendAffordance,
    pub display: ResponseDisplay,
    notices: VecDeque<Notice>,
}

impl SessionControls {
    pub fn new(selector: PortSelector, payload: PayloadInput) -> Self {
        Self {
            selector,
            payload,
            ..Self::default()
        }
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    /// Notice currently shown, oldest first
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    /// Acknowledge the current notice
    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }

    /// Remove and return every pending notice
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }
}
