//! TUI-specific data models

use ratatui::style::Color;

use crate::session::NoticeLevel;

/// Which pane is currently focused in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    PortSelector,
    Payload,
    Response,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::PortSelector => FocusedPane::Payload,
            FocusedPane::Payload => FocusedPane::Response,
            FocusedPane::Response => FocusedPane::PortSelector,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FocusedPane::PortSelector => FocusedPane::Response,
            FocusedPane::Payload => FocusedPane::PortSelector,
            FocusedPane::Response => FocusedPane::Payload,
        }
    }
}

impl NoticeLevel {
    pub fn color(&self) -> Color {
        match self {
            NoticeLevel::Info => Color::Green,
            NoticeLevel::Warning => Color::Yellow,
            NoticeLevel::Error => Color::Red,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "✅ Notice",
            NoticeLevel::Warning => "⚠️  Warning",
            NoticeLevel::Error => "❌ Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        let start = FocusedPane::PortSelector;
        assert_eq!(start.next().next().next(), start);
        assert_eq!(start.previous(), FocusedPane::Response);
        assert_eq!(start.next().previous(), start);
    }
}
