//! Help line shown beneath every screen

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::ViewKind;
use super::theme::Theme;

const SEPARATOR: &str = " • ";

/// Key bindings that do something on the given screen, as (key, action).
pub fn help_bindings(view: ViewKind) -> &'static [(&'static str, &'static str)] {
    match view {
        ViewKind::Search => &[
            ("ctrl+r", "reset"),
            ("ctrl+c", "quit"),
            ("enter", "submit"),
        ],
        ViewKind::CategorySelect => &[
            ("↑/↓", "move"),
            ("enter", "search"),
            ("backspace", "back"),
            ("ctrl+c", "quit"),
        ],
        ViewKind::Results => &[
            ("↑/↓", "move"),
            ("enter", "open"),
            ("backspace", "back"),
            ("ctrl+c", "quit"),
        ],
    }
}

pub fn render_help_line(frame: &mut Frame, area: Rect, view: ViewKind, theme: &Theme) {
    let mut spans = Vec::new();
    for (i, (key, action)) in help_bindings(view).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, theme.help_description));
        }
        spans.push(Span::styled(*key, theme.help_key));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*action, theme.help_description));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
