//! Colors and styles used by the renderers

use ratatui::style::{Color, Modifier, Style};

/// Styles for every widget, built once and handed to the renderers.
#[derive(Clone, Debug)]
pub struct Theme {
    pub border: Style,
    pub focused_border: Style,
    pub title: Style,
    pub input: Style,
    pub placeholder: Style,
    pub item_title: Style,
    pub item_description: Style,
    pub selected: Style,
    pub table_header: Style,
    pub help_key: Style,
    pub help_description: Style,
    pub error: Style,
    pub muted: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Indexed(240)),
            focused_border: Style::default().fg(Color::Green),
            title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            input: Style::default().fg(Color::Green),
            placeholder: Style::default().fg(Color::DarkGray),
            item_title: Style::default().fg(Color::White),
            item_description: Style::default().fg(Color::DarkGray),
            selected: Style::default()
                .fg(Color::Indexed(229))
                .bg(Color::Indexed(57)),
            table_header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            help_key: Style::default().fg(Color::Gray),
            help_description: Style::default().fg(Color::DarkGray),
            error: Style::default().fg(Color::Red),
            muted: Style::default().fg(Color::DarkGray),
        }
    }
}
