//! Overlay rendering (error notification)

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::Theme;
use super::utils::centered_popup;

const POPUP_WIDTH: u16 = 52;

pub fn render_error_notification(frame: &mut Frame, message: &str, theme: &Theme) {
    let area = frame.area();

    let popup_width = POPUP_WIDTH.min(area.width.saturating_sub(4));
    let inner_width = popup_width.saturating_sub(4).max(1) as usize;

    // Lines the message needs once wrapped, plus top and bottom border
    let line_count = message.chars().count().div_ceil(inner_width).max(1) as u16;
    let popup_height = (line_count + 2).min(area.height.saturating_sub(4));

    let popup_area = centered_popup(area, popup_width, popup_height);
    if popup_area.is_empty() {
        return;
    }

    frame.render_widget(Clear, popup_area);

    let error_widget = Paragraph::new(message)
        .style(theme.error)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.error)
                .title(" Error (Esc to dismiss) ")
                .title_style(theme.error.add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(error_widget, popup_area);
}
