//! Utility functions for rendering UI components

use ratatui::layout::Rect;

/// Rect of the given size centered in `area`, clipped to it.
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Shorten `s` to at most `max_width` characters, marking the cut with "...".
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let truncated: String = s.chars().take(max_width - 3).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_string("Queen", 10), "Queen");
        assert_eq!(truncate_string("Queen", 5), "Queen");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate_string("Queens of the Stone Age", 10), "Queens ...");
        assert_eq!(truncate_string("Queen", 2), "..");
        assert_eq!(truncate_string("Björk Guðmundsdóttir", 8), "Björk...");
    }

    #[test]
    fn popup_is_centered_and_clipped() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_popup(area, 50, 10), Rect::new(25, 15, 50, 10));
        assert_eq!(centered_popup(Rect::new(0, 0, 10, 4), 50, 10), Rect::new(0, 0, 10, 4));
    }
}
