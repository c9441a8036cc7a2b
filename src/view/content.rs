//! Main content rendering (search input, category list, results table)

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{
        Block, Borders, Cell, HighlightSpacing, List, ListItem, ListState, Padding, Paragraph, Row,
        Table, TableState,
    },
    Frame,
};

use crate::model::{AppModel, Category, ColumnSpec, SearchResults};
use super::theme::Theme;
use super::utils::truncate_string;

const INPUT_HEIGHT: u16 = 3;
const PLACEHOLDER: &str = "Search...";

pub fn render_search_input(frame: &mut Frame, area: Rect, model: &AppModel, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)])
        .split(area);

    let input = model.input();
    let text = if input.is_empty() {
        Span::styled(PLACEHOLDER, theme.placeholder)
    } else {
        Span::styled(input, theme.input)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .title_style(theme.title)
        .padding(Padding::horizontal(1))
        .border_style(theme.focused_border);
    let inner = block.inner(chunks[0]);

    // Keep the end of long queries in view
    let typed = input.chars().count() as u16;
    let scroll = typed.saturating_sub(inner.width.saturating_sub(1));
    let paragraph = Paragraph::new(Line::from(text)).block(block).scroll((0, scroll));
    frame.render_widget(paragraph, chunks[0]);

    if inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(Position::new(inner.x + typed - scroll, inner.y));
    }
}

pub fn render_category_list(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    model: &AppModel,
    theme: &Theme,
) {
    let items: Vec<ListItem> = Category::ALL
        .iter()
        .map(|category| {
            ListItem::new(vec![
                Line::from(Span::styled(category.title(), theme.item_title)),
                Line::from(Span::styled(category.description(), theme.item_description)),
            ])
        })
        .collect();

    let title = format!(
        " Search type for \"{}\" ",
        truncate_string(query, area.width.saturating_sub(24) as usize)
    );

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_style(theme.title)
                .padding(Padding::horizontal(1))
                .border_style(theme.focused_border),
        )
        .highlight_style(theme.selected)
        .highlight_symbol("│ ")
        .highlight_spacing(HighlightSpacing::Always);

    let mut list_state = ListState::default();
    list_state.select(Some(model.category_selected()));

    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn render_results_table(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    results: &SearchResults,
    selected_index: usize,
    theme: &Theme,
) {
    let columns = results.columns();
    let widths: Vec<Constraint> = columns.iter().map(column_constraint).collect();
    let header = Row::new(columns.iter().map(|c| Cell::from(c.title)))
        .style(theme.table_header)
        .bottom_margin(1);

    let title = format!(
        " Search results for \"{}\" · {} · {} of {} ",
        truncate_string(query, area.width.saturating_sub(40) as usize),
        results.category(),
        results.len(),
        results.total,
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(theme.title)
        .border_style(theme.border);

    if results.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);
        let table = Table::new(Vec::<Row>::new(), widths).header(header);
        frame.render_widget(table, chunks[0]);
        frame.render_widget(Paragraph::new("No results").style(theme.muted), chunks[1]);
        return;
    }

    let rows = results
        .rows()
        .into_iter()
        .map(|cells| Row::new(cells.into_iter().map(Cell::from)));

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.selected)
        .highlight_symbol("> ")
        .highlight_spacing(HighlightSpacing::Always);

    let mut table_state = TableState::default();
    table_state.select(Some(selected_index));

    frame.render_stateful_widget(table, area, &mut table_state);
}

fn column_constraint(column: &ColumnSpec) -> Constraint {
    match column.width {
        Some(width) => Constraint::Length(width),
        None => Constraint::Fill(1),
    }
}
