//! Suggestion popup rendering
//!
//! Draws the suggestion box directly below the field it is attached to and
//! maps mouse positions back to rows.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthChar;

use super::SuggestionBox;
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_OFFSET_Y: u16 = 0;
/// Columns taken by the border and the "► " marker
const ROW_CHROME_WIDTH: u16 = 4;

/// Where the popup landed and which item sits in its first row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupView {
    pub area: Rect,
    pub offset: usize,
}

/// Render the suggestion popup below `anchor`
///
/// `offset` is the first visible item from the previous frame. When the
/// terminal is too short for every row the list scrolls so the highlighted
/// row stays visible. Returns None when the box is hidden.
pub fn render_popup(
    suggestion_box: &SuggestionBox,
    frame: &mut Frame,
    anchor: Rect,
    offset: usize,
) -> Option<PopupView> {
    let items = suggestion_box.items();
    if items.is_empty() {
        return None;
    }

    let popup_height = items.len() as u16 + POPUP_BORDER_HEIGHT;
    let popup_area = popup::popup_below_anchor(anchor, frame.area(), popup_height, POPUP_OFFSET_Y);
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let text_width = popup_area.width.saturating_sub(ROW_CHROME_WIDTH) as usize;
    let selected = suggestion_box.selected_index();

    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            let text = truncate_to_width(&candidate.label, text_width);
            let line = if Some(i) == selected {
                Line::from(Span::styled(
                    format!("► {}", text),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", text),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    let mut state = ListState::default()
        .with_offset(offset)
        .with_selected(selected);
    frame.render_stateful_widget(list, popup_area, &mut state);

    Some(PopupView {
        area: popup_area,
        offset: state.offset(),
    })
}

/// Item index under a screen position inside a rendered popup
///
/// `offset` is the first visible item, as returned by `render_popup`.
pub fn row_at(
    popup_area: Rect,
    offset: usize,
    item_count: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    let inner = Rect {
        x: popup_area.x + 1,
        y: popup_area.y + 1,
        width: popup_area.width.saturating_sub(2),
        height: popup_area.height.saturating_sub(POPUP_BORDER_HEIGHT),
    };

    let inside = column >= inner.x
        && column < inner.right()
        && row >= inner.y
        && row < inner.bottom();
    if !inside {
        return None;
    }

    let index = offset + (row - inner.y) as usize;
    (index < item_count).then_some(index)
}

/// Cut `text` to at most `max_width` display columns, marking cuts with "…"
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        result.push(c);
        width += w;
    }
    result.push('…');
    result
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
