use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use serde_json::json;
use tui_textarea::{CursorMove, TextArea};

use crate::config::Config;
use crate::location::FallbackCatalog;
use crate::suggest::{FieldId, SuggestState};

/// Screen regions from the last render, for mouse hit-testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormLayout {
    pub origin: Rect,
    pub destination: Rect,
    pub popup: Option<Rect>,
    /// First suggestion visible in the popup
    pub popup_offset: usize,
}

impl FormLayout {
    pub fn field_area(&self, field: FieldId) -> Rect {
        match field {
            FieldId::Origin => self.origin,
            FieldId::Destination => self.destination,
        }
    }
}

/// Application state
pub struct App {
    pub origin: TextArea<'static>,
    pub destination: TextArea<'static>,
    pub focus: FieldId,
    pub suggest: SuggestState,
    pub layout: FormLayout,
    /// One-line message under the form (config warnings, validation)
    pub status: Option<String>,
    pub should_quit: bool,
    /// Set when the form was confirmed rather than abandoned
    pub submitted: bool,
}

/// Single-line location input
fn location_textarea(field: FieldId, text: &str, focused: bool) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_block(field_block(field, focused));
    textarea.move_cursor(CursorMove::End);
    textarea
}

pub fn field_block(field: FieldId, focused: bool) -> Block<'static> {
    let border_color = if focused {
        Color::Cyan // Focused
    } else {
        Color::DarkGray // Unfocused
    };

    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", field))
        .border_style(Style::default().fg(border_color))
}

impl App {
    /// Create a new App; `warning` is shown in the status line
    pub fn new(config: &Config, warning: Option<String>) -> Self {
        let catalog = FallbackCatalog::new(config.catalog.cities.iter().cloned());

        Self {
            origin: location_textarea(FieldId::Origin, "", true),
            destination: location_textarea(FieldId::Destination, "", false),
            focus: FieldId::Origin,
            suggest: SuggestState::new(config.suggest.clone(), catalog),
            layout: FormLayout::default(),
            status: warning,
            should_quit: false,
            submitted: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn field(&self, field: FieldId) -> &TextArea<'static> {
        match field {
            FieldId::Origin => &self.origin,
            FieldId::Destination => &self.destination,
        }
    }

    pub fn field_mut(&mut self, field: FieldId) -> &mut TextArea<'static> {
        match field {
            FieldId::Origin => &mut self.origin,
            FieldId::Destination => &mut self.destination,
        }
    }

    /// Current text of a field
    pub fn field_text(&self, field: FieldId) -> &str {
        self.field(field)
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Replace a field's text without raising an input event
    pub fn set_field_text(&mut self, field: FieldId, text: &str) {
        let focused = self.focus == field;
        *self.field_mut(field) = location_textarea(field, text, focused);
    }

    /// Move focus to `field`: blur the old field, focus the new one
    pub fn focus_field(&mut self, field: FieldId, now: Instant) {
        if self.focus == field {
            return;
        }
        let previous = self.focus;
        self.suggest.on_blur(previous, now);
        self.focus = field;
        self.origin
            .set_block(field_block(FieldId::Origin, field == FieldId::Origin));
        self.destination
            .set_block(field_block(FieldId::Destination, field == FieldId::Destination));
        self.suggest.on_focus(field, now);
    }

    /// Exchange origin and destination
    pub fn swap_fields(&mut self) {
        let origin = self.field_text(FieldId::Origin).to_string();
        let destination = self.field_text(FieldId::Destination).to_string();
        self.set_field_text(FieldId::Origin, &destination);
        self.set_field_text(FieldId::Destination, &origin);
        self.suggest.dismiss();
    }

    /// Apply a chosen suggestion value to its field
    pub fn apply_choice(&mut self, choice: Option<(FieldId, String)>) -> bool {
        match choice {
            Some((field, value)) => {
                self.set_field_text(field, &value);
                true
            }
            None => false,
        }
    }

    /// Advance timers and apply lookup responses
    ///
    /// Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(field) = self.suggest.take_due_field(now) {
            let text = self.field_text(field).to_string();
            self.suggest.update_suggestions(field, &text);
            changed = true;
        }

        changed |= self.suggest.poll_response();
        changed |= self.suggest.expire_blur(now);
        changed
    }

    /// Search payload printed when the form is confirmed
    pub fn search_payload(&self) -> serde_json::Value {
        json!({
            "origin": self.field_text(FieldId::Origin).trim(),
            "destination": self.field_text(FieldId::Destination).trim(),
        })
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
