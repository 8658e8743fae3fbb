use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use super::app_state::App;
use crate::suggest::FieldId;
use crate::suggest::suggest_render::row_at;

impl App {
    /// Handle a terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let box_open = self.suggest.suggestion_box().field() == Some(self.focus);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('s') if ctrl => self.swap_fields(),
            // Newline shortcuts would break the single-line fields
            KeyCode::Char('m') | KeyCode::Char('j') if ctrl => {}

            KeyCode::Esc => {
                if self.suggest.suggestion_box().is_visible() {
                    self.suggest.dismiss();
                } else {
                    self.should_quit = true;
                }
            }

            KeyCode::Tab | KeyCode::BackTab => self.focus_field(self.focus.other(), now),

            KeyCode::Down if box_open => self.suggest.suggestion_box_mut().select_next(),
            KeyCode::Up if box_open => self.suggest.suggestion_box_mut().select_previous(),

            KeyCode::Enter if box_open => {
                let choice = self.suggest.accept_selected();
                self.apply_choice(choice);
            }
            KeyCode::Enter => self.submit(),

            _ => {
                if self.field_mut(self.focus).input(key) {
                    self.status = None;
                    self.suggest.on_input(self.focus, now);
                }
            }
        }
    }

    /// Confirm the form if both fields are filled
    fn submit(&mut self) {
        let missing: Vec<String> = [FieldId::Origin, FieldId::Destination]
            .into_iter()
            .filter(|f| self.field_text(*f).trim().is_empty())
            .map(|f| f.to_string())
            .collect();

        if missing.is_empty() {
            self.submitted = true;
            self.should_quit = true;
        } else {
            self.status = Some(format!("{} required", missing.join(" and ")));
        }
    }

    /// Handle mouse clicks and hover
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row, now),
            MouseEventKind::Moved => self.hover(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn popup_row(&self, column: u16, row: u16) -> Option<usize> {
        let popup = self.layout.popup?;
        let count = self.suggest.suggestion_box().items().len();
        row_at(popup, self.layout.popup_offset, count, column, row)
    }

    fn click(&mut self, column: u16, row: u16, now: Instant) {
        let position = Position::new(column, row);
        let hit = |area: Rect| area.contains(position);

        // The popup overlays the fields below it
        if self.layout.popup.is_some_and(hit) {
            if let Some(index) = self.popup_row(column, row) {
                let choice = self.suggest.accept(index);
                self.apply_choice(choice);
            }
            return;
        }

        if hit(self.layout.origin) {
            self.focus_field(FieldId::Origin, now);
        } else if hit(self.layout.destination) {
            self.focus_field(FieldId::Destination, now);
        }
    }

    fn hover(&mut self, column: u16, row: u16) {
        if let Some(index) = self.popup_row(column, row) {
            self.suggest.suggestion_box_mut().highlight(index);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
