use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, FormLayout};
use crate::suggest::suggest_render;

const HINTS: &str = " Tab switch field · ↑↓ choose · Enter accept/search · Ctrl+S swap · Esc close/quit ";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Origin
            Constraint::Length(3), // Destination
            Constraint::Length(1), // Status
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .split(frame.area());

        let title = Paragraph::new(Line::from(Span::styled(
            " Where to? ",
            Style::default().fg(Color::Cyan),
        )));
        frame.render_widget(title, layout[0]);

        frame.render_widget(&self.origin, layout[1]);
        frame.render_widget(&self.destination, layout[2]);

        if let Some(status) = &self.status {
            let status_line = Paragraph::new(Span::styled(
                format!(" {}", status),
                Style::default().fg(Color::Yellow),
            ));
            frame.render_widget(status_line, layout[3]);
        }

        let hints = Paragraph::new(Span::styled(HINTS, Style::default().fg(Color::DarkGray)));
        frame.render_widget(hints, layout[5]);

        let mut regions = FormLayout {
            origin: layout[1],
            destination: layout[2],
            popup: None,
            popup_offset: 0,
        };

        // Popup last so it overlays whatever sits below the field
        if let Some(field) = self.suggest.suggestion_box().field() {
            let anchor = regions.field_area(field);
            let view = suggest_render::render_popup(
                self.suggest.suggestion_box(),
                frame,
                anchor,
                self.layout.popup_offset,
            );
            if let Some(view) = view {
                regions.popup = Some(view.area);
                regions.popup_offset = view.offset;
            }
        }

        self.layout = regions;
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
