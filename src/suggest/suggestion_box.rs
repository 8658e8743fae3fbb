//! The shared suggestion overlay
//!
//! One box per suggester. It is either hidden or showing candidates for
//! exactly one field.

use std::fmt;

use crate::location::LocationCandidate;

/// The two tracked location fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Origin,
    Destination,
}

impl FieldId {
    /// The other field
    pub fn other(self) -> Self {
        match self {
            FieldId::Origin => FieldId::Destination,
            FieldId::Destination => FieldId::Origin,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::Origin => write!(f, "Origin"),
            FieldId::Destination => write!(f, "Destination"),
        }
    }
}

/// Overlay state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxState {
    Hidden,
    Showing {
        field: FieldId,
        /// Normalized query the rows were produced for
        query_key: String,
        items: Vec<LocationCandidate>,
        selected: usize,
    },
}

#[derive(Debug, Clone)]
pub struct SuggestionBox {
    state: BoxState,
    /// Bumped on every show/hide that changes what is rendered
    revision: u64,
}

impl SuggestionBox {
    pub fn new() -> Self {
        Self {
            state: BoxState::Hidden,
            revision: 0,
        }
    }

    /// Show `items` for `field`, replacing whatever was shown before
    ///
    /// Empty `items` hides the box instead.
    pub fn show(&mut self, items: Vec<LocationCandidate>, field: FieldId, query_key: String) {
        if items.is_empty() {
            self.hide();
            return;
        }

        self.state = BoxState::Showing {
            field,
            query_key,
            items,
            selected: 0,
        };
        self.revision = self.revision.wrapping_add(1);
    }

    /// Clear contents and detach from the field; no-op when already hidden
    pub fn hide(&mut self) {
        if self.state == BoxState::Hidden {
            return;
        }
        self.state = BoxState::Hidden;
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn state(&self) -> &BoxState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, BoxState::Showing { .. })
    }

    /// Field the box is attached to, if showing
    pub fn field(&self) -> Option<FieldId> {
        match &self.state {
            BoxState::Showing { field, .. } => Some(*field),
            BoxState::Hidden => None,
        }
    }

    /// Whether the box is already showing results for this exact query
    pub fn is_showing_query(&self, field: FieldId, query_key: &str) -> bool {
        matches!(
            &self.state,
            BoxState::Showing { field: f, query_key: q, .. } if *f == field && q == query_key
        )
    }

    pub fn items(&self) -> &[LocationCandidate] {
        match &self.state {
            BoxState::Showing { items, .. } => items,
            BoxState::Hidden => &[],
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match &self.state {
            BoxState::Showing { selected, .. } => Some(*selected),
            BoxState::Hidden => None,
        }
    }

    pub fn selected(&self) -> Option<&LocationCandidate> {
        match &self.state {
            BoxState::Showing {
                items, selected, ..
            } => items.get(*selected),
            BoxState::Hidden => None,
        }
    }

    /// Move the highlight down, wrapping around
    pub fn select_next(&mut self) {
        if let BoxState::Showing {
            items, selected, ..
        } = &mut self.state
        {
            *selected = (*selected + 1) % items.len();
        }
    }

    /// Move the highlight up, wrapping around
    pub fn select_previous(&mut self) {
        if let BoxState::Showing {
            items, selected, ..
        } = &mut self.state
        {
            *selected = if *selected == 0 {
                items.len() - 1
            } else {
                *selected - 1
            };
        }
    }

    /// Highlight a row; out-of-range indices are ignored
    pub fn highlight(&mut self, index: usize) {
        if let BoxState::Showing {
            items, selected, ..
        } = &mut self.state
            && index < items.len()
        {
            *selected = index;
        }
    }

    /// Take the candidate at `index` and hide the box
    ///
    /// Returns the field it was shown for and the value to write into it.
    pub fn choose(&mut self, index: usize) -> Option<(FieldId, String)> {
        let BoxState::Showing { field, items, .. } = &self.state else {
            return None;
        };
        let chosen = (*field, items.get(index)?.value.clone());
        self.hide();
        Some(chosen)
    }
}

impl Default for SuggestionBox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "suggestion_box_tests.rs"]
mod suggestion_box_tests;
