mod debouncer;
mod suggest_state;
mod suggestion_box;
pub mod suggest_render;

pub use debouncer::Debouncer;
pub use suggest_state::{SuggestState, SuggestionSession};
pub use suggestion_box::{BoxState, FieldId, SuggestionBox};
