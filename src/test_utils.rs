#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Sender};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::UnboundedReceiver;

    use crate::app::App;
    use crate::config::{Config, SuggestConfig};
    use crate::geocode::{LookupRequest, LookupResponse};
    use crate::location::{FallbackCatalog, LocationCandidate};
    use crate::suggest::SuggestState;

    pub fn test_config() -> SuggestConfig {
        SuggestConfig::default()
    }

    /// Suggester with no lookup worker; every lookup degrades to the catalog
    pub fn state_with_config(config: SuggestConfig) -> SuggestState {
        SuggestState::new(config, FallbackCatalog::default())
    }

    /// Suggester wired to channels the test drives in place of the worker
    pub fn state_with_channels() -> (
        SuggestState,
        UnboundedReceiver<LookupRequest>,
        Sender<LookupResponse>,
    ) {
        state_with_channels_and_config(test_config())
    }

    pub fn state_with_channels_and_config(
        config: SuggestConfig,
    ) -> (
        SuggestState,
        UnboundedReceiver<LookupRequest>,
        Sender<LookupResponse>,
    ) {
        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();

        let mut state = state_with_config(config);
        state.set_channels(request_tx, response_rx);
        (state, request_rx, response_tx)
    }

    /// Live candidates from (value, label) pairs
    pub fn live(pairs: &[(&str, &str)]) -> Vec<LocationCandidate> {
        pairs
            .iter()
            .map(|(value, label)| LocationCandidate::new(*value, *label))
            .collect()
    }

    pub fn labels(candidates: &[LocationCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.label.as_str()).collect()
    }

    /// App with no lookup worker and empty fields
    pub fn test_app() -> App {
        App::new(&Config::default(), None)
    }

    /// App wired to test-driven lookup channels
    pub fn app_with_channels() -> (
        App,
        UnboundedReceiver<LookupRequest>,
        Sender<LookupResponse>,
    ) {
        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();

        let mut app = test_app();
        app.suggest.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
