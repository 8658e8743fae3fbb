//! Location suggester state
//!
//! Owns the debouncer, the request counter, the lookup channels and the
//! shared suggestion box. Everything here runs on the UI thread; the only
//! asynchronous step is the lookup itself, whose responses are polled.
//!
//! A response is applied only when its request id equals the most recently
//! dispatched id. Anything older is dropped, so the box always reflects the
//! latest dispatched query even when lookups resolve out of order.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use super::debouncer::Debouncer;
use super::suggestion_box::{FieldId, SuggestionBox};
use crate::config::SuggestConfig;
use crate::geocode::{LookupError, LookupRequest, LookupResponse};
use crate::location::{FallbackCatalog, LocationCandidate, dedupe, merge, normalize};

/// The lookup currently awaited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionSession {
    pub field: FieldId,
    pub query_text: String,
    pub normalized_query: String,
    pub request_id: u64,
}

pub struct SuggestState {
    config: SuggestConfig,
    catalog: FallbackCatalog,
    debouncer: Debouncer,
    /// Field whose input/focus event armed the debouncer
    pending_field: Option<FieldId>,
    /// Field that lost focus and when its grace period ends
    blur_deadline: Option<(FieldId, Instant)>,
    request_tx: Option<UnboundedSender<LookupRequest>>,
    response_rx: Option<Receiver<LookupResponse>>,
    /// Id of the most recently dispatched request, incremented per dispatch
    request_id: u64,
    session: Option<SuggestionSession>,
    suggestion_box: SuggestionBox,
}

impl SuggestState {
    pub fn new(config: SuggestConfig, catalog: FallbackCatalog) -> Self {
        let debouncer = Debouncer::new(config.debounce_ms);
        Self {
            config,
            catalog,
            debouncer,
            pending_field: None,
            blur_deadline: None,
            request_tx: None,
            response_rx: None,
            request_id: 0,
            session: None,
            suggestion_box: SuggestionBox::new(),
        }
    }

    /// Set the channel handles for communication with the lookup worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn suggestion_box(&self) -> &SuggestionBox {
        &self.suggestion_box
    }

    pub fn suggestion_box_mut(&mut self) -> &mut SuggestionBox {
        &mut self.suggestion_box
    }

    pub fn session(&self) -> Option<&SuggestionSession> {
        self.session.as_ref()
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn is_debounce_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Text changed in `field`
    pub fn on_input(&mut self, field: FieldId, now: Instant) {
        self.arm(field, now);
    }

    /// `field` gained focus
    ///
    /// Refocusing within the blur grace period keeps the box open.
    pub fn on_focus(&mut self, field: FieldId, now: Instant) {
        if matches!(self.blur_deadline, Some((f, _)) if f == field) {
            self.blur_deadline = None;
        }
        self.arm(field, now);
    }

    /// `field` lost focus; the box hides once the grace period ends
    pub fn on_blur(&mut self, field: FieldId, now: Instant) {
        let grace = Duration::from_millis(self.config.blur_grace_ms);
        self.blur_deadline = Some((field, now + grace));
        if self.pending_field == Some(field) {
            self.debouncer.cancel();
            self.pending_field = None;
        }
    }

    fn arm(&mut self, field: FieldId, now: Instant) {
        self.pending_field = Some(field);
        self.debouncer.schedule(now);
    }

    /// Field whose debounce period just settled, if any
    pub fn take_due_field(&mut self, now: Instant) -> Option<FieldId> {
        if self.debouncer.fire_if_due(now) {
            self.pending_field.take()
        } else {
            None
        }
    }

    /// Hide the box if a blur grace period has ended
    ///
    /// An expired grace period for a box that is already hidden, or that
    /// now belongs to another field, changes nothing.
    pub fn expire_blur(&mut self, now: Instant) -> bool {
        let Some((field, deadline)) = self.blur_deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.blur_deadline = None;

        if self.session.as_ref().is_some_and(|s| s.field == field) {
            self.supersede();
        }
        if self.suggestion_box.field() == Some(field) {
            self.suggestion_box.hide();
            return true;
        }
        false
    }

    /// Start a suggestion session for `field` with its current text
    ///
    /// Returns true if a lookup was dispatched. Repeating the query the box
    /// is already showing does nothing, unless a lookup for some other
    /// query is still in flight and would replace it.
    pub fn update_suggestions(&mut self, field: FieldId, text: &str) -> bool {
        let query_text = text.trim();
        let normalized_query = normalize(query_text);

        if self.session.is_none()
            && self.suggestion_box.is_showing_query(field, &normalized_query)
        {
            return false;
        }
        if self
            .session
            .as_ref()
            .is_some_and(|s| s.field == field && s.normalized_query == normalized_query)
        {
            return false;
        }

        if self.suggestion_box.field().is_some_and(|f| f != field) {
            self.suggestion_box.hide();
        }

        if query_text.chars().count() < self.config.min_query_chars {
            self.supersede();
            self.suggestion_box.hide();
            return false;
        }

        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;
        self.session = Some(SuggestionSession {
            field,
            query_text: query_text.to_string(),
            normalized_query,
            request_id,
        });

        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(LookupRequest {
                term: query_text.to_string(),
                request_id,
            })
            .is_ok()
        });

        if !sent {
            self.apply_response(LookupResponse {
                request_id,
                outcome: Err(LookupError::WorkerUnavailable),
            });
        }
        true
    }

    /// Drain lookup responses, applying the one for the current session
    ///
    /// Returns true if the box changed.
    pub fn poll_response(&mut self) -> bool {
        let mut changed = false;
        loop {
            let response = match self.response_rx.as_ref().map(|rx| rx.try_recv()) {
                Some(Ok(response)) => response,
                Some(Err(TryRecvError::Disconnected)) => {
                    log::debug!("Lookup worker disconnected");
                    self.response_rx = None;
                    self.request_tx = None;
                    if self.session.is_some() {
                        changed |= self.apply_response(LookupResponse {
                            request_id: self.request_id,
                            outcome: Err(LookupError::WorkerUnavailable),
                        });
                    }
                    break;
                }
                Some(Err(TryRecvError::Empty)) | None => break,
            };
            changed |= self.apply_response(response);
        }
        changed
    }

    /// Apply a response if it still belongs to the latest request
    pub fn apply_response(&mut self, response: LookupResponse) -> bool {
        if response.request_id != self.request_id {
            log::debug!(
                "Discarding stale lookup {} (current: {})",
                response.request_id,
                self.request_id
            );
            return false;
        }
        let Some(session) = self.session.take() else {
            return false;
        };

        let fallback_matches = self.catalog.matches(&session.normalized_query);
        let items = match response.outcome {
            Ok(live) if !live.is_empty() => {
                merge(fallback_matches, live, self.config.max_suggestions)
            }
            Ok(_) => self.fallback_items(fallback_matches),
            Err(e) => {
                log::debug!("Lookup {} failed, using catalog: {}", session.request_id, e);
                self.fallback_items(fallback_matches)
            }
        };

        let before = self.suggestion_box.revision();
        self.suggestion_box
            .show(items, session.field, session.normalized_query);
        self.suggestion_box.revision() != before
    }

    fn fallback_items(&self, fallback_matches: Vec<LocationCandidate>) -> Vec<LocationCandidate> {
        let items = if fallback_matches.is_empty() && self.config.show_full_catalog_on_miss {
            self.catalog.entries().to_vec()
        } else {
            fallback_matches
        };

        let mut unique = dedupe(items);
        unique.truncate(self.config.max_suggestions);
        unique
    }

    /// Invalidate the in-flight lookup without dispatching a new one
    fn supersede(&mut self) {
        if self.session.take().is_some() {
            self.request_id = self.request_id.wrapping_add(1);
        }
    }

    /// Apply the highlighted suggestion
    pub fn accept_selected(&mut self) -> Option<(FieldId, String)> {
        let index = self.suggestion_box.selected_index()?;
        self.accept(index)
    }

    /// Apply the suggestion at `index` (a click on that row)
    pub fn accept(&mut self, index: usize) -> Option<(FieldId, String)> {
        let chosen = self.suggestion_box.choose(index)?;
        self.supersede();
        Some(chosen)
    }

    /// Hide the box and forget any pending work
    pub fn dismiss(&mut self) {
        self.debouncer.cancel();
        self.pending_field = None;
        self.supersede();
        self.suggestion_box.hide();
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
