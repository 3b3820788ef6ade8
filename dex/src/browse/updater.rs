//! Transitions of the browse state machine

use std::fmt::Display;

use super::state::{BrowseState, MAX_SELECTED_TYPES, PageKind, PageRequest, Phase};
use crate::types::{SummaryEntry, Type};

impl BrowseState {
    /// Start the first load of the page
    pub fn mount(&mut self) -> PageRequest {
        self.begin_initial()
    }

    /// Update the search text; filtering is local, so nothing is fetched
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
    }

    /// Toggle a type filter.
    ///
    /// A selected type is removed; a new type is added only while fewer than
    /// [`MAX_SELECTED_TYPES`] are selected and is silently ignored otherwise.
    /// Returns the reload request when the selection changed.
    pub fn toggle_type(&mut self, t: Type) -> Option<PageRequest> {
        let selected = &mut self.filter.selected_types;

        if let Some(pos) = selected.iter().position(|s| *s == t) {
            selected.remove(pos);
        } else if selected.len() < MAX_SELECTED_TYPES {
            selected.push(t);
        } else {
            tracing::debug!(
                rejected = %t,
                selected = ?selected,
                "Type selection full, ignoring"
            );
            return None;
        }

        Some(self.begin_initial())
    }

    /// Clear the type selection and reload from the start.
    ///
    /// Returns `None` when that reload is already pending, so repeated calls
    /// leave the state unchanged.
    pub fn reset_types(&mut self) -> Option<PageRequest> {
        if self.filter.selected_types.is_empty() && self.phase == Phase::LoadingInitial {
            return None;
        }

        self.filter.selected_types.clear();
        Some(self.begin_initial())
    }

    /// Request the next page of the unfiltered list.
    ///
    /// No-op unless the last load finished and more pages exist.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if self.phase != Phase::Ready || !self.filter.has_more {
            return None;
        }

        self.filter.offset += if self.filter.offset == 0 {
            self.pages.initial
        } else {
            self.pages.more
        };
        self.filter.is_loading_more = true;
        self.phase = Phase::LoadingMore;

        let request = PageRequest {
            generation: self.generation,
            kind: PageKind::More,
            offset: self.filter.offset,
            limit: self.pages.more,
            types: Vec::new(),
        };
        self.last_request = Some(request.clone());
        Some(request)
    }

    /// Re-issue the request that failed
    pub fn retry(&mut self) -> Option<PageRequest> {
        if self.phase != Phase::Error {
            return None;
        }

        let request = self.last_request.clone()?;
        match request.kind {
            PageKind::Initial => {
                self.phase = Phase::LoadingInitial;
            }
            PageKind::More => {
                self.phase = Phase::LoadingMore;
                self.filter.is_loading_more = true;
            }
        }
        Some(request)
    }

    /// Feed back the outcome of a request.
    ///
    /// Returns `false` if the result was dropped because the view moved on
    /// (different generation, or nothing was pending).
    pub fn complete<E: Display>(
        &mut self,
        request: &PageRequest,
        result: Result<Vec<SummaryEntry>, E>,
    ) -> bool {
        if request.generation != self.generation || self.pending_request() != Some(request) {
            tracing::debug!(
                request_generation = request.generation,
                current_generation = self.generation,
                offset = request.offset,
                "Dropping stale page result"
            );
            return false;
        }

        self.filter.is_loading_more = false;

        match result {
            Ok(page) => {
                if request.is_type_lookup() || page.len() < request.limit {
                    self.filter.has_more = false;
                }

                match request.kind {
                    PageKind::Initial => self.summaries = page,
                    PageKind::More => self.summaries.extend(page),
                }
                self.phase = Phase::Ready;
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    offset = request.offset,
                    types = ?request.types,
                    "Failed to load Pokemon page"
                );
                self.phase = Phase::Error;
            }
        }

        true
    }

    /// Reset pagination for the current selection and open a new generation
    fn begin_initial(&mut self) -> PageRequest {
        self.generation += 1;
        self.filter.offset = 0;
        self.filter.has_more = true;
        self.filter.is_loading_more = false;
        self.summaries.clear();
        self.phase = Phase::LoadingInitial;

        let request = PageRequest {
            generation: self.generation,
            kind: PageKind::Initial,
            offset: 0,
            limit: self.pages.initial,
            types: self.filter.selected_types.clone(),
        };
        self.last_request = Some(request.clone());
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::PageSizes;

    fn page(start: u32, len: u32) -> Vec<SummaryEntry> {
        (start..start + len)
            .map(|id| SummaryEntry::new(id, format!("Pokemon {}", id), vec![Type::Normal]))
            .collect()
    }

    fn ready_state() -> BrowseState {
        let mut state = BrowseState::default();
        let request = state.mount();
        assert!(state.complete::<String>(&request, Ok(page(1, 100))));
        state
    }

    #[test]
    fn test_mount_requests_first_page() {
        let mut state = BrowseState::default();
        let request = state.mount();

        assert_eq!(state.phase(), Phase::LoadingInitial);
        assert_eq!(request.kind, PageKind::Initial);
        assert_eq!(request.offset, 0);
        assert_eq!(request.limit, 100);
        assert!(!request.is_type_lookup());
        assert_eq!(state.pending_request(), Some(&request));
    }

    #[test]
    fn test_full_then_short_page() {
        let mut state = BrowseState::default();
        let first = state.mount();
        state.complete::<String>(&first, Ok(page(1, 100)));

        assert_eq!(state.phase(), Phase::Ready);
        assert!(state.has_more());
        assert_eq!(state.summaries().len(), 100);

        let second = state.load_more().unwrap();
        assert_eq!(second.offset, 100);
        assert_eq!(second.kind, PageKind::More);
        assert_eq!(state.phase(), Phase::LoadingMore);
        assert!(state.is_loading_more());

        state.complete::<String>(&second, Ok(page(101, 42)));

        assert_eq!(state.phase(), Phase::Ready);
        assert!(!state.has_more());
        assert!(!state.is_loading_more());
        assert_eq!(state.summaries().len(), 142);
        assert_eq!(state.summaries()[100].id, 101);
    }

    #[test]
    fn test_load_more_is_noop_unless_ready_with_more() {
        let mut state = BrowseState::default();
        assert!(state.load_more().is_none());

        let request = state.mount();
        assert!(state.load_more().is_none());

        state.complete::<String>(&request, Ok(page(1, 10)));
        assert!(!state.has_more());
        assert!(state.load_more().is_none());
    }

    #[test]
    fn test_load_more_uses_configured_step() {
        let mut state = BrowseState::new(PageSizes {
            initial: 100,
            more: 250,
        });
        let first = state.mount();
        state.complete::<String>(&first, Ok(page(1, 100)));

        let next = state.load_more().unwrap();
        assert_eq!(next.offset, 100);
        assert_eq!(next.limit, 250);

        state.complete::<String>(&next, Ok(page(101, 250)));
        let next = state.load_more().unwrap();
        assert_eq!(next.offset, 350);
    }

    #[test]
    fn test_type_selection_caps_at_two() {
        let mut state = ready_state();

        assert!(state.toggle_type(Type::Fire).is_some());
        assert!(state.toggle_type(Type::Water).is_some());
        let generation = state.generation();

        assert!(state.toggle_type(Type::Grass).is_none());
        assert_eq!(state.selected_types(), &[Type::Fire, Type::Water]);
        assert_eq!(state.generation(), generation);
        assert!(!state.can_select(Type::Grass));
    }

    #[test]
    fn test_toggle_removes_selected_type() {
        let mut state = ready_state();
        state.toggle_type(Type::Fire);
        state.toggle_type(Type::Water);

        let request = state.toggle_type(Type::Fire).unwrap();
        assert_eq!(state.selected_types(), &[Type::Water]);
        assert_eq!(request.types, vec![Type::Water]);
    }

    #[test]
    fn test_selection_never_exceeds_two() {
        let mut state = ready_state();
        for round in 0..3 {
            for (i, t) in Type::all().iter().enumerate() {
                if (i + round) % 3 != 0 {
                    state.toggle_type(*t);
                }
                assert!(state.selected_types().len() <= MAX_SELECTED_TYPES);
            }
        }
    }

    #[test]
    fn test_type_change_resets_view() {
        let mut state = ready_state();
        let next = state.load_more().unwrap();
        state.complete::<String>(&next, Ok(page(101, 100)));
        assert_eq!(state.filter().offset, 100);

        state.set_search("pika");
        let request = state.toggle_type(Type::Electric).unwrap();

        assert_eq!(state.phase(), Phase::LoadingInitial);
        assert!(state.summaries().is_empty());
        assert_eq!(state.filter().offset, 0);
        assert!(state.has_more());
        assert_eq!(state.search_text(), "pika");
        assert!(request.is_type_lookup());
    }

    #[test]
    fn test_type_lookup_never_has_more() {
        let mut state = ready_state();
        let request = state.toggle_type(Type::Fire).unwrap();

        state.complete::<String>(&request, Ok(page(1, 200)));

        assert!(!state.has_more());
        assert!(state.load_more().is_none());
    }

    #[test]
    fn test_reset_types_is_idempotent() {
        let mut state = ready_state();
        state.toggle_type(Type::Fire);

        let request = state.reset_types();
        assert!(request.is_some());
        let once = (state.phase(), state.filter().clone(), state.generation());

        assert!(state.reset_types().is_none());
        let twice = (state.phase(), state.filter().clone(), state.generation());

        assert_eq!(once, twice);
        assert!(state.selected_types().is_empty());
        assert!(state.has_more());
    }

    #[test]
    fn test_reset_types_reloads_from_ready() {
        let mut state = ready_state();
        let request = state.reset_types().unwrap();

        assert_eq!(request.offset, 0);
        assert_eq!(state.phase(), Phase::LoadingInitial);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut state = BrowseState::default();
        let old = state.mount();
        let current = state.toggle_type(Type::Water).unwrap();

        assert!(!state.complete::<String>(&old, Ok(page(1, 100))));
        assert_eq!(state.phase(), Phase::LoadingInitial);
        assert!(state.summaries().is_empty());

        assert!(state.complete::<String>(&current, Ok(page(7, 3))));
        assert_eq!(state.summaries().len(), 3);
    }

    #[test]
    fn test_failure_keeps_existing_summaries() {
        let mut state = ready_state();
        let next = state.load_more().unwrap();

        assert!(state.complete(&next, Err("HTTP 500")));

        assert_eq!(state.phase(), Phase::Error);
        assert_eq!(state.summaries().len(), 100);
        assert!(!state.is_loading_more());
        assert!(state.load_more().is_none());
    }

    #[test]
    fn test_retry_reissues_failed_request() {
        let mut state = ready_state();
        let next = state.load_more().unwrap();
        state.complete(&next, Err("timeout"));

        let again = state.retry().unwrap();
        assert_eq!(again, next);
        assert_eq!(state.phase(), Phase::LoadingMore);

        state.complete::<String>(&again, Ok(page(101, 5)));
        assert_eq!(state.summaries().len(), 105);
        assert!(state.retry().is_none());
    }

    #[test]
    fn test_filtered_follows_search_and_types() {
        let mut state = BrowseState::default();
        let request = state.mount();
        state.complete::<String>(
            &request,
            Ok(vec![
                SummaryEntry::new(25, "Pikachu", vec![Type::Electric]),
                SummaryEntry::new(26, "Raichu", vec![Type::Electric]),
                SummaryEntry::new(6, "Glurak", vec![Type::Fire, Type::Flying]),
            ]),
        );

        state.set_search("pika");
        let filtered = state.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Pikachu");

        state.set_search("");
        assert_eq!(state.filtered().len(), 3);
    }
}
