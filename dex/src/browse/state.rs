//! BrowseState - what the list page has loaded and how it is filtered

use crate::query::filter_summaries;
use crate::types::{SummaryEntry, Type};

/// At most this many type filters can be active at once
pub const MAX_SELECTED_TYPES: usize = 2;

/// Page sizes for the unfiltered list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizes {
    /// Limit of the first page after mount or a filter change
    pub initial: usize,
    /// Limit of every `load_more` page
    pub more: usize,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            initial: 100,
            more: 100,
        }
    }
}

/// Where the list page is in its load cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not mounted yet
    Idle,
    /// First page of a view is in flight; summaries are empty
    LoadingInitial,
    Ready,
    /// Another page is in flight; summaries stay visible
    LoadingMore,
    /// Last request failed; summaries are whatever they were before it
    Error,
}

/// User-controlled filters and pagination cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    /// In selection order, never more than [`MAX_SELECTED_TYPES`]
    pub selected_types: Vec<Type>,
    pub offset: usize,
    pub has_more: bool,
    pub is_loading_more: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            selected_types: Vec::new(),
            offset: 0,
            has_more: true,
            is_loading_more: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Replaces the summaries
    Initial,
    /// Appends to the summaries
    More,
}

/// A fetch the state machine wants performed.
///
/// Hand the result back through [`BrowseState::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// View generation the request belongs to
    pub generation: u64,
    pub kind: PageKind,
    pub offset: usize,
    pub limit: usize,
    /// When non-empty, look up these types instead of paging the list
    pub types: Vec<Type>,
}

impl PageRequest {
    pub fn is_type_lookup(&self) -> bool {
        !self.types.is_empty()
    }
}

/// State of the browse page.
///
/// Mutated only through `&mut self`: user input (`toggle_type`,
/// `set_search`, `load_more`, ...) and fetch completion (`complete`).
/// Every change of the type selection starts a new view generation;
/// completions for older generations are dropped.
#[derive(Debug, Clone)]
pub struct BrowseState {
    pub(crate) phase: Phase,
    pub(crate) filter: FilterState,
    pub(crate) summaries: Vec<SummaryEntry>,
    pub(crate) generation: u64,
    pub(crate) pages: PageSizes,
    /// Most recently issued request, kept for `retry`
    pub(crate) last_request: Option<PageRequest>,
}

impl BrowseState {
    pub fn new(pages: PageSizes) -> Self {
        Self {
            phase: Phase::Idle,
            filter: FilterState::default(),
            summaries: Vec::new(),
            generation: 0,
            pages,
            last_request: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page_sizes(&self) -> PageSizes {
        self.pages
    }

    /// Everything loaded for the current view, in load order
    pub fn summaries(&self) -> &[SummaryEntry] {
        &self.summaries
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn search_text(&self) -> &str {
        &self.filter.search_text
    }

    pub fn selected_types(&self) -> &[Type] {
        &self.filter.selected_types
    }

    pub fn has_more(&self) -> bool {
        self.filter.has_more
    }

    /// The request currently in flight, if any
    pub fn pending_request(&self) -> Option<&PageRequest> {
        match self.phase {
            Phase::LoadingInitial | Phase::LoadingMore => self.last_request.as_ref(),
            _ => None,
        }
    }

    /// Summaries matching the search text and every selected type
    pub fn filtered(&self) -> Vec<&SummaryEntry> {
        filter_summaries(
            &self.summaries,
            &self.filter.search_text,
            &self.filter.selected_types,
        )
    }

    /// Whether a type button is enabled: selected types can always be
    /// toggled off, new ones only while there is room
    pub fn can_select(&self, t: Type) -> bool {
        self.filter.selected_types.contains(&t)
            || self.filter.selected_types.len() < MAX_SELECTED_TYPES
    }

    /// Nothing to show yet
    pub fn is_initial_loading(&self) -> bool {
        self.phase == Phase::LoadingInitial && self.summaries.is_empty()
    }

    /// Appending to a visible list
    pub fn is_loading_more(&self) -> bool {
        self.filter.is_loading_more
    }

    /// "fire und water", or "Keine ausgewählt" without a selection
    pub fn selection_label(&self) -> String {
        if self.filter.selected_types.is_empty() {
            return "Keine ausgewählt".to_string();
        }
        self.filter
            .selected_types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(" und ")
    }

    /// Message for a search that matched nothing
    pub fn no_results_message(&self) -> Option<String> {
        if self.filter.search_text.is_empty() || self.is_initial_loading() {
            return None;
        }
        if self.filtered().is_empty() {
            Some(format!(
                "Keine Ergebnisse für \"{}\"",
                self.filter.search_text
            ))
        } else {
            None
        }
    }
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new(PageSizes::default())
    }
}
