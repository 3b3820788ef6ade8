//! Pokedex domain records, German localization and the browse state machine.
//!
//! # Overview
//!
//! `pokedex-core` sits between `pokedex-api` (wire contracts) and the async
//! client that performs the fetches:
//!
//! ```text
//! pokedex-api (serde contracts)
//!        │
//!        ▼
//! pokedex-core (records + localization + browse state) ← THIS CRATE
//!        │
//!        └─> pokedex-client (fetching, aggregation, evolution walk)
//! ```
//!
//! Nothing in this crate performs I/O. The browse state machine hands out
//! [`PageRequest`]s and is told about their outcome; filtering is a pure
//! function of the loaded summaries.
//!
//! # Main Types
//!
//! - [`Type`] - the 18 type tags with their badge colors
//! - [`SummaryEntry`] - list-view projection
//! - [`DetailRecord`] - fully aggregated detail page
//! - [`EvolutionStage`] / [`EvolutionCondition`] - walked evolution chain
//! - [`BrowseState`] - list / filter / pagination state
//!
//! # Example Usage
//!
//! ```
//! use pokedex_core::{BrowseState, SummaryEntry, Type};
//!
//! let mut state = BrowseState::default();
//! let request = state.mount();
//!
//! // ... fetch the page described by `request` ...
//! let page = vec![SummaryEntry::new(25, "Pikachu", vec![Type::Electric])];
//! state.complete::<String>(&request, Ok(page));
//!
//! state.set_search("pika");
//! assert_eq!(state.filtered().len(), 1);
//! ```

pub mod browse;
pub mod locale;
pub mod query;
pub mod types;

pub use browse::{
    BrowseState, FilterState, MAX_SELECTED_TYPES, PageKind, PageRequest, PageSizes, Phase,
};
pub use locale::{TARGET_LOCALE, resolve_effect, resolve_name};
pub use types::{
    AbilityRef, ConditionLookup, DetailRecord, EvolutionBranch, EvolutionCondition,
    EvolutionStage, MOVE_DISPLAY_LIMIT, MoveDetail, NOT_APPLICABLE, Sprites, StatEntry,
    SummaryEntry, TYPE_COLORS, TimeOfDay, Type, TypeRef, base_stat_total,
};
