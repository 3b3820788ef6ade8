//! Query helpers for the list view
//!
//! Pure filtering over already-loaded summaries; nothing here touches the
//! network.

mod filter;

pub use filter::{filter_summaries, has_all_types, matches_search};
