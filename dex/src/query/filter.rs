//! Search and type filters

use crate::types::{SummaryEntry, Type};

/// Case-insensitive substring match on the display name
pub fn matches_search(entry: &SummaryEntry, search: &str) -> bool {
    search.is_empty() || entry.name.to_lowercase().contains(&search.to_lowercase())
}

/// Check that the entry carries every selected type (vacuously true when none are selected)
pub fn has_all_types(entry: &SummaryEntry, selected: &[Type]) -> bool {
    selected.iter().all(|t| entry.has_type(*t))
}

/// Entries matching both filters, in their original order
pub fn filter_summaries<'a>(
    summaries: &'a [SummaryEntry],
    search: &str,
    selected: &[Type],
) -> Vec<&'a SummaryEntry> {
    summaries
        .iter()
        .filter(|e| matches_search(e, search) && has_all_types(e, selected))
        .collect()
}
