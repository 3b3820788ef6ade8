//! List / filter / pagination state for the browse page

mod state;
mod updater;

pub use state::{
    BrowseState, FilterState, MAX_SELECTED_TYPES, PageKind, PageRequest, PageSizes, Phase,
};
