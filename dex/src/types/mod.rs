//! Domain types for the Pokedex views

mod evolution;
mod pokemon_type;
mod records;
mod stats;

pub use evolution::{
    ConditionLookup, EvolutionBranch, EvolutionCondition, EvolutionStage, TimeOfDay,
};
pub use pokemon_type::{TYPE_COLORS, Type};
pub use records::{
    AbilityRef, DetailRecord, MOVE_DISPLAY_LIMIT, MoveDetail, NOT_APPLICABLE, Sprites,
    SummaryEntry, TypeRef,
};
pub use stats::{StatEntry, base_stat_total};
