//! PokeAPI response types
//!
//! Unknown fields are ignored, so each struct only names what the Pokedex
//! actually reads.

mod common;
mod evolution;
mod list;
mod moves;
mod pokemon;
mod species;

pub use common::{
    ApiResource, Localized, LocalizedName, LocalizedResource, NamedResource, VerboseEffect,
    resource_id,
};
pub use evolution::{ChainLink, EvolutionChain, EvolutionDetail};
pub use list::{PokemonPage, TypeMember, TypeResource};
pub use moves::Move;
pub use pokemon::{Pokemon, PokemonAbility, PokemonMove, PokemonSprites, PokemonStat, PokemonType};
pub use species::PokemonSpecies;
