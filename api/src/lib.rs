//! Data contracts for the PokeAPI REST resources the Pokedex reads.
//!
//! Every response is modelled as an explicit struct; fields the API may omit
//! or send as `null` are `Option`s rather than implicit coercions.

use thiserror::Error;

pub mod endpoint;
pub mod resource;

pub use endpoint::{Endpoint, POKEAPI_URL, pokemon_url_for_species};
pub use resource::{
    ApiResource, ChainLink, EvolutionChain, EvolutionDetail, LocalizedName, LocalizedResource,
    Localized, Move, NamedResource, Pokemon, PokemonAbility, PokemonMove, PokemonPage,
    PokemonSpecies, PokemonSprites, PokemonStat, PokemonType, TypeMember, TypeResource,
    VerboseEffect, resource_id,
};

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Invalid resource url: {0}")]
    InvalidResourceUrl(String),

    #[error("Missing id segment after /{kind}/ in {url}")]
    MissingId { kind: String, url: String },
}
