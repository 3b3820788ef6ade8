use serde::Deserialize;

use super::common::NamedResource;

/// `GET pokemon/{id}`: battle attributes of one creature
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,

    /// Decimetres
    #[serde(default)]
    pub height: u32,

    /// Hectograms
    #[serde(default)]
    pub weight: u32,

    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,

    #[serde(default)]
    pub moves: Vec<PokemonMove>,

    #[serde(default)]
    pub stats: Vec<PokemonStat>,

    #[serde(default)]
    pub types: Vec<PokemonType>,

    #[serde(default)]
    pub sprites: PokemonSprites,

    pub species: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonAbility {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonType {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

/// Only the front sprites are used; both may be `null` for newer forms
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}
