use serde::Deserialize;

use super::common::{ApiResource, LocalizedName};

/// `GET pokemon-species/{id}`: family metadata shared by all forms
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,

    #[serde(default)]
    pub names: Vec<LocalizedName>,

    #[serde(default)]
    pub capture_rate: u32,

    /// Missing for a handful of event-only species
    pub evolution_chain: Option<ApiResource>,
}
