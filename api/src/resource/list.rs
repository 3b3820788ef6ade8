use serde::Deserialize;

use super::common::{LocalizedName, NamedResource};

/// `GET pokemon?offset&limit`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonPage {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// `GET type/{name}`: every creature carrying the type
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeResource {
    pub id: u32,
    pub name: String,

    #[serde(default)]
    pub names: Vec<LocalizedName>,

    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeMember {
    #[serde(default)]
    pub slot: u8,
    pub pokemon: NamedResource,
}

impl TypeResource {
    /// Member references in API order
    pub fn members(&self) -> impl Iterator<Item = &NamedResource> {
        self.pokemon.iter().map(|m| &m.pokemon)
    }
}
