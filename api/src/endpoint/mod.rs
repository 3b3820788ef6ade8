/// Base URL of the public PokeAPI
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Entry points the Pokedex requests by id or query.
///
/// Everything else (species, abilities, moves, evolution chains, ...) is
/// reached through the URLs embedded in these responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// pokemon?offset=OFFSET&limit=LIMIT
    PokemonList { offset: usize, limit: usize },

    /// pokemon/ID_OR_NAME
    Pokemon(String),

    /// type/NAME
    Type(String),
}

impl Endpoint {
    /// Path relative to the API root
    pub fn to_path(&self) -> String {
        match self {
            Self::PokemonList { offset, limit } => {
                format!("pokemon?offset={}&limit={}", offset, limit)
            }
            Self::Pokemon(id) => format!("pokemon/{}", id),
            Self::Type(name) => format!("type/{}", name),
        }
    }

    /// Absolute URL against the given base (with or without trailing slash)
    pub fn url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.to_path())
    }
}

/// The creature record that shares an id with a species resource.
///
/// `.../pokemon-species/25/` becomes `.../pokemon/25/`.
pub fn pokemon_url_for_species(species_url: &str) -> String {
    species_url.replace("pokemon-species", "pokemon")
}
