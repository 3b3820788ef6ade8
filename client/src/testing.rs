//! In-memory PokeAPI fixture for aggregation tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::{ClientConfig, Fetch, FetchError, PokedexClient};

pub(crate) const BASE: &str = "https://pokeapi.test/api/v2";

pub(crate) fn url(path: &str) -> String {
    format!("{}/{}", BASE, path)
}

/// Serves canned JSON by exact URL; unknown URLs are 404s
#[derive(Default)]
pub(crate) struct FixtureFetcher {
    responses: HashMap<String, Value>,
    statuses: HashMap<String, u16>,
    calls: Mutex<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url: impl Into<String>, value: Value) {
        self.responses.insert(url.into(), value);
    }

    /// Answer `url` with a non-success status
    pub fn fail(&mut self, url: impl Into<String>, status: u16) {
        self.statuses.insert(url.into(), status);
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }

    /// A creature, its species record, and both URL spellings of the creature
    pub fn add_creature(&mut self, id: u32, name: &str, german: Option<&str>, types: &[&str]) {
        let pokemon = pokemon_json(id, name, types);
        self.insert(url(&format!("pokemon/{}", id)), pokemon.clone());
        self.insert(url(&format!("pokemon/{}/", id)), pokemon);
        self.insert(
            url(&format!("pokemon-species/{}/", id)),
            species_json(id, name, german, id),
        );
    }

    /// Point a species at an evolution chain
    pub fn set_chain(&mut self, species_id: u32, chain_id: u32, root: Value) {
        let species_url = url(&format!("pokemon-species/{}/", species_id));
        if let Some(species) = self.responses.get_mut(&species_url) {
            let chain_url = url(&format!("evolution-chain/{}/", chain_id));
            species["evolution_chain"] = json!({ "url": chain_url });
        }
        self.insert(
            url(&format!("evolution-chain/{}/", chain_id)),
            json!({ "id": chain_id, "chain": root }),
        );
    }

    /// A resource with only a name and translations (item, location, type, ability)
    pub fn add_named(&mut self, path: &str, name: &str, german: Option<&str>) {
        let english = json!({ "name": name.to_uppercase(), "language": { "name": "en", "url": "" } });
        let mut names = vec![english];
        if let Some(german) = german {
            names.push(json!({ "name": german, "language": { "name": "de", "url": "" } }));
        }
        self.insert(url(path), json!({ "id": 1, "name": name, "names": names }));
    }
}

#[async_trait]
impl Fetch for FixtureFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        if let Some(status) = self.statuses.get(url) {
            return Err(FetchError::Network {
                url: url.to_string(),
                status: *status,
            });
        }

        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                url: url.to_string(),
            })
    }
}

pub(crate) fn client(fetcher: FixtureFetcher) -> PokedexClient<FixtureFetcher> {
    PokedexClient::with_fetcher(fetcher, ClientConfig::default().with_base_url(BASE))
}

pub(crate) fn named(kind: &str, id: u32, name: &str) -> Value {
    json!({ "name": name, "url": url(&format!("{}/{}/", kind, id)) })
}

pub(crate) fn pokemon_json(id: u32, name: &str, types: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({ "slot": i + 1, "type": { "name": t, "url": "" } }))
        .collect();

    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "abilities": [],
        "moves": [],
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 49, "effort": 1, "stat": { "name": "attack", "url": "" } }
        ],
        "types": types,
        "sprites": {
            "front_default": format!("https://img.test/{}.png", id),
            "front_shiny": format!("https://img.test/shiny/{}.png", id)
        },
        "species": named("pokemon-species", id, name)
    })
}

pub(crate) fn species_json(id: u32, name: &str, german: Option<&str>, chain_id: u32) -> Value {
    let mut names = vec![json!({ "name": name, "language": { "name": "en", "url": "" } })];
    if let Some(german) = german {
        names.push(json!({ "name": german, "language": { "name": "de", "url": "" } }));
    }

    json!({
        "id": id,
        "name": name,
        "names": names,
        "capture_rate": 45,
        "evolution_chain": { "url": url(&format!("evolution-chain/{}/", chain_id)) }
    })
}

/// An evolution chain node; `detail` is its first evolution detail (or null)
pub(crate) fn link(id: u32, name: &str, detail: Value, children: Vec<Value>) -> Value {
    let details = if detail.is_null() { vec![] } else { vec![detail] };
    json!({
        "species": named("pokemon-species", id, name),
        "evolution_details": details,
        "evolves_to": children
    })
}

pub(crate) fn level_detail(level: u32) -> Value {
    json!({
        "min_level": level,
        "item": null,
        "trigger": { "name": "level-up", "url": "" },
        "time_of_day": "",
        "known_move_type": null,
        "location": null,
        "min_happiness": null
    })
}
