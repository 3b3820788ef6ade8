//! Async PokeAPI client for the Pokedex.
//!
//! [`PokedexClient`] turns the many dependent PokeAPI calls behind a list or
//! detail page into the records of `pokedex-core`; [`Browser`] drives the
//! list page's state machine with it.
//!
//! ```ignore
//! use pokedex_client::{CancelToken, PokedexClient};
//!
//! let client = PokedexClient::new()?;
//! let pikachu = client.get_details("25", &CancelToken::new()).await?;
//! println!("{}: {} BST", pikachu.name, pikachu.base_stat_total);
//! ```

mod browser;
mod cancel;
mod config;
mod details;
mod error;
mod evolution;
mod fetcher;
mod list;

#[cfg(test)]
mod testing;

use serde::de::DeserializeOwned;

pub use browser::Browser;
pub use cancel::CancelToken;
pub use config::ClientConfig;
pub use error::{AggregationError, FetchError, Stage};
pub use fetcher::{Fetch, HttpFetcher};
pub use list::union_members;

pub use pokedex_api::{Endpoint, POKEAPI_URL};
pub use pokedex_core::{
    BrowseState, DetailRecord, EvolutionStage, PageRequest, PageSizes, Phase, SummaryEntry, Type,
};

/// PokeAPI client over any [`Fetch`] implementation
pub struct PokedexClient<F = HttpFetcher> {
    fetcher: F,
    config: ClientConfig,
}

impl PokedexClient<HttpFetcher> {
    /// Client for the public PokeAPI with default settings
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self { fetcher, config })
    }
}

impl<F: Fetch> PokedexClient<F> {
    pub fn with_fetcher(fetcher: F, config: ClientConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch a URL and validate it against a data contract.
    ///
    /// Checks `cancel` before sending and races it against the response.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        cancel: &CancelToken,
    ) -> Result<T, FetchError> {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled {
                url: url.to_string(),
            });
        }

        let value = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(FetchError::Cancelled { url: url.to_string() });
            }
            result = self.fetcher.fetch_json(url) => result?,
        };

        serde_json::from_value(value).map_err(|source| FetchError::Parse {
            url: url.to_string(),
            source,
        })
    }

    pub(crate) fn endpoint_url(&self, endpoint: &Endpoint) -> String {
        endpoint.url(&self.config.base_url)
    }
}
