use std::time::Duration;

use pokedex_api::POKEAPI_URL;
use pokedex_core::PageSizes;

/// Settings for [`PokedexClient`](crate::PokedexClient)
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API root, without the resource path
    pub base_url: String,
    pub pages: PageSizes,
    /// Upper bound on concurrent fetches per fan-out (moves, abilities, list entries)
    pub max_in_flight: usize,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            pages: PageSizes::default(),
            max_in_flight: 16,
            request_timeout: None,
            user_agent: concat!("pokedex-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_page_sizes(mut self, pages: PageSizes) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }

    /// Concurrency of each fan-out; never zero, whatever `max_in_flight` holds
    pub fn fan_out(&self) -> usize {
        self.max_in_flight.max(1)
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}
