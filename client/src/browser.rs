//! Async driver for the browse list

use pokedex_core::{BrowseState, PageKind, PageRequest, Phase, Type};

use crate::{CancelToken, Fetch, HttpFetcher, PokedexClient};

/// Runs the browse state machine against a [`PokedexClient`].
///
/// Every user operation updates the state, performs the page request it
/// produced (if any) and feeds the outcome back. Each view generation gets
/// its own [`CancelToken`]; starting a new one cancels the previous.
pub struct Browser<F: Fetch = HttpFetcher> {
    client: PokedexClient<F>,
    state: BrowseState,
    cancel: CancelToken,
}

impl<F: Fetch> Browser<F> {
    pub fn new(client: PokedexClient<F>) -> Self {
        let state = BrowseState::new(client.config().pages);
        Self {
            client,
            state,
            cancel: CancelToken::new(),
        }
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub fn client(&self) -> &PokedexClient<F> {
        &self.client
    }

    /// Token of the current view; cancelling it aborts that view's fetches
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub async fn mount(&mut self) -> Phase {
        let request = self.state.mount();
        self.run(request).await
    }

    /// Local filter only; never fetches
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.state.set_search(text);
    }

    pub async fn toggle_type(&mut self, t: Type) -> Phase {
        match self.state.toggle_type(t) {
            Some(request) => self.run(request).await,
            None => self.state.phase(),
        }
    }

    pub async fn reset_types(&mut self) -> Phase {
        match self.state.reset_types() {
            Some(request) => self.run(request).await,
            None => self.state.phase(),
        }
    }

    pub async fn load_more(&mut self) -> Phase {
        match self.state.load_more() {
            Some(request) => self.run(request).await,
            None => self.state.phase(),
        }
    }

    pub async fn retry(&mut self) -> Phase {
        match self.state.retry() {
            Some(request) => self.run(request).await,
            None => self.state.phase(),
        }
    }

    async fn run(&mut self, request: PageRequest) -> Phase {
        let cancel = self.token_for(&request);
        let result = self.client.load_page(&request, &cancel).await;

        if matches!(&result, Err(e) if e.is_cancelled()) {
            tracing::debug!(generation = request.generation, "Page load cancelled");
        }

        self.state.complete(&request, result);
        self.state.phase()
    }

    /// A fresh token for a new view (or after the current one was
    /// cancelled); the current one otherwise
    fn token_for(&mut self, request: &PageRequest) -> CancelToken {
        if request.kind == PageKind::Initial || self.cancel.is_cancelled() {
            self.cancel.cancel();
            self.cancel = CancelToken::new();
        }
        self.cancel.clone()
    }
}

impl<F: Fetch> Drop for Browser<F> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::ClientConfig;
    use crate::testing::{BASE, FixtureFetcher, named, url};
    use pokedex_core::PageSizes;

    const SMALL_PAGES: PageSizes = PageSizes { initial: 3, more: 3 };

    fn list_json(ids: std::ops::RangeInclusive<u32>) -> Value {
        let results: Vec<Value> = ids
            .map(|id| named("pokemon", id, &format!("mon-{}", id)))
            .collect();
        json!({ "count": 5, "next": null, "previous": null, "results": results })
    }

    fn browser(fixture: FixtureFetcher) -> Browser<FixtureFetcher> {
        let config = ClientConfig::default()
            .with_base_url(BASE)
            .with_page_sizes(SMALL_PAGES);
        Browser::new(PokedexClient::with_fetcher(fixture, config))
    }

    fn five_creatures() -> FixtureFetcher {
        let mut fixture = FixtureFetcher::new();
        for id in 1..=5 {
            let t = if id % 2 == 0 { "water" } else { "fire" };
            fixture.add_creature(id, &format!("mon-{}", id), None, &[t]);
        }
        fixture.insert(url("pokemon?offset=0&limit=3"), list_json(1..=3));
        fixture.insert(url("pokemon?offset=3&limit=3"), list_json(4..=5));
        fixture
    }

    #[tokio::test]
    async fn test_full_page_then_short_page() {
        let mut browser = browser(five_creatures());

        assert_eq!(browser.mount().await, Phase::Ready);
        assert_eq!(browser.state().summaries().len(), 3);
        assert!(browser.state().has_more());

        assert_eq!(browser.load_more().await, Phase::Ready);
        assert_eq!(browser.state().summaries().len(), 5);
        assert!(!browser.state().has_more());

        // Nothing left to load
        assert_eq!(browser.load_more().await, Phase::Ready);
        assert_eq!(
            browser.client().fetcher().call_count(&url("pokemon?offset=3&limit=3")),
            1
        );
    }

    #[tokio::test]
    async fn test_type_filter_replaces_summaries() {
        let mut fixture = five_creatures();
        fixture.insert(
            url("type/water"),
            json!({
                "id": 11,
                "name": "water",
                "names": [],
                "pokemon": [
                    { "slot": 1, "pokemon": named("pokemon", 2, "mon-2") },
                    { "slot": 1, "pokemon": named("pokemon", 4, "mon-4") }
                ]
            }),
        );
        let mut browser = browser(fixture);
        browser.mount().await;
        browser.set_search("mon-4");

        assert_eq!(browser.toggle_type(Type::Water).await, Phase::Ready);
        assert_eq!(browser.state().summaries().len(), 2);
        assert!(!browser.state().has_more());
        assert_eq!(browser.state().search_text(), "mon-4");
        assert_eq!(browser.state().filtered().len(), 1);

        assert_eq!(browser.reset_types().await, Phase::Ready);
        assert_eq!(browser.state().summaries().len(), 3);
        assert!(browser.state().selected_types().is_empty());
    }

    #[tokio::test]
    async fn test_new_view_cancels_previous_token() {
        let mut browser = browser(five_creatures());
        browser.mount().await;
        let first = browser.cancel_token().clone();

        browser.reset_types().await;

        assert!(first.is_cancelled());
        assert!(!browser.cancel_token().is_cancelled());
    }

    #[tokio::test]
    async fn test_failed_load_and_retry() {
        let mut fixture = FixtureFetcher::new();
        fixture.fail(url("pokemon?offset=0&limit=3"), 502);
        let mut browser = browser(fixture);

        assert_eq!(browser.mount().await, Phase::Error);
        assert!(browser.state().summaries().is_empty());

        assert_eq!(browser.retry().await, Phase::Error);
        assert_eq!(
            browser.client().fetcher().call_count(&url("pokemon?offset=0&limit=3")),
            2
        );
    }

    #[tokio::test]
    async fn test_load_more_after_cancel_uses_fresh_token() {
        let mut browser = browser(five_creatures());
        browser.mount().await;

        browser.cancel_token().cancel();
        assert_eq!(browser.load_more().await, Phase::Ready);
        assert_eq!(browser.state().summaries().len(), 5);
    }
}
