//! Summary loading for the browse list

use std::collections::HashSet;

use futures_util::future::try_join_all;
use futures_util::stream::{self, StreamExt, TryStreamExt};
use pokedex_api::{Endpoint, NamedResource, Pokemon, PokemonPage, PokemonSpecies, TypeResource};
use pokedex_core::{PageRequest, SummaryEntry, Type, resolve_name};

use crate::details::type_refs;
use crate::error::{AggregationError, Stage, StageContext};
use crate::{CancelToken, Fetch, PokedexClient};

impl<F: Fetch> PokedexClient<F> {
    /// Resolve one page request of the browse state machine into summaries.
    ///
    /// Without selected types this pages the creature list; with selected
    /// types it loads the union of the types' members. Either way every
    /// entry is resolved, in order, and one failure fails the page.
    pub async fn load_page(
        &self,
        request: &PageRequest,
        cancel: &CancelToken,
    ) -> Result<Vec<SummaryEntry>, AggregationError> {
        let references = if request.is_type_lookup() {
            let types = self.type_members(&request.types, cancel).await?;
            union_members(&types)
        } else {
            self.list_page(request.offset, request.limit, cancel)
                .await?
                .results
        };

        tracing::debug!(
            generation = request.generation,
            offset = request.offset,
            entries = references.len(),
            "Resolving summaries"
        );

        stream::iter(&references)
            .map(|reference| self.resolve_summary(reference, cancel))
            .buffered(self.config().fan_out())
            .try_collect()
            .await
    }

    pub async fn list_page(
        &self,
        offset: usize,
        limit: usize,
        cancel: &CancelToken,
    ) -> Result<PokemonPage, AggregationError> {
        let url = self.endpoint_url(&Endpoint::PokemonList { offset, limit });
        self.fetch(&url, cancel)
            .await
            .stage(Stage::PokemonList, format!("offset {}", offset))
    }

    /// Member lists of every type, fetched concurrently, in selection order
    pub async fn type_members(
        &self,
        types: &[Type],
        cancel: &CancelToken,
    ) -> Result<Vec<TypeResource>, AggregationError> {
        try_join_all(types.iter().map(|t| async move {
            let url = self.endpoint_url(&Endpoint::Type(t.as_str().to_string()));
            self.fetch::<TypeResource>(&url, cancel)
                .await
                .stage(Stage::TypeMembers, t)
        }))
        .await
    }

    /// A list entry: the creature plus its localized species name
    pub async fn resolve_summary(
        &self,
        reference: &NamedResource,
        cancel: &CancelToken,
    ) -> Result<SummaryEntry, AggregationError> {
        let pokemon: Pokemon = self
            .fetch(&reference.url, cancel)
            .await
            .stage(Stage::Pokemon, &reference.name)?;
        let species: PokemonSpecies = self
            .fetch(&pokemon.species.url, cancel)
            .await
            .stage(Stage::Species, &reference.name)?;

        let types = type_refs(&pokemon.types).into_iter().map(|t| t.kind).collect();
        let name = resolve_name(&species.names, &pokemon.name);
        let mut entry = SummaryEntry::new(pokemon.id, name, types);
        entry.sprite_url = pokemon.sprites.front_default;
        Ok(entry)
    }
}

/// Members of several types, in type order, each creature once.
///
/// Creatures are identified by resource URL; the first occurrence wins.
pub fn union_members(types: &[TypeResource]) -> Vec<NamedResource> {
    let mut seen = HashSet::new();
    types
        .iter()
        .flat_map(|t| t.members())
        .filter(|member| seen.insert(member.url.as_str()))
        .cloned()
        .collect()
}
