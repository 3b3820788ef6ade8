//! Detail page aggregation

use futures_util::stream::{self, StreamExt, TryStreamExt};
use futures_util::try_join;
use pokedex_api::{
    Endpoint, EvolutionChain, LocalizedResource, Move, Pokemon, PokemonAbility, PokemonMove,
    PokemonSpecies, PokemonType,
};
use pokedex_core::{
    AbilityRef, DetailRecord, EvolutionStage, MoveDetail, Sprites, StatEntry, Type, TypeRef,
    base_stat_total, resolve_effect, resolve_name,
};

use crate::error::{AggregationError, Stage, StageContext};
use crate::{CancelToken, Fetch, PokedexClient};

impl<F: Fetch> PokedexClient<F> {
    /// Everything the detail page shows for one creature.
    ///
    /// After the creature itself is loaded, its species (and evolution
    /// chain), abilities and moves are resolved concurrently. The first
    /// failing sub-fetch aborts the whole aggregation.
    pub async fn get_details(
        &self,
        id: &str,
        cancel: &CancelToken,
    ) -> Result<DetailRecord, AggregationError> {
        let url = self.endpoint_url(&Endpoint::Pokemon(id.to_string()));
        let pokemon: Pokemon = self
            .fetch(&url, cancel)
            .await
            .stage(Stage::Pokemon, id)?;

        tracing::debug!(
            id = pokemon.id,
            name = %pokemon.name,
            abilities = pokemon.abilities.len(),
            moves = pokemon.moves.len(),
            "Aggregating details"
        );

        let ((species, evolution_chain), abilities, moves) = try_join!(
            self.species_and_chain(&pokemon, cancel),
            self.resolve_abilities(&pokemon.abilities, cancel),
            self.resolve_moves(&pokemon.moves, cancel),
        )?;

        let stats: Vec<StatEntry> = pokemon.stats.iter().map(StatEntry::from_api).collect();

        Ok(DetailRecord {
            id: pokemon.id,
            name: resolve_name(&species.names, &pokemon.name),
            height: pokemon.height,
            weight: pokemon.weight,
            capture_rate: species.capture_rate,
            abilities,
            moves,
            base_stat_total: base_stat_total(&stats),
            stats,
            types: type_refs(&pokemon.types),
            sprites: Sprites {
                default: pokemon.sprites.front_default,
                shiny: pokemon.sprites.front_shiny,
            },
            evolution_chain,
        })
    }

    async fn species_and_chain(
        &self,
        pokemon: &Pokemon,
        cancel: &CancelToken,
    ) -> Result<(PokemonSpecies, Vec<EvolutionStage>), AggregationError> {
        let species: PokemonSpecies = self
            .fetch(&pokemon.species.url, cancel)
            .await
            .stage(Stage::Species, &pokemon.name)?;

        let Some(chain_ref) = &species.evolution_chain else {
            tracing::warn!(species = %species.name, "Species has no evolution chain");
            return Ok((species, Vec::new()));
        };

        let chain: EvolutionChain = self
            .fetch(&chain_ref.url, cancel)
            .await
            .stage(Stage::EvolutionChain, &species.name)?;
        let stages = self.walk_evolution_chain(&chain.chain, cancel).await?;

        Ok((species, stages))
    }

    async fn resolve_abilities(
        &self,
        abilities: &[PokemonAbility],
        cancel: &CancelToken,
    ) -> Result<Vec<AbilityRef>, AggregationError> {
        stream::iter(abilities)
            .map(|entry| async move {
                let ability: LocalizedResource = self
                    .fetch(&entry.ability.url, cancel)
                    .await
                    .stage(Stage::Ability, &entry.ability.name)?;

                Ok::<_, AggregationError>(AbilityRef {
                    name: resolve_name(&ability.names, &entry.ability.name),
                    slug: entry.ability.name.clone(),
                    slot: entry.slot,
                    is_hidden: entry.is_hidden,
                })
            })
            .buffered(self.config().fan_out())
            .try_collect()
            .await
    }

    async fn resolve_moves(
        &self,
        moves: &[PokemonMove],
        cancel: &CancelToken,
    ) -> Result<Vec<MoveDetail>, AggregationError> {
        stream::iter(moves)
            .map(|entry| async move {
                let record: Move = self
                    .fetch(&entry.move_.url, cancel)
                    .await
                    .stage(Stage::Move, &entry.move_.name)?;

                Ok::<_, AggregationError>(MoveDetail {
                    name: resolve_name(&record.names, &record.name),
                    move_type: record.type_.name,
                    power: record.power,
                    accuracy: record.accuracy,
                    pp: record.pp,
                    priority: record.priority.unwrap_or(0),
                    damage_class: record.damage_class.map(|c| c.name).unwrap_or_default(),
                    effect: resolve_effect(&record.effect_entries),
                })
            })
            .buffered(self.config().fan_out())
            .try_collect()
            .await
    }
}

/// Known types in slot order; unknown type names are skipped
pub(crate) fn type_refs(types: &[PokemonType]) -> Vec<TypeRef> {
    let mut refs: Vec<TypeRef> = types
        .iter()
        .filter_map(|t| match Type::from_api(&t.type_.name) {
            Some(kind) => Some(TypeRef { slot: t.slot, kind }),
            None => {
                tracing::warn!(type_name = %t.type_.name, "Skipping unknown type");
                None
            }
        })
        .collect();
    refs.sort_by_key(|t| t.slot);
    refs
}
