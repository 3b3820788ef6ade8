//! Evolution chain walking

use futures_util::future::try_join_all;
use futures_util::try_join;
use pokedex_api::{
    ChainLink, EvolutionDetail, LocalizedResource, NamedResource, Pokemon, PokemonSpecies,
    pokemon_url_for_species, resource_id,
};
use pokedex_core::{
    ConditionLookup, EvolutionBranch, EvolutionCondition, EvolutionStage, resolve_name,
};

use crate::error::{AggregationError, Stage, StageContext};
use crate::{CancelToken, Fetch, PokedexClient};

impl<F: Fetch> PokedexClient<F> {
    /// Walk an evolution chain along its first branch.
    ///
    /// Each stage lists all of its direct evolutions, but only the first one
    /// is walked further. Within a level every fetch runs concurrently;
    /// levels run one after another.
    pub async fn walk_evolution_chain(
        &self,
        root: &ChainLink,
        cancel: &CancelToken,
    ) -> Result<Vec<EvolutionStage>, AggregationError> {
        let mut stages = Vec::with_capacity(root.depth());
        let mut current = Some(root);

        while let Some(node) = current {
            let (name, sprite_url, evolves_to) = try_join!(
                self.species_name(&node.species, cancel),
                self.species_sprite(&node.species, cancel),
                try_join_all(
                    node.evolves_to
                        .iter()
                        .map(|child| self.resolve_branch(child, cancel))
                ),
            )?;

            if node.evolves_to.len() > 1 {
                tracing::debug!(
                    species = %node.species.name,
                    branches = node.evolves_to.len(),
                    "Following first evolution branch only"
                );
            }

            stages.push(EvolutionStage {
                id: species_id(&node.species),
                name,
                sprite_url,
                evolves_to,
            });
            current = node.evolves_to.first();
        }

        Ok(stages)
    }

    async fn resolve_branch(
        &self,
        child: &ChainLink,
        cancel: &CancelToken,
    ) -> Result<EvolutionBranch, AggregationError> {
        let (name, sprite_url, condition) = try_join!(
            self.species_name(&child.species, cancel),
            self.species_sprite(&child.species, cancel),
            self.evolution_condition(child.evolution_details.first(), cancel),
        )?;

        Ok(EvolutionBranch {
            id: species_id(&child.species),
            name,
            sprite_url,
            condition,
        })
    }

    /// German species name, falling back to the API name
    async fn species_name(
        &self,
        species: &NamedResource,
        cancel: &CancelToken,
    ) -> Result<String, AggregationError> {
        let record: PokemonSpecies = self
            .fetch(&species.url, cancel)
            .await
            .stage(Stage::EvolutionNode, &species.name)?;

        Ok(resolve_name(&record.names, &species.name))
    }

    /// Default sprite of the creature sharing the species' id
    async fn species_sprite(
        &self,
        species: &NamedResource,
        cancel: &CancelToken,
    ) -> Result<Option<String>, AggregationError> {
        let url = pokemon_url_for_species(&species.url);
        let pokemon: Pokemon = self
            .fetch(&url, cancel)
            .await
            .stage(Stage::EvolutionNode, &species.name)?;

        Ok(pokemon.sprites.front_default)
    }

    async fn evolution_condition(
        &self,
        detail: Option<&EvolutionDetail>,
        cancel: &CancelToken,
    ) -> Result<EvolutionCondition, AggregationError> {
        let plan = ConditionLookup::plan(detail);
        let Some(resource) = plan.resource() else {
            return Ok(plan.resolve(String::new()));
        };

        let lookup: LocalizedResource = self
            .fetch(&resource.url, cancel)
            .await
            .stage(Stage::EvolutionCondition, &resource.name)?;

        Ok(plan.resolve(resolve_name(&lookup.names, &lookup.name)))
    }
}

fn species_id(species: &NamedResource) -> u32 {
    match resource_id(&species.url, "pokemon-species") {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(species = %species.name, error = %e, "Could not read species id");
            0
        }
    }
}
