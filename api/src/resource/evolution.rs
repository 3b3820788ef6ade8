use serde::Deserialize;

use super::common::NamedResource;

/// `GET evolution-chain/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

/// One node of the evolution tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,

    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,

    /// How this node is reached from its parent; empty on the root
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
}

impl ChainLink {
    /// Number of nodes on the first-branch path starting here
    pub fn depth(&self) -> usize {
        1 + self.evolves_to.first().map_or(0, ChainLink::depth)
    }
}

/// Trigger data for one way of evolving into a species.
///
/// The API sends `null`, `0` or `""` for conditions that do not apply.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EvolutionDetail {
    pub min_level: Option<u32>,
    pub item: Option<NamedResource>,
    pub trigger: Option<NamedResource>,
    #[serde(default)]
    pub time_of_day: String,
    pub known_move_type: Option<NamedResource>,
    pub location: Option<NamedResource>,
    pub min_happiness: Option<u32>,
}

impl EvolutionDetail {
    /// Name of the trigger resource ("level-up", "trade", "use-item", ...)
    pub fn trigger_name(&self) -> Option<&str> {
        self.trigger.as_ref().map(|t| t.name.as_str())
    }
}
