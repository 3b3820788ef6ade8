//! Evolution chain records

use std::fmt;

use pokedex_api::{EvolutionDetail, NamedResource};

/// One stage of a walked evolution chain
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EvolutionStage {
    /// National dex id parsed from the species URL (0 if unparsable)
    pub id: u32,
    pub name: String,
    pub sprite_url: Option<String>,
    /// Every direct evolution, including branches the walk does not follow
    pub evolves_to: Vec<EvolutionBranch>,
}

impl EvolutionStage {
    pub fn is_final(&self) -> bool {
        self.evolves_to.is_empty()
    }
}

/// A direct evolution of a stage and what triggers it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EvolutionBranch {
    pub id: u32,
    pub name: String,
    pub sprite_url: Option<String>,
    pub condition: EvolutionCondition,
}

/// Time of day for level-up evolutions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    /// "day" is day; every other value the API sends counts as night
    pub fn from_api(s: &str) -> Self {
        if s == "day" {
            TimeOfDay::Day
        } else {
            TimeOfDay::Night
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Day => "Tag",
            TimeOfDay::Night => "Nacht",
        }
    }
}

/// What triggers an evolution, in order of precedence.
///
/// Names carried by variants are already localized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EvolutionCondition {
    /// Reaching a minimum level
    Level(u32),
    /// Using or holding an item
    Item(String),
    /// Trading
    Trade,
    /// Level-up at a time of day
    LevelUpAtTime(TimeOfDay),
    /// Level-up while knowing a move of a type
    LevelUpKnowingMoveType(String),
    /// Level-up at a location
    LevelUpAt(String),
    /// Level-up with high friendship
    HighFriendship,
    Unknown,
}

impl fmt::Display for EvolutionCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvolutionCondition::Level(level) => write!(f, "Level {}", level),
            EvolutionCondition::Item(item) => write!(f, "mit {}", item),
            EvolutionCondition::Trade => write!(f, "Tausch"),
            EvolutionCondition::LevelUpAtTime(time) => write!(f, "Level-Up am {}", time.label()),
            EvolutionCondition::LevelUpKnowingMoveType(move_type) => {
                write!(f, "Level-Up mit bekanntem {} Attacke", move_type)
            }
            EvolutionCondition::LevelUpAt(location) => write!(f, "Level-Up an {}", location),
            EvolutionCondition::HighFriendship => write!(f, "mit hoher Freundschaft"),
            EvolutionCondition::Unknown => write!(f, "Unbekannte Bedingung"),
        }
    }
}

/// The lookup, if any, needed before a condition can be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionLookup<'a> {
    /// No further fetch required
    Ready(EvolutionCondition),
    /// Needs the localized name of an item
    Item(&'a NamedResource),
    /// Needs the localized name of a move type
    KnownMoveType(&'a NamedResource),
    /// Needs the localized name of a location
    Location(&'a NamedResource),
}

impl<'a> ConditionLookup<'a> {
    /// Pick the condition for the first evolution detail of a branch.
    ///
    /// Precedence: minimum level, item, trade, then the level-up
    /// sub-conditions (time of day, known move type, location, friendship).
    /// `null`, `0` and `""` all count as absent.
    pub fn plan(detail: Option<&'a EvolutionDetail>) -> Self {
        let Some(detail) = detail else {
            return ConditionLookup::Ready(EvolutionCondition::Unknown);
        };

        if let Some(level) = detail.min_level.filter(|l| *l > 0) {
            return ConditionLookup::Ready(EvolutionCondition::Level(level));
        }
        if let Some(item) = &detail.item {
            return ConditionLookup::Item(item);
        }

        match detail.trigger_name() {
            Some("trade") => ConditionLookup::Ready(EvolutionCondition::Trade),
            Some("level-up") => {
                if !detail.time_of_day.is_empty() {
                    ConditionLookup::Ready(EvolutionCondition::LevelUpAtTime(TimeOfDay::from_api(
                        &detail.time_of_day,
                    )))
                } else if let Some(move_type) = &detail.known_move_type {
                    ConditionLookup::KnownMoveType(move_type)
                } else if let Some(location) = &detail.location {
                    ConditionLookup::Location(location)
                } else if detail.min_happiness.is_some_and(|h| h > 0) {
                    ConditionLookup::Ready(EvolutionCondition::HighFriendship)
                } else {
                    ConditionLookup::Ready(EvolutionCondition::Unknown)
                }
            }
            _ => ConditionLookup::Ready(EvolutionCondition::Unknown),
        }
    }

    /// The resource whose name must be fetched, if any
    pub fn resource(&self) -> Option<&'a NamedResource> {
        match self {
            ConditionLookup::Ready(_) => None,
            ConditionLookup::Item(r)
            | ConditionLookup::KnownMoveType(r)
            | ConditionLookup::Location(r) => Some(r),
        }
    }

    /// Finish the condition with the looked-up name.
    ///
    /// The name is ignored for `Ready`.
    pub fn resolve(self, name: String) -> EvolutionCondition {
        match self {
            ConditionLookup::Ready(condition) => condition,
            ConditionLookup::Item(_) => EvolutionCondition::Item(name),
            ConditionLookup::KnownMoveType(_) => EvolutionCondition::LevelUpKnowingMoveType(name),
            ConditionLookup::Location(_) => EvolutionCondition::LevelUpAt(name),
        }
    }
}
