//! Denormalized records handed to the view layer

use super::evolution::EvolutionStage;
use super::pokemon_type::Type;
use super::stats::StatEntry;

/// Number of moves shown on a detail page
pub const MOVE_DISPLAY_LIMIT: usize = 10;

/// Rendered in place of a missing move number
pub const NOT_APPLICABLE: &str = "N/A";

/// Lightweight list-view projection of a creature
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SummaryEntry {
    pub id: u32,
    /// Localized display name
    pub name: String,
    /// Type tags in slot order
    pub types: Vec<Type>,
    pub sprite_url: Option<String>,
}

impl SummaryEntry {
    pub fn new(id: u32, name: impl Into<String>, types: Vec<Type>) -> Self {
        Self {
            id,
            name: name.into(),
            types,
            sprite_url: None,
        }
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }
}

/// An ability with its localized name
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AbilityRef {
    pub name: String,
    /// API name, e.g. "lightning-rod"
    pub slug: String,
    pub slot: u8,
    pub is_hidden: bool,
}

/// A move resolved for display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MoveDetail {
    pub name: String,
    /// API type name of the move ("electric", ...)
    pub move_type: String,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    pub pp: Option<u32>,
    pub priority: i8,
    /// "physical", "special" or "status"
    pub damage_class: String,
    pub effect: String,
}

impl MoveDetail {
    pub fn power_label(&self) -> String {
        number_label(self.power)
    }

    pub fn accuracy_label(&self) -> String {
        number_label(self.accuracy)
    }

    pub fn pp_label(&self) -> String {
        number_label(self.pp)
    }

    /// Badge color for the move's type, if it is one of the 18 battle types
    pub fn color(&self) -> Option<&'static str> {
        Type::from_api(&self.move_type).map(|t| t.color())
    }
}

fn number_label(value: Option<u32>) -> String {
    value.map_or_else(|| NOT_APPLICABLE.to_string(), |v| v.to_string())
}

/// A type slot of a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeRef {
    pub slot: u8,
    pub kind: Type,
}

/// Default and shiny front sprites
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sprites {
    pub default: Option<String>,
    pub shiny: Option<String>,
}

/// Everything the detail page shows, built from many API responses
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DetailRecord {
    pub id: u32,
    /// Localized name
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub capture_rate: u32,
    pub abilities: Vec<AbilityRef>,
    /// Every move the creature can learn, in API order
    pub moves: Vec<MoveDetail>,
    pub stats: Vec<StatEntry>,
    /// Always equal to the sum of `stats`
    pub base_stat_total: u32,
    pub types: Vec<TypeRef>,
    pub sprites: Sprites,
    pub evolution_chain: Vec<EvolutionStage>,
}

impl DetailRecord {
    /// The moves shown on the page
    pub fn display_moves(&self) -> &[MoveDetail] {
        &self.moves[..self.moves.len().min(MOVE_DISPLAY_LIMIT)]
    }

    pub fn height_m(&self) -> f32 {
        self.height as f32 / 10.0
    }

    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }

    /// Type tags in slot order
    pub fn type_tags(&self) -> Vec<Type> {
        self.types.iter().map(|t| t.kind).collect()
    }
}
