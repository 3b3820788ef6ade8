//! Base stats and their total

use pokedex_api::PokemonStat;

/// One base stat as shown on the detail page
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatEntry {
    /// API stat name ("hp", "attack", "special-defense", ...)
    pub name: String,
    pub base_stat: u32,
    /// EV yield
    pub effort: u32,
}

impl StatEntry {
    pub fn new(name: impl Into<String>, base_stat: u32) -> Self {
        Self {
            name: name.into(),
            base_stat,
            effort: 0,
        }
    }

    pub fn from_api(stat: &PokemonStat) -> Self {
        Self {
            name: stat.stat.name.clone(),
            base_stat: stat.base_stat,
            effort: stat.effort,
        }
    }

    /// Width of the stat bar in percent (a base stat of 200 fills the bar)
    pub fn bar_percent(&self) -> f32 {
        (self.base_stat as f32 / 2.0).min(100.0)
    }
}

/// Sum of all base stats
pub fn base_stat_total(stats: &[StatEntry]) -> u32 {
    stats.iter().map(|s| s.base_stat).sum()
}
