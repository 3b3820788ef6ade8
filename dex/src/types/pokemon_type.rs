//! Pokemon type tags and their display colors

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 Pokemon types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Parse from an API type name (case-insensitive).
    ///
    /// Returns `None` for the non-battle types the API also lists
    /// ("unknown", "shadow", "stellar").
    pub fn from_api(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// API tag, as used in `type/{name}` URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }

    /// Button label: the tag with its first letter capitalized
    pub fn display_name(&self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Background color used for type badges and move cards
    pub fn color(&self) -> &'static str {
        TYPE_COLORS[*self as usize]
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Badge colors, indexed by `Type as usize`
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
pub static TYPE_COLORS: [&str; 18] = [
    "#A8A878", "#F08030", "#6890F0", "#F8D030", "#78C850", "#98D8D8",
    "#C03028", "#A040A0", "#E0C068", "#A890F0", "#F85888", "#A8B820",
    "#B8A038", "#705898", "#7038F8", "#705848", "#B8B8D0", "#EE99AC",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_api() {
        assert_eq!(Type::from_api("fire"), Some(Type::Fire));
        assert_eq!(Type::from_api("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_api("FAIRY"), Some(Type::Fairy));
        assert_eq!(Type::from_api("shadow"), None);
        assert_eq!(Type::from_api("unknown"), None);
    }

    #[test]
    fn test_as_str_round_trips_through_from_api() {
        for t in Type::all() {
            assert_eq!(Type::from_api(t.as_str()), Some(*t));
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Type::Fire.display_name(), "Fire");
        assert_eq!(Type::Psychic.display_name(), "Psychic");
    }

    #[test]
    fn test_colors() {
        assert_eq!(Type::Fire.color(), "#F08030");
        assert_eq!(Type::Water.color(), "#6890F0");
        assert_eq!(Type::Electric.color(), "#F8D030");
        assert_eq!(Type::Normal.color(), "#A8A878");
        assert_eq!(Type::Fairy.color(), "#EE99AC");
    }

    #[test]
    fn test_all_types() {
        assert_eq!(Type::all().len(), 18);
        assert_eq!(Type::all()[0], Type::Normal);
        assert_eq!(Type::all()[17], Type::Fairy);
    }
}
