//! German name resolution with fallback

use pokedex_api::{Localized, LocalizedName, VerboseEffect};

/// Language every display name is resolved to
pub const TARGET_LOCALE: &str = "de";

/// Secondary language for move effect texts
pub const EFFECT_FALLBACK_LOCALE: &str = "en";

/// Shown when a move has no effect text in either language
pub const NO_EFFECT: &str = "Kein Effekt verfügbar";

/// First entry tagged with `language`
pub fn find_language<'a, T: Localized>(entries: &'a [T], language: &str) -> Option<&'a T> {
    entries.iter().find(|e| e.language() == language)
}

/// The German name if one exists, otherwise `fallback`
pub fn resolve_name(names: &[LocalizedName], fallback: &str) -> String {
    find_language(names, TARGET_LOCALE)
        .map(|n| n.name.clone())
        .unwrap_or_else(|| fallback.to_string())
}

/// Short effect text: German, then English, then [`NO_EFFECT`]
pub fn resolve_effect(entries: &[VerboseEffect]) -> String {
    [TARGET_LOCALE, EFFECT_FALLBACK_LOCALE]
        .iter()
        .filter_map(|lang| find_language(entries, lang))
        .map(|e| e.short_effect.as_str())
        .find(|text| !text.is_empty())
        .unwrap_or(NO_EFFECT)
        .to_string()
}
