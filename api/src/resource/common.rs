use serde::Deserialize;

use crate::ParseError;

/// A reference to another resource: `{ "name": ..., "url": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A reference without a name (e.g. the species' evolution chain)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// Anything tagged with a language resource
pub trait Localized {
    /// Language code, e.g. "de" or "en"
    fn language(&self) -> &str;
}

/// One entry of a resource's `names` list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

impl LocalizedName {
    pub fn new(language: &str, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: NamedResource::new(
                language,
                format!("https://pokeapi.co/api/v2/language/{}/", language),
            ),
        }
    }
}

impl Localized for LocalizedName {
    fn language(&self) -> &str {
        &self.language.name
    }
}

/// One entry of a move's `effect_entries` list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerboseEffect {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub short_effect: String,
    pub language: NamedResource,
}

impl Localized for VerboseEffect {
    fn language(&self) -> &str {
        &self.language.name
    }
}

/// Shape shared by ability, item, location and type lookups: an API name plus
/// its translations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalizedResource {
    pub name: String,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}

/// Extract the numeric id that follows `/{kind}/` in a resource URL.
///
/// ```
/// use pokedex_api::resource_id;
///
/// let id = resource_id("https://pokeapi.co/api/v2/pokemon-species/25/", "pokemon-species");
/// assert_eq!(id, Ok(25));
/// ```
pub fn resource_id(url: &str, kind: &str) -> Result<u32, ParseError> {
    let marker = format!("/{}/", kind);
    let start = url
        .find(&marker)
        .ok_or_else(|| ParseError::InvalidResourceUrl(url.to_string()))?
        + marker.len();

    let digits: String = url[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().map_err(|_| ParseError::MissingId {
        kind: kind.to_string(),
        url: url.to_string(),
    })
}
