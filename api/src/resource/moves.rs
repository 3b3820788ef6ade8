use serde::Deserialize;

use super::common::{LocalizedName, NamedResource, VerboseEffect};

/// `GET move/{id}`
///
/// Status moves have no power, some moves never miss, and a few Z-moves carry
/// no PP, so those numbers stay optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Move {
    pub id: u32,
    pub name: String,

    #[serde(default)]
    pub names: Vec<LocalizedName>,

    #[serde(rename = "type")]
    pub type_: NamedResource,

    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    pub pp: Option<u32>,
    pub priority: Option<i8>,
    pub damage_class: Option<NamedResource>,

    #[serde(default)]
    pub effect_entries: Vec<VerboseEffect>,
}
