use serde::{Deserialize, Serialize};
use std::fmt;

/// The entity family being queried. Doubles as the API endpoint segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ability,
    Move,
}

impl Category {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Category::Ability => "ability",
            Category::Move => "move",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Ability => write!(f, "Ability"),
            Category::Move => write!(f, "Move"),
        }
    }
}

/// Which usage block to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageTopic {
    Main,
    Command(Category),
}

/// Recognized per-command options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// `-p` / `--pokemon`: list the Pokémon related to the entity.
    pub pokemon: bool,
}

/// One validated invocation. Built once from process arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub category: Category,
    pub entity_name: String,
    pub flags: Flags,
}

impl CommandRequest {
    pub fn new(category: Category, entity_name: &str, flags: Flags) -> Self {
        Self {
            category,
            entity_name: entity_name.to_lowercase(),
            flags,
        }
    }
}

// --- Remote records (PokéAPI v2 wire format) ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectEntry {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub short_effect: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    #[serde(default)]
    pub version_group: Option<NamedResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityPokemon {
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
    pub pokemon: NamedResource,
}

/// Raw response for one ability or move.
///
/// Abilities and moves share enough shape that one struct covers both;
/// fields a given endpoint does not send stay at their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteRecord {
    pub name: String,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub generation: Option<NamedResource>,
    #[serde(default)]
    pub power: Option<i64>,
    #[serde(default)]
    pub pp: Option<i64>,
    #[serde(default)]
    pub accuracy: Option<i64>,
    #[serde(default)]
    pub effect_chance: Option<i64>,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub damage_class: Option<NamedResource>,
    #[serde(default, rename = "type")]
    pub type_: Option<NamedResource>,
    #[serde(default)]
    pub pokemon: Vec<AbilityPokemon>,
    #[serde(default)]
    pub learned_by_pokemon: Vec<NamedResource>,
}

// --- Resolved, presentation-ready data ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Generation {
    /// Roman numeral suffix, uppercased (e.g. "IX").
    Introduced(String),
    Unknown,
}

/// The subset of a [`RemoteRecord`] the renderer needs.
///
/// Scalars are `None` when the API reported null. `effect` may be empty when
/// no entry matched the locale rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFields {
    pub category: Category,
    pub name: String,
    pub effect: String,
    pub generation: Generation,
    pub type_name: Option<String>,
    pub damage_class: Option<String>,
    pub power: Option<i64>,
    pub pp: Option<i64>,
    pub accuracy: Option<i64>,
    pub effect_chance: Option<i64>,
    pub priority: Option<i64>,
}

/// Names of entities related to the looked-up one, in API order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichmentResult {
    pub category: Category,
    pub entity_name: String,
    pub names: Vec<String>,
}
