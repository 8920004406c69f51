use super::{related_names, LookupClient};
use crate::error::LookupError;
use crate::model::{Category, EnrichmentResult, RemoteRecord};
use std::cell::Cell;
use std::collections::HashMap;

/// Fixture-backed lookup client for testing and development.
/// Never touches the network.
#[derive(Default)]
pub struct InMemoryClient {
    records: HashMap<(Category, String), RemoteRecord>,
    fail_related: bool,
    fetches: Cell<usize>,
    related_fetches: Cell<usize>,
}

impl InMemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, category: Category, record: RemoteRecord) -> Self {
        self.records
            .insert((category, record.name.to_lowercase()), record);
        self
    }

    /// Make every `fetch_related` call fail with a transport error.
    pub fn failing_related(mut self) -> Self {
        self.fail_related = true;
        self
    }

    /// Number of primary lookups attempted so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    /// Number of related (enrichment) lookups attempted so far.
    pub fn related_count(&self) -> usize {
        self.related_fetches.get()
    }

    fn lookup(&self, category: Category, entity_name: &str) -> Result<RemoteRecord, LookupError> {
        let name = entity_name.to_lowercase();
        self.records
            .get(&(category, name.clone()))
            .cloned()
            .ok_or(LookupError::NotFound { category, name })
    }
}

impl LookupClient for InMemoryClient {
    fn fetch(&self, category: Category, entity_name: &str) -> Result<RemoteRecord, LookupError> {
        self.fetches.set(self.fetches.get() + 1);
        self.lookup(category, entity_name)
    }

    fn fetch_related(
        &self,
        category: Category,
        entity_name: &str,
    ) -> Result<EnrichmentResult, LookupError> {
        self.related_fetches.set(self.related_fetches.get() + 1);
        if self.fail_related {
            return Err(LookupError::Transport("connection reset".to_string()));
        }
        let record = self.lookup(category, entity_name)?;
        Ok(EnrichmentResult {
            category,
            entity_name: entity_name.to_lowercase(),
            names: related_names(&record, category),
        })
    }
}

// --- Test Fixtures ---

pub mod fixtures {
    use super::*;
    use crate::model::{AbilityPokemon, EffectEntry, FlavorTextEntry, NamedResource};

    fn english_flavor(version_group: &str, text: &str) -> FlavorTextEntry {
        FlavorTextEntry {
            flavor_text: text.to_string(),
            language: NamedResource::named("en"),
            version_group: Some(NamedResource::named(version_group)),
        }
    }

    /// An ability with an English short effect and three holders.
    pub fn stench() -> RemoteRecord {
        RemoteRecord {
            name: "stench".to_string(),
            effect_entries: vec![EffectEntry {
                effect: "This Pokémon's damaging moves have a 10% chance to make the target flinch with each hit.".to_string(),
                short_effect: "Has a 10% chance of making target Pokémon flinch with each hit.".to_string(),
                language: NamedResource::named("en"),
            }],
            flavor_text_entries: vec![english_flavor(
                "ruby-sapphire",
                "Helps repel wild POKéMON.",
            )],
            generation: Some(NamedResource::named("generation-iii")),
            pokemon: ["gloom", "grimer", "muk", "stunky"]
                .iter()
                .enumerate()
                .map(|(i, name)| AbilityPokemon {
                    is_hidden: i % 2 == 1,
                    slot: 1,
                    pokemon: NamedResource::named(name),
                })
                .collect(),
            ..Default::default()
        }
    }

    /// A generation IX ability that ships without a short effect.
    pub fn toxic_chain() -> RemoteRecord {
        RemoteRecord {
            name: "toxic-chain".to_string(),
            flavor_text_entries: vec![english_flavor(
                "scarlet-violet",
                "The power of the Pokémon's toxic chain may badly poison any target the Pokémon hits with a move.",
            )],
            generation: Some(NamedResource::named("generation-ix")),
            ..Default::default()
        }
    }

    pub fn flamethrower() -> RemoteRecord {
        RemoteRecord {
            name: "flamethrower".to_string(),
            flavor_text_entries: vec![
                english_flavor("red-blue", "A powerful fire attack that may inflict a burn."),
                english_flavor(
                    "scarlet-violet",
                    "The target is scorched with an intense blast of fire. This may also leave the target with a burn.",
                ),
            ],
            generation: Some(NamedResource::named("generation-i")),
            power: Some(90),
            pp: Some(15),
            accuracy: Some(100),
            effect_chance: Some(10),
            priority: Some(0),
            damage_class: Some(NamedResource::named("special")),
            type_: Some(NamedResource::named("fire")),
            learned_by_pokemon: vec![
                NamedResource::named("charmander"),
                NamedResource::named("charmeleon"),
                NamedResource::named("charizard"),
            ],
            ..Default::default()
        }
    }

    /// A status move: null power and effect chance.
    pub fn growl() -> RemoteRecord {
        RemoteRecord {
            name: "growl".to_string(),
            flavor_text_entries: vec![english_flavor(
                "scarlet-violet",
                "The user growls in an endearing way, making opposing Pokémon less wary.",
            )],
            generation: Some(NamedResource::named("generation-i")),
            pp: Some(40),
            accuracy: Some(100),
            priority: Some(0),
            damage_class: Some(NamedResource::named("status")),
            type_: Some(NamedResource::named("normal")),
            ..Default::default()
        }
    }

    /// Client loaded with every fixture above.
    pub fn client() -> InMemoryClient {
        InMemoryClient::new()
            .with_record(Category::Ability, stench())
            .with_record(Category::Ability, toxic_chain())
            .with_record(Category::Move, flamethrower())
            .with_record(Category::Move, growl())
    }
}
