//! # Remote Lookup
//!
//! The [`LookupClient`] trait is the only way the rest of the crate talks to
//! the reference API. Commands are generic over it, so they never know whether
//! a record came from the network or from a test fixture.
//!
//! ## Implementations
//!
//! - [`http::HttpClient`]: production client, blocking GETs against PokéAPI v2
//! - [`memory::InMemoryClient`]: fixture-backed client for testing
//!   - No network
//!   - Counts primary and related lookups so tests can assert call budgets
//!
//! Entity names are lowercased before any lookup. Hyphens for spaces is the
//! user's job and is not corrected here.

use crate::error::LookupError;
use crate::model::{Category, EnrichmentResult, RemoteRecord};

pub mod http;
pub mod memory;

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

pub trait LookupClient {
    /// Fetch the record for one entity.
    fn fetch(&self, category: Category, entity_name: &str) -> Result<RemoteRecord, LookupError>;

    /// Fetch the entities related to this one (Pokémon with the ability, or
    /// Pokémon that learn the move).
    fn fetch_related(
        &self,
        category: Category,
        entity_name: &str,
    ) -> Result<EnrichmentResult, LookupError>;
}

/// Extract related names from a record, in API order.
pub fn related_names(record: &RemoteRecord, category: Category) -> Vec<String> {
    match category {
        Category::Ability => record
            .pokemon
            .iter()
            .map(|entry| entry.pokemon.name.clone())
            .collect(),
        Category::Move => record
            .learned_by_pokemon
            .iter()
            .map(|p| p.name.clone())
            .collect(),
    }
}

/// Join the base URL and the entity path, tolerating a trailing slash.
pub fn endpoint_url(base: &str, category: Category, entity_name: &str) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        category.endpoint(),
        entity_name.to_lowercase()
    )
}
