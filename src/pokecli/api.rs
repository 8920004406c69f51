//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! lookups, whatever the UI.
//!
//! The facade dispatches a [`CommandRequest`] to the matching command
//! pipeline. It holds no business logic; resolution lives in `resolve.rs` and
//! the pipelines in `commands/*.rs`.
//!
//! ## Generic Over LookupClient
//!
//! `PokeApi<C: LookupClient>` is generic over where records come from:
//! - Production: `PokeApi<HttpClient>`
//! - Testing: `PokeApi<InMemoryClient>`

use crate::client::LookupClient;
use crate::commands;
use crate::error::Result;
use crate::model::CommandRequest;
use crate::render::Renderer;

pub struct PokeApi<C: LookupClient> {
    client: C,
}

impl<C: LookupClient> PokeApi<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Run the pipeline for the request's category, appending to `sink`.
    pub fn lookup(
        &self,
        request: &CommandRequest,
        renderer: &Renderer,
        sink: &mut String,
    ) -> Result<()> {
        commands::run(&self.client, request, renderer, sink)
    }

    pub fn ability(
        &self,
        request: &CommandRequest,
        renderer: &Renderer,
        sink: &mut String,
    ) -> Result<()> {
        commands::ability::run(&self.client, request, renderer, sink)
    }

    pub fn move_details(
        &self,
        request: &CommandRequest,
        renderer: &Renderer,
        sink: &mut String,
    ) -> Result<()> {
        commands::moves::run(&self.client, request, renderer, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::fixtures;
    use crate::model::{Category, Flags};

    #[test]
    fn test_lookup_dispatches_by_category() {
        let api = PokeApi::new(fixtures::client());
        let renderer = Renderer::with_color(false);

        let mut ability = String::new();
        let request = CommandRequest::new(Category::Ability, "stench", Flags::default());
        api.lookup(&request, &renderer, &mut ability).unwrap();
        assert!(ability.contains("• Effect:"));

        let mut mv = String::new();
        let request = CommandRequest::new(Category::Move, "growl", Flags::default());
        api.lookup(&request, &renderer, &mut mv).unwrap();
        assert!(mv.contains("Priority"));

        assert_eq!(api.client().fetch_count(), 2);
    }

    #[test]
    fn test_direct_methods_match_lookup() {
        let api = PokeApi::new(fixtures::client());
        let renderer = Renderer::with_color(false);
        let request = CommandRequest::new(Category::Ability, "toxic-chain", Flags::default());

        let mut direct = String::new();
        let mut dispatched = String::new();
        api.ability(&request, &renderer, &mut direct).unwrap();
        api.lookup(&request, &renderer, &mut dispatched).unwrap();
        assert_eq!(direct, dispatched);

        let request = CommandRequest::new(Category::Move, "flamethrower", Flags::default());
        let mut out = String::new();
        api.move_details(&request, &renderer, &mut out).unwrap();
        assert!(out.contains("Flamethrower"));
    }
}
