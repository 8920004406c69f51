//! # Commands
//!
//! One pipeline per category: fetch, resolve, render, then (optionally)
//! enrich. Pipelines append to a caller-owned `String` sink so that, when a
//! late step fails, what was already rendered is still there for the caller.
//!
//! Commands never print. They return `Result<()>` and leave the decision of
//! what to do with a failure to the CLI layer.

use crate::client::LookupClient;
use crate::error::Result;
use crate::model::{Category, CommandRequest};
use crate::render::Renderer;

pub mod ability;
pub mod enrich;
pub mod moves;

pub fn run<C: LookupClient>(
    client: &C,
    request: &CommandRequest,
    renderer: &Renderer,
    sink: &mut String,
) -> Result<()> {
    match request.category {
        Category::Ability => ability::run(client, request, renderer, sink),
        Category::Move => moves::run(client, request, renderer, sink),
    }
}
