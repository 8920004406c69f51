//! # poke-cli Architecture
//!
//! poke-cli looks up a Pokémon ability or move in PokéAPI and prints it as
//! styled terminal text. One invocation is one pipeline run:
//!
//! ```text
//! args ─▶ validate ─▶ fetch ─▶ resolve ─▶ render ─▶ (enrich) ─▶ one String
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Process boundary (main.rs)                                 │
//! │  - Settings, logging, stdout/stderr, exit codes             │
//! │  - The ONLY place that consults test mode                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - Validates arguments into a CommandRequest                │
//! │  - Folds errors into a Failure that keeps rendered text     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Command Layer (api.rs, commands/*.rs)                │
//! │  - One pipeline per category, plus the enrichment step      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Lookup Layer (client/)                                     │
//! │  - LookupClient trait                                       │
//! │  - HttpClient (production), InMemoryClient (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Resolution (`resolve.rs`) and rendering (`render/`) sit beside the command
//! layer as pure functions: data in, data or text out.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `cli/` inward, code:
//! - Returns regular Rust types (`Result<String, Failure>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** reads environment variables (that happens once, in `Settings`)
//!
//! ## Testing Strategy
//!
//! 1. **Resolution and rendering**: unit tests on plain values
//! 2. **Commands**: unit tests against `InMemoryClient`, asserting output and
//!    how many lookups were made
//! 3. **Binary**: `tests/` drives the executable with `assert_cmd`
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`cli`]: Argument validation and the run loop
//! - [`client`]: Lookup trait and implementations
//! - [`commands`]: Ability and move pipelines, enrichment
//! - [`config`]: Config file and environment settings
//! - [`error`]: Error types
//! - [`model`]: Requests, wire records, resolved fields
//! - [`render`]: Templates, theme and layout
//! - [`resolve`]: Locale and version fallback rules

pub mod api;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod resolve;
