//! # CLI Layer
//!
//! Turns process arguments into one output string. This layer:
//! - Validates arguments ([`validate`]) before anything touches the network
//! - Dispatches the request through [`PokeApi`]
//! - Folds every failure into a [`Failure`] that still carries the text the
//!   user should see
//!
//! It does **not** print or exit. `main.rs` owns the process boundary and
//! decides, from the test-mode switch, whether a failure ends the process or
//! is just printed.

pub mod args;
pub mod validate;

use crate::api::PokeApi;
use crate::client::LookupClient;
use crate::error::PokeError;
use crate::render::Renderer;
use std::ffi::OsString;
use tracing::debug;

pub use validate::{validate, GlobalOptions, Parsed, Validated};

/// A failed invocation: the text produced so far (error line included) and
/// the error itself.
#[derive(Debug)]
pub struct Failure {
    pub output: String,
    pub error: PokeError,
}

impl Failure {
    /// A failure whose output is just the rendered error line.
    pub fn from_error(error: PokeError, renderer: &Renderer) -> Self {
        Self {
            output: renderer.render_error(&error.to_string()),
            error,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.error.exit_code()
    }
}

/// Validate the arguments into a [`Parsed`] invocation.
///
/// Validation failures are already rendered: the output holds the error line
/// and the usage block.
pub fn parse<I, T>(args: I) -> Result<Parsed, Failure>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    validate(args).map_err(|e| {
        let renderer = Renderer::with_color(false);
        let output = format!("{}\n{}", renderer.render_error(&e.message), e.usage);
        Failure {
            output,
            error: PokeError::Validation(e),
        }
    })
}

/// Output for invocations that need neither settings nor a lookup (help and
/// version). `None` for lookup requests.
pub fn answer_locally(parsed: &Parsed, renderer: &Renderer) -> Option<String> {
    match &parsed.action {
        Validated::Usage(topic) => Some(renderer.render_usage(*topic)),
        Validated::Version(text) => Some(text.clone()),
        Validated::Request(_) => None,
    }
}

/// Run a validated invocation against the API.
pub fn execute<C: LookupClient>(
    parsed: &Parsed,
    api: &PokeApi<C>,
    renderer: &Renderer,
) -> Result<String, Failure> {
    let request = match &parsed.action {
        Validated::Request(request) => request,
        _ => return Ok(answer_locally(parsed, renderer).unwrap_or_default()),
    };

    let mut output = String::new();
    match api.lookup(request, renderer, &mut output) {
        Ok(()) => Ok(output),
        Err(error @ PokeError::Enrichment(_)) => {
            debug!(%error, "enrichment failed after primary output");
            Err(Failure { output, error })
        }
        Err(error) => {
            let Failure { output: line, error } = Failure::from_error(error, renderer);
            output.push_str(&line);
            Err(Failure { output, error })
        }
    }
}

/// Parse and execute in one go. Color follows `--no-color`, otherwise the
/// terminal.
pub fn run<C, I, T>(args: I, client: C) -> Result<String, Failure>
where
    C: LookupClient,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let parsed = parse(args)?;
    let renderer = if parsed.options.no_color {
        Renderer::with_color(false)
    } else {
        Renderer::new()
    };
    execute(&parsed, &PokeApi::new(client), &renderer)
}
