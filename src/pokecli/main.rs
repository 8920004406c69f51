use colored::Colorize;
use pokecli::api::PokeApi;
use pokecli::cli::{self, Failure};
use pokecli::client::http::HttpClient;
use pokecli::config::{self, Settings};
use pokecli::error::PokeError;
use pokecli::render::Renderer;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let test_mode = config::test_mode_from(|key| std::env::var(key).ok());

    let parsed = match cli::parse(&args) {
        Ok(parsed) => parsed,
        Err(failure) => {
            init_logging(false);
            finish(Err(failure), test_mode)
        }
    };

    init_logging(parsed.options.verbose);
    let renderer = if parsed.options.no_color {
        Renderer::with_color(false)
    } else {
        Renderer::new()
    };

    // Help and version never depend on the config file.
    if let Some(output) = cli::answer_locally(&parsed, &renderer) {
        finish(Ok(output), test_mode)
    }

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => finish(Err(Failure::from_error(e, &renderer)), test_mode),
    };
    debug!(?settings, "settings loaded");

    let client = match HttpClient::new(&settings.api_url, settings.timeout_secs) {
        Ok(client) => client,
        Err(e) => finish(Err(Failure::from_error(e, &renderer)), test_mode),
    };

    let result = cli::execute(&parsed, &PokeApi::new(client), &renderer);
    finish(result, test_mode)
}

/// Default level is `warn`, `-v` raises it to `debug`, `RUST_LOG` wins over both.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn finish(result: Result<String, Failure>, test_mode: bool) -> ! {
    match result {
        Ok(output) => {
            print!("{}", output);
            std::process::exit(0);
        }
        Err(failure) if test_mode => {
            debug!(error = %failure.error, "test mode: reporting failure as output");
            print!("{}", failure.output);
            std::process::exit(0);
        }
        Err(Failure { output, error }) => {
            // Enrichment output is the primary result plus an error line.
            if matches!(error, PokeError::Enrichment(_)) {
                print!("{}", output);
            } else if output.is_empty() {
                eprintln!("{} {}", "Error:".red().bold(), error);
            } else {
                eprint!("{}", output);
            }
            std::process::exit(error.exit_code());
        }
    }
}
