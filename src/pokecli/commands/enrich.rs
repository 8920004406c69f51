use crate::client::LookupClient;
use crate::error::{PokeError, Result};
use crate::model::{Category, Flags};
use crate::render::Renderer;
use tracing::{debug, warn};

/// Append the related-Pokémon block when `-p/--pokemon` was given.
///
/// Exactly one secondary lookup when the flag is set, none otherwise. On
/// failure an error line is appended and the error returned, leaving earlier
/// output intact.
pub fn maybe_enrich<C: LookupClient>(
    flags: Flags,
    category: Category,
    entity_name: &str,
    client: &C,
    sink: &mut String,
    renderer: &Renderer,
) -> Result<()> {
    if !flags.pokemon {
        return Ok(());
    }

    debug!(%category, name = entity_name, "enrichment lookup");
    match client.fetch_related(category, entity_name) {
        Ok(related) => {
            sink.push('\n');
            sink.push_str(&renderer.render_enrichment(&related));
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "enrichment lookup failed");
            let error = PokeError::Enrichment(e);
            sink.push('\n');
            sink.push_str(&renderer.render_error(&error.to_string()));
            Err(error)
        }
    }
}
