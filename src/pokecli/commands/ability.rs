use super::enrich::maybe_enrich;
use crate::client::LookupClient;
use crate::error::Result;
use crate::model::{Category, CommandRequest};
use crate::render::Renderer;
use crate::resolve::resolve;
use tracing::debug;

pub fn run<C: LookupClient>(
    client: &C,
    request: &CommandRequest,
    renderer: &Renderer,
    sink: &mut String,
) -> Result<()> {
    debug!(name = %request.entity_name, "ability lookup");
    let record = client.fetch(Category::Ability, &request.entity_name)?;
    let fields = resolve(&record, Category::Ability);

    sink.push_str(&renderer.render_ability(&fields));

    maybe_enrich(
        request.flags,
        Category::Ability,
        &request.entity_name,
        client,
        sink,
        renderer,
    )
}
