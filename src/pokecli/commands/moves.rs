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
    debug!(name = %request.entity_name, "move lookup");
    let record = client.fetch(Category::Move, &request.entity_name)?;
    let fields = resolve(&record, Category::Move);

    sink.push_str(&renderer.render_move(&fields));

    maybe_enrich(
        request.flags,
        Category::Move,
        &request.entity_name,
        client,
        sink,
        renderer,
    )
}
