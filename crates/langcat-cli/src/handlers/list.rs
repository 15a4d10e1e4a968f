use anyhow::Result;
use is_terminal::IsTerminal;
use langcat_engine::search_catalog;

use crate::context::ExecutionContext;
use crate::presentation::renderers::ConsoleRenderer;

pub fn handle(ctx: &ExecutionContext, query: Option<&str>) -> Result<()> {
    let catalog = ctx.catalog()?;
    let items = search_catalog(query.unwrap_or(""), catalog);
    tracing::debug!(query, matches = items.len(), total = catalog.len(), "list");

    let renderer = ConsoleRenderer::new(ctx.format, std::io::stdout().is_terminal());
    renderer.render_items(&mut std::io::stdout().lock(), &items)
}
