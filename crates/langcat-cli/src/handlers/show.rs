use anyhow::{Result, anyhow};
use is_terminal::IsTerminal;

use crate::context::ExecutionContext;
use crate::presentation::renderers::ConsoleRenderer;

pub fn handle(ctx: &ExecutionContext, name: &str) -> Result<()> {
    let catalog = ctx.catalog()?;
    let item = catalog
        .find_by_name(name)
        .ok_or_else(|| anyhow!("Language '{}' not found in catalog", name))?;

    let renderer = ConsoleRenderer::new(ctx.format, std::io::stdout().is_terminal());
    renderer.render_detail(&mut std::io::stdout().lock(), item)
}
