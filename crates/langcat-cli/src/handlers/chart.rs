use anyhow::Result;
use is_terminal::IsTerminal;
use langcat_engine::popularity_chart;
use terminal_size::{Width, terminal_size};

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_chart;
use crate::presentation::renderers::ConsoleRenderer;

const FALLBACK_WIDTH: usize = 80;

pub fn handle(ctx: &ExecutionContext, width: Option<usize>) -> Result<()> {
    let catalog = ctx.catalog()?;
    let chart = present_chart(&popularity_chart(catalog));

    let width = width.unwrap_or_else(|| {
        terminal_size()
            .map(|(Width(w), _)| w as usize)
            .unwrap_or(FALLBACK_WIDTH)
    });

    let renderer = ConsoleRenderer::new(ctx.format, std::io::stdout().is_terminal());
    renderer.render_chart(&mut std::io::stdout().lock(), &chart, width)
}
