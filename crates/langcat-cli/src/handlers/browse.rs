use anyhow::{Result, bail};
use is_terminal::IsTerminal;

use crate::context::ExecutionContext;
use crate::presentation::renderers::{App, TuiRenderer};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use `langcat list` when piping output");
    }

    let config = ctx.config()?;
    let loader = ctx.loader()?;
    let source = loader.path().display().to_string();

    // Skeletons are drawn from the first frame; the catalog arrives later
    let app = App::from_config(config, source);
    let handle = loader.spawn()?;

    TuiRenderer::new().run(app, handle)
}
