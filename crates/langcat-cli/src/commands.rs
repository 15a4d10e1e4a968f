use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{self, LogTarget};
use anyhow::Result;
use is_terminal::IsTerminal;
use langcat_types::expand_tilde;

pub fn run(cli: Cli) -> Result<()> {
    // Without a subcommand, open the viewer on a TTY and fall back to a plain
    // listing when piped
    let command = cli.command.unwrap_or_else(|| {
        if std::io::stdout().is_terminal() {
            Commands::Browse
        } else {
            Commands::List { query: None }
        }
    });

    let interactive = matches!(command, Commands::Browse);
    let log_file = cli.log_file.as_deref().map(expand_tilde);
    logging::init(
        cli.log_level,
        LogTarget::select(log_file.as_deref(), interactive),
    )?;

    let ctx = ExecutionContext::new(cli.data, cli.config, cli.format);

    match command {
        Commands::Browse => handlers::browse::handle(&ctx),
        Commands::List { query } => handlers::list::handle(&ctx, query.as_deref()),
        Commands::Show { name } => handlers::show::handle(&ctx, &name),
        Commands::Chart { width } => handlers::chart::handle(&ctx, width),
    }
}
