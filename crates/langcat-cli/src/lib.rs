// NOTE: langcat Architecture
//
// Handlers own data (catalog, config) and call pure presenters, which build
// view models. Renderers (console or TUI) only map view models to output.
// Nothing below the handler layer reads global state: the catalog is passed
// explicitly into every search and presenter call.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::run;
