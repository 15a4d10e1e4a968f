//! Testing infrastructure for langcat integration tests.
//!
//! - `TestWorld`: isolated scratch directory with a catalog file and a
//!   preconfigured `langcat` command
//! - `fixtures`: sample catalogs in the current and legacy key schemas
//! - `assertions`: checks over `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
