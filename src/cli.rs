//! CLI domain: parse, route and output only.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use route::{solution_path, GenerationSummary, RunContext};
