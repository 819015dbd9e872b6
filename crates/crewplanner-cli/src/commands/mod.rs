// Handlers for CLI subcommands. main.rs parses arguments and dispatches here.

pub mod data;
pub mod evaluate;
pub mod planets;
pub mod ships;
