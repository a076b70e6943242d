// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs dispatches to these handlers,
// keeping the entry point focused on parsing and coordination.

pub mod distances;
pub mod path;
pub mod route;
