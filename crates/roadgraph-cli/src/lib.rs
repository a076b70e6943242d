//! roadgraph CLI library.
//!
//! Argument parsing types, output renderers and logging setup shared by the
//! `roadgraph-cli` binary.

pub mod args;
pub mod logging;
pub mod output;
