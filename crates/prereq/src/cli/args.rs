//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Arguments for the `init` command
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Suppress output messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for commands that read an adjacency-matrix file
/// (`check`, `plan`, `bfs`)
#[derive(Parser, Debug, Clone)]
pub struct MatrixArgs {
    /// Adjacency-matrix file: one comma-separated row of 0/1 values per item
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for the `menu` command
#[derive(Parser, Debug, Clone, Default)]
pub struct MenuArgs {
    /// Load this adjacency-matrix file before showing the menu
    #[arg(short, long, value_name = "FILE")]
    pub load: Option<PathBuf>,
}
