//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for prereq using clap's derive API.
//!
//! # Commands
//!
//! - `init`: Write a default `prereq.yaml` into the current directory
//! - `check`: Load a matrix file and report whether it has a cycle
//! - `plan`: Load a matrix file and print the study order and levels
//! - `bfs`: Load a matrix file and print a breadth-first visit trace
//! - `menu`: Interactive session (also the default with no command)
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (non-interactive commands)
//! - `--config`: Use this configuration file instead of `./prereq.yaml`
//!
//! # Example
//!
//! ```bash
//! prereq check courses.txt
//! prereq --json plan courses.txt
//! prereq menu --load courses.txt
//! ```

mod args;
mod execute;
pub mod menu;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::PrereqConfig;

pub use args::{InitArgs, MatrixArgs, MenuArgs};
pub use validators::{MAX_LABEL_LENGTH, validate_label};

/// Prereq - prerequisite dependency planner
///
/// Loads items and their prerequisites as a directed graph, detects circular
/// prerequisites, and produces study orders grouped by level.
#[derive(Parser, Debug)]
#[command(name = "prereq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./prereq.yaml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default configuration file
    ///
    /// Creates `prereq.yaml` in the current directory. Refuses to overwrite
    /// an existing file.
    Init(InitArgs),

    /// Check a matrix file for circular prerequisites
    ///
    /// Exits with a non-zero status when the graph has a cycle.
    Check(MatrixArgs),

    /// Print the study order and the grouping by level
    ///
    /// Items on the same level can be studied in parallel.
    Plan(MatrixArgs),

    /// Print a breadth-first visit trace from the first item
    Bfs(MatrixArgs),

    /// Start the interactive menu
    Menu(MenuArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let current_dir = std::env::current_dir()?;

        match &self.command {
            Some(Commands::Init(args)) => execute::execute_init(&current_dir, args),
            Some(Commands::Check(args)) => {
                let config = self.load_config(&current_dir)?;
                execute::execute_check(args, &config, output_mode)
            }
            Some(Commands::Plan(args)) => {
                let config = self.load_config(&current_dir)?;
                execute::execute_plan(args, &config, output_mode)
            }
            Some(Commands::Bfs(args)) => {
                let config = self.load_config(&current_dir)?;
                execute::execute_bfs(args, &config, output_mode)
            }
            Some(Commands::Menu(args)) => {
                execute::execute_menu(args, self.load_config(&current_dir)?)
            }
            None => execute::execute_menu(&MenuArgs::default(), self.load_config(&current_dir)?),
        }
    }

    fn load_config(&self, dir: &Path) -> Result<PrereqConfig> {
        Ok(PrereqConfig::resolve(self.config.as_deref(), dir)?)
    }
}
