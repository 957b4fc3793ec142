//! Command execution logic.
//!
//! Non-interactive commands load the matrix into a fresh graph and render a
//! single report to stdout. Unlike the menu, they never act on a partially
//! imported graph: any import error aborts the command.

use anyhow::{Context, Result, bail};
use std::io::{self, Write};
use std::path::Path;

use super::args::{InitArgs, MatrixArgs, MenuArgs};
use super::menu::Menu;
use crate::config::{self, PrereqConfig};
use crate::graph::Graph;
use crate::import::load_matrix_file;
use crate::output::{self, OutputConfig, OutputMode};

/// Execute the init command
pub fn execute_init(dir: &Path, args: &InitArgs) -> Result<()> {
    let path = config::init(dir)?;

    if !args.quiet {
        println!("Wrote default configuration to {}", path.display());
    }

    Ok(())
}

/// Execute the check command.
///
/// Fails after printing the report when the graph has a cycle.
pub fn execute_check(args: &MatrixArgs, config: &PrereqConfig, mode: OutputMode) -> Result<()> {
    let graph = load_graph(&args.file, config)?;
    let has_cycle = graph.has_cycle();

    let mut stdout = io::stdout().lock();
    output::write_validation(
        &mut stdout,
        has_cycle,
        graph.size(),
        mode,
        &OutputConfig::from_env(),
    )?;
    stdout.flush()?;

    if has_cycle {
        bail!("'{}' contains circular prerequisites", args.file.display());
    }
    Ok(())
}

/// Execute the plan command
pub fn execute_plan(args: &MatrixArgs, config: &PrereqConfig, mode: OutputMode) -> Result<()> {
    let graph = load_graph(&args.file, config)?;
    let order = graph.topological_order();
    let levels = graph.group_by_level();

    let mut stdout = io::stdout().lock();
    output::write_study_plan(
        &mut stdout,
        order.as_deref(),
        levels.as_ref(),
        mode,
        &OutputConfig::from_env(),
    )?;
    stdout.flush()?;

    if order.is_none() {
        bail!(
            "cannot build a study order: '{}' contains circular prerequisites",
            args.file.display()
        );
    }
    Ok(())
}

/// Execute the bfs command
pub fn execute_bfs(args: &MatrixArgs, config: &PrereqConfig, mode: OutputMode) -> Result<()> {
    let graph = load_graph(&args.file, config)?;
    let trace = graph.bfs_trace_from_first();

    let mut stdout = io::stdout().lock();
    output::write_bfs_trace(&mut stdout, &trace, mode, &OutputConfig::from_env())?;
    stdout.flush()?;
    Ok(())
}

/// Execute the menu command on the process's stdin and stdout
pub fn execute_menu(args: &MenuArgs, config: PrereqConfig) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut menu = Menu::new(stdin, stdout, config, OutputConfig::from_env());

    if let Some(path) = &args.load {
        menu.load_file(path)?;
    }

    menu.run()?;
    Ok(())
}

fn load_graph(path: &Path, config: &PrereqConfig) -> Result<Graph> {
    let mut graph = Graph::new();
    let summary = load_matrix_file(&mut graph, path, &config.import)
        .with_context(|| format!("Failed to load '{}'", path.display()))?;

    tracing::debug!(
        rows = summary.rows,
        edges = summary.edges,
        "Loaded matrix for command"
    );
    Ok(graph)
}
