//! Output formatting for CLI commands and the interactive menu.
//!
//! This module provides utilities for formatting engine results in both
//! human-readable text format and JSON format for programmatic use. Every
//! writer takes an explicit `Write` sink so the menu and the tests can render
//! into buffers.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers
//! - `json`: JSON report shapes

pub mod color;
mod json;

use crate::domain::Vertex;
use crate::graph::LevelMap;
use crate::import::ImportSummary;
use serde::Serialize;
use std::env;
use std::io::{self, Write};

pub use color::{error, info, success, warning};

use color::{arrow, bold, colorize_level, dimmed};
use json::{PlanReport, TraceReport, ValidationReport};

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use ASCII-only connectors instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    pub fn new(use_ascii: bool, use_colors: bool) -> Self {
        Self {
            use_ascii,
            use_colors,
        }
    }

    /// Plain output: ASCII connectors, no colors.
    pub fn plain() -> Self {
        Self::new(true, false)
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `PREREQ_ASCII`: Set to "1" or "true" for ASCII-only connectors (default: false)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `PREREQ_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let use_ascii = match env::var("PREREQ_ASCII") {
            Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Ok(v) => {
                tracing::warn!(
                    env_var = "PREREQ_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            Err(_) => false,
        };

        // Respect NO_COLOR standard (https://no-color.org/)
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("PREREQ_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            use_ascii,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Writers
// ============================================================================

/// Write the result of a cycle check.
pub fn write_validation<W: Write>(
    w: &mut W,
    has_cycle: bool,
    items: usize,
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(
            w,
            &ValidationReport {
                acyclic: !has_cycle,
                items,
            },
        ),
        OutputMode::Text if has_cycle => {
            writeln!(
                w,
                " {}",
                error("[X] CRITICAL: Cycle detected!", config)
            )?;
            writeln!(w, "     The graph has circular prerequisites.")
        }
        OutputMode::Text => writeln!(
            w,
            " {}",
            success("[V] SUCCESS: The graph is valid and consistent.", config)
        ),
    }
}

/// Write a study plan: the linear order and the grouping by level.
///
/// `order` and `levels` are `None` when the graph has a cycle.
pub fn write_study_plan<W: Write>(
    w: &mut W,
    order: Option<&[Vertex]>,
    levels: Option<&LevelMap>,
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    if mode == OutputMode::Json {
        return write_json(w, &PlanReport::new(order, levels));
    }

    let (Some(order), Some(levels)) = (order, levels) else {
        return writeln!(
            w,
            " {}",
            error(
                "[!] ERROR: Cannot build a study order because the graph has cycles.",
                config
            )
        );
    };

    if order.is_empty() {
        return writeln!(w, " {}", warning("[!] Empty graph.", config));
    }

    let connector = format!(" {} ", dimmed(arrow(config), config));

    writeln!(w)?;
    writeln!(
        w,
        "{}",
        bold("--- [A] Linear sequence (topological order) ---", config)
    )?;
    writeln!(w, "Following this list never reaches a locked item:")?;
    let steps: Vec<String> = order
        .iter()
        .map(|vertex| format!("[{}]", info(vertex.label(), config)))
        .collect();
    writeln!(w, "Start{connector}{}{connector}End", steps.join(&connector))?;

    writeln!(w)?;
    writeln!(
        w,
        "{}",
        bold("--- [B] Suggested stages (grouped by level) ---", config)
    )?;
    writeln!(w, "Based on the critical path (longest path):")?;
    for (level, vertices) in levels {
        let members: Vec<String> = vertices
            .iter()
            .map(|vertex| info(vertex.label(), config))
            .collect();
        writeln!(
            w,
            " Level {}: [{}]",
            colorize_level(*level, config),
            members.join(", ")
        )?;
    }

    Ok(())
}

/// Write a breadth-first visit trace.
pub fn write_bfs_trace<W: Write>(
    w: &mut W,
    trace: &[Vertex],
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    if mode == OutputMode::Json {
        return write_json(w, &TraceReport { visits: trace });
    }

    if trace.is_empty() {
        return writeln!(w, " {}", warning("Graph is empty.", config));
    }

    for vertex in trace {
        writeln!(
            w,
            " {} Visiting: {}",
            dimmed(arrow(config), config),
            info(vertex.label(), config)
        )?;
    }
    Ok(())
}

/// Write the summary of a completed import.
pub fn write_import_summary<W: Write>(
    w: &mut W,
    summary: &ImportSummary,
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(w, summary),
        OutputMode::Text => writeln!(
            w,
            " {} File loaded. Rows: {}, items: {}, dependencies: {}",
            success("[OK]", config),
            summary.rows,
            summary.items,
            summary.edges
        ),
    }
}

/// Write a JSON-formatted value followed by a newline.
pub fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}
