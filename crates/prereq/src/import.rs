//! Adjacency-matrix import.
//!
//! The input is plain text with one comma-separated row per item:
//!
//! ```text
//! 0,1,0
//! 0,0,1
//! 0,0,0
//! ```
//!
//! Line `i` (0-based) is the item labeled `"<prefix> <i + 1>"`. A token equal
//! to `1` in column `j` adds an edge to `"<prefix> <j + 1>"`; any other integer
//! means no edge; empty tokens are skipped. Bytes that are not valid UTF-8
//! decode to U+FFFD, so they surface as malformed tokens.
//!
//! # Partial imports
//!
//! The importer writes straight into a caller-owned [`Graph`]. When a token is
//! not an integer, parsing stops with [`ImportError::Malformed`], and every
//! vertex and edge added before that token **stays in the graph**, including
//! the vertex of the failing row. Callers that want all-or-nothing behavior
//! import into a fresh graph and drop it on error.

use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::graph::Graph;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Counts reported after an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Rows read
    pub rows: usize,

    /// Items created by the import. Can exceed `rows` when a row points at
    /// a column past the last row.
    pub items: usize,

    /// Edges added
    pub edges: usize,
}

/// Label of the item on 0-based row or column `index`.
pub fn item_label(prefix: &str, index: usize) -> String {
    format!("{} {}", prefix, index + 1)
}

/// Import adjacency rows from `reader` into `graph`.
///
/// # Errors
///
/// - [`ImportError::Read`] if reading a line fails
/// - [`ImportError::Malformed`] on the first non-integer token
///
/// In both cases rows processed so far remain in `graph`.
pub fn import_matrix<R: BufRead>(
    graph: &mut Graph,
    reader: R,
    config: &ImportConfig,
) -> Result<ImportSummary, ImportError> {
    let mut summary = ImportSummary::default();
    let existing = graph.size();

    for (row, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        let origin = item_label(&config.label_prefix, row);
        // Declare the row's item even when it has no outgoing edges
        graph.add_vertex(&origin);
        summary.rows += 1;

        for (column, token) in line.trim().split(',').enumerate() {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            let value: i32 = token.parse().map_err(|_| {
                warn!(
                    line_number = row + 1,
                    column = column + 1,
                    token,
                    "Malformed matrix value, stopping import"
                );
                ImportError::Malformed {
                    line_number: row + 1,
                    column: column + 1,
                    token: token.to_string(),
                }
            })?;

            if value == 1 {
                let destination = item_label(&config.label_prefix, column);
                graph.add_edge(&origin, &destination, config.edge_weight);
                summary.edges += 1;
            }
        }
    }
    summary.items = graph.size() - existing;

    info!(
        rows = summary.rows,
        items = summary.items,
        edges = summary.edges,
        "Imported adjacency matrix"
    );
    Ok(summary)
}

/// Import an adjacency-matrix file into `graph`.
///
/// # Errors
///
/// - [`ImportError::Unavailable`] if the file cannot be opened or read
/// - [`ImportError::Malformed`] on the first non-integer token
pub fn load_matrix_file(
    graph: &mut Graph,
    path: &Path,
    config: &ImportConfig,
) -> Result<ImportSummary, ImportError> {
    let file = File::open(path).map_err(|source| ImportError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    import_matrix(graph, BufReader::new(file), config).map_err(|err| match err {
        ImportError::Read(source) => ImportError::Unavailable {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}
