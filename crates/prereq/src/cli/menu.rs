//! Interactive menu session.
//!
//! The session owns the working [`Graph`] and hands it explicitly to each
//! action. Loading a file builds a fresh graph and swaps it in, so nothing
//! outside the session ever observes a half-replaced graph.
//!
//! End of input at any prompt ends the session cleanly.

use std::io::{self, BufRead, Write};
use std::path::Path;

use super::validators::validate_label;
use crate::config::{ImportConfig, PrereqConfig};
use crate::error::ImportError;
use crate::graph::Graph;
use crate::import::load_matrix_file;
use crate::output::color::arrow;
use crate::output::{self, OutputConfig, OutputMode, error, info, success, warning};

const RULE: &str = "----------------------------------------";
const BANNER: &str = "========================================";

/// Menu options, numbered as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    AddItem,
    AddDependency,
    Validate,
    StudyOrder,
    LoadFile,
    Bfs,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddItem),
            "2" => Some(Self::AddDependency),
            "3" => Some(Self::Validate),
            "4" => Some(Self::StudyOrder),
            "5" => Some(Self::LoadFile),
            "6" => Some(Self::Bfs),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Line-oriented prompt over an input and an output stream.
struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Print `prompt` and read one line. `None` means end of input.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than ending the session.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// An interactive session over a working graph.
pub struct Menu<R, W> {
    graph: Graph,
    console: Console<R, W>,
    config: PrereqConfig,
    style: OutputConfig,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a session with an empty graph.
    pub fn new(input: R, output: W, config: PrereqConfig, style: OutputConfig) -> Self {
        Self {
            graph: Graph::new(),
            console: Console { input, output },
            config,
            style,
        }
    }

    /// The working graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// End the session and take the working graph.
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.write_header()?;
            let Some(line) = self.console.ask(" Choose an option: ")? else {
                break;
            };
            writeln!(self.console.output)?;

            match Choice::parse(&line) {
                Some(Choice::Exit) => {
                    writeln!(self.console.output, ">> Exiting...")?;
                    break;
                }
                Some(choice) => self.dispatch(choice)?,
                None => writeln!(
                    self.console.output,
                    " {}",
                    warning("!! Invalid option.", &self.style)
                )?,
            }

            writeln!(self.console.output)?;
            writeln!(self.console.output, "{RULE}")?;
            if self
                .console
                .ask("Press ENTER to return to the menu...")?
                .is_none()
            {
                break;
            }
        }

        tracing::debug!(items = self.graph.size(), "Menu session ended");
        Ok(())
    }

    /// Replace the working graph with the contents of a matrix file.
    ///
    /// - On success the imported graph replaces the working graph.
    /// - On a malformed value the rows read before the error replace the
    ///   working graph and a warning is shown.
    /// - When the file cannot be read the working graph is kept.
    pub fn load_file(&mut self, path: &Path) -> io::Result<()> {
        let out = &mut self.console.output;
        let mut fresh = Graph::new();

        match load_matrix_file(&mut fresh, path, &self.config.import) {
            Ok(summary) => {
                self.graph = fresh;
                output::write_import_summary(out, &summary, OutputMode::Text, &self.style)
            }
            Err(err @ ImportError::Malformed { .. }) => {
                let items = fresh.size();
                self.graph = fresh;
                writeln!(out, " {}", warning(&format!("[!] {err}"), &self.style))?;
                writeln!(out, "     Kept the {items} items read before the error.")
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Import failed");
                writeln!(
                    out,
                    " {}",
                    error(&format!("[!] Error loading file: {err}"), &self.style)
                )?;
                writeln!(out, "     The current graph was kept.")
            }
        }
    }

    fn dispatch(&mut self, choice: Choice) -> io::Result<()> {
        let import = &self.config.import;
        let style = &self.style;

        match choice {
            Choice::AddItem => add_item(&mut self.graph, &mut self.console, import, style),
            Choice::AddDependency => {
                add_dependency(&mut self.graph, &mut self.console, import, style)
            }
            Choice::Validate => validate(&self.graph, &mut self.console.output, style),
            Choice::StudyOrder => study_order(&self.graph, &mut self.console.output, style),
            Choice::Bfs => bfs(&self.graph, &mut self.console.output, style),
            Choice::LoadFile => {
                writeln!(self.console.output, "--- LOAD FILE ---")?;
                let Some(path) = self.console.ask(" File name (e.g. matrix.txt): ")? else {
                    return Ok(());
                };
                self.load_file(Path::new(path.trim()))
            }
            Choice::Exit => Ok(()),
        }
    }

    fn write_header(&mut self) -> io::Result<()> {
        let out = &mut self.console.output;
        let status = if self.graph.is_empty() {
            warning("[ ] No graph loaded", &self.style)
        } else {
            success(
                &format!("[V] Graph loaded ({} items)", self.graph.size()),
                &self.style,
            )
        };

        writeln!(out)?;
        writeln!(out, "{BANNER}")?;
        writeln!(out, "          PREREQUISITE PLANNER")?;
        writeln!(out, "     Dependency management for items")?;
        writeln!(out, "{BANNER}")?;
        writeln!(out, " Status: {status}")?;
        writeln!(out, "{RULE}")?;
        writeln!(out, " 1. [+] Add item")?;
        writeln!(out, " 2. [>] Add dependency")?;
        writeln!(out, " 3. [?] Validate (cycles)")?;
        writeln!(out, " 4. [#] Generate study order")?;
        writeln!(out, " 5. [^] Load file")?;
        writeln!(out, " 6. [O] Visualize (BFS)")?;
        writeln!(out, " 0. [x] Exit")?;
        writeln!(out, "{RULE}")
    }
}

fn add_item<R: BufRead, W: Write>(
    graph: &mut Graph,
    console: &mut Console<R, W>,
    import: &ImportConfig,
    style: &OutputConfig,
) -> io::Result<()> {
    writeln!(console.output, "--- ADD ITEM ---")?;
    let Some(name) = console.ask(" Name: ")? else {
        return Ok(());
    };
    let name = match validate_label(&name) {
        Ok(name) => name,
        Err(msg) => return writeln!(console.output, " {}", warning(&msg, style)),
    };

    if graph.contains(&name) {
        writeln!(console.output, " Item '{}' already exists.", info(&name, style))?;
    } else {
        graph.add_vertex(&name);
        writeln!(
            console.output,
            " {} Item '{}' added.",
            success("[OK]", style),
            info(&name, style)
        )?;
    }

    let Some(answer) = console.ask(" Does it have a prerequisite? (Y/N): ")? else {
        return Ok(());
    };
    if answer.trim().eq_ignore_ascii_case("y") {
        let Some(prerequisite) = console.ask(" Prerequisite name: ")? else {
            return Ok(());
        };
        link(graph, &mut console.output, &prerequisite, &name, import, style)
    } else {
        writeln!(console.output, " Item created without prerequisites.")
    }
}

fn add_dependency<R: BufRead, W: Write>(
    graph: &mut Graph,
    console: &mut Console<R, W>,
    import: &ImportConfig,
    style: &OutputConfig,
) -> io::Result<()> {
    writeln!(console.output, "--- ADD DEPENDENCY ---")?;
    let Some(prerequisite) = console.ask(" Prerequisite (completed first): ")? else {
        return Ok(());
    };
    let Some(dependent) = console.ask(" Dependent item (unlocked after): ")? else {
        return Ok(());
    };
    link(graph, &mut console.output, &prerequisite, &dependent, import, style)
}

/// Add `prerequisite -> dependent` when both items already exist.
fn link<W: Write>(
    graph: &mut Graph,
    out: &mut W,
    prerequisite: &str,
    dependent: &str,
    import: &ImportConfig,
    style: &OutputConfig,
) -> io::Result<()> {
    let prerequisite = match validate_label(prerequisite) {
        Ok(label) => label,
        Err(msg) => return writeln!(out, " {}", warning(&msg, style)),
    };
    let dependent = match validate_label(dependent) {
        Ok(label) => label,
        Err(msg) => return writeln!(out, " {}", warning(&msg, style)),
    };

    if !graph.contains(&prerequisite) || !graph.contains(&dependent) {
        return writeln!(
            out,
            " {}",
            error("[!] Items not created yet, cannot create dependency.", style)
        );
    }

    graph.add_edge(&prerequisite, &dependent, import.edge_weight);
    writeln!(
        out,
        " {} Dependency created: {} {} {}",
        success("[OK]", style),
        info(&prerequisite, style),
        arrow(style),
        info(&dependent, style)
    )
}

fn validate<W: Write>(graph: &Graph, out: &mut W, style: &OutputConfig) -> io::Result<()> {
    writeln!(out, ">> Analyzing graph structure...")?;
    output::write_validation(out, graph.has_cycle(), graph.size(), OutputMode::Text, style)
}

fn study_order<W: Write>(graph: &Graph, out: &mut W, style: &OutputConfig) -> io::Result<()> {
    writeln!(out, ">> Computing study plan...")?;
    let order = graph.topological_order();
    let levels = graph.group_by_level();
    output::write_study_plan(
        out,
        order.as_deref(),
        levels.as_ref(),
        OutputMode::Text,
        style,
    )
}

fn bfs<W: Write>(graph: &Graph, out: &mut W, style: &OutputConfig) -> io::Result<()> {
    writeln!(out, "--- BREADTH-FIRST TRAVERSAL ---")?;
    output::write_bfs_trace(out, &graph.bfs_trace_from_first(), OutputMode::Text, style)
}
