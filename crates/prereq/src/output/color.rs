//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success/Valid:  green   (acyclic graph, completed actions)
//!   - Warning:        yellow  (partial imports, rejected input)
//!   - Error/Cycle:    red     (cycles, failed imports)
//!   - Info/Reference: cyan    (item labels)
//!   - Accent:         magenta (level numbers)
//!   - Muted:          dimmed  (connectors, hints)
//!   - Emphasis:       bold    (section headers)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Colorize a level number (magenta), zero-padded to two digits.
pub(crate) fn colorize_level(level: usize, config: &OutputConfig) -> String {
    let text = format!("{level:02}");
    if !config.use_colors {
        return text;
    }
    text.magenta().to_string()
}

/// Apply dimmed style to text (for connectors and hints).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold style to text (for section headers).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Arrow connector, with ASCII fallback support.
pub(crate) fn arrow(config: &OutputConfig) -> &'static str {
    if config.use_ascii { "->" } else { "→" }
}
