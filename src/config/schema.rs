use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User configuration (~/.config/tt-class/config.yaml).
///
/// A leading `~` in a path is expanded to the home directory on load.
///
/// Example YAML:
/// ```yaml
/// catalog: ~/tt/catalog-2026.yaml
/// saved_path: ~/tt/saved.json
/// color: never
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Alternate catalog file; the built-in catalog is used when unset
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Where saved configurations live (default: ~/.config/tt-class/saved.json)
    #[serde(default)]
    pub saved_path: Option<PathBuf>,

    #[serde(default)]
    pub color: ColorMode,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}
