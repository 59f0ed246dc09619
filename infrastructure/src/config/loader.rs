//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Merge configuration from every source the tool knows about.
    ///
    /// Later merges win, so the effective priority is: explicit `--config`
    /// path, then a project-level `oathwright.toml` (or `.oathwright.toml`),
    /// then the per-user config under the platform config dir, then the
    /// built-in defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Add project-level config files (check both names)
        for filename in &["oathwright.toml", ".oathwright.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Per-user config path: `<config dir>/oathwright/config.toml`,
    /// where the config dir is `$XDG_CONFIG_HOME` or `~/.config`.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("oathwright").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["oathwright.toml", ".oathwright.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Describe the config sources this tool consults, highest priority
    /// first. The explicit `--config` path is per-invocation and not listed.
    pub fn config_sources() -> Vec<String> {
        let mut lines = Vec::new();

        match Self::project_config_path() {
            Some(path) => lines.push(format!("project   {} (found)", path.display())),
            None => lines.push(
                "project   ./oathwright.toml or ./.oathwright.toml (not found)".to_string(),
            ),
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "found" } else { "not found" };
            lines.push(format!("per-user  {} ({})", path.display(), marker));
        }

        lines.push("defaults  built-in [backend], [retry] and [output] values".to_string());
        lines
    }

    /// Print the config sources (the `--show-config` flag).
    pub fn print_config_sources() {
        println!("Config sources, highest priority first (--config overrides all):");
        for line in Self::config_sources() {
            println!("  {}", line);
        }
    }
}
