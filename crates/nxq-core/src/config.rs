//! Configuration for snapshot location, path-search budgets, and output.
//!
//! Load order: `.nxq/config.toml` → environment variables → defaults.

use crate::snapshot::DEFAULT_SNAPSHOT_FILE;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Top-level nxq configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NxqConfig {
    pub snapshot: SnapshotConfig,
    pub paths: PathsConfig,
    pub output: OutputConfig,
}

/// Where the Nx graph snapshot lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Snapshot file, relative to the project root unless absolute.
    pub graph_file: PathBuf,
}

/// Budget applied to simple-path enumeration, which can blow up on dense graphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Stop after this many paths. 0 = unlimited.
    pub max_paths: usize,
    /// Do not extend paths beyond this many edges. 0 = unlimited.
    pub max_depth: usize,
}

/// Result rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How query results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown output format '{}' (expected text or json)", other),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            graph_file: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            max_paths: 1000,
            max_depth: 0,
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl NxqConfig {
    /// Load config from `.nxq/config.toml` in the project root, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".nxq").join("config.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        if let Ok(file) = std::env::var("NXQ_GRAPH_FILE")
            && !file.is_empty()
        {
            config.snapshot.graph_file = PathBuf::from(file);
        }
        env_override("NXQ_MAX_PATHS", &mut config.paths.max_paths);
        env_override("NXQ_MAX_PATH_DEPTH", &mut config.paths.max_depth);

        // Unlike the numeric overrides, an unparseable format is an error.
        if let Ok(format) = std::env::var("NXQ_OUTPUT_FORMAT") {
            config.output.format = format.parse()?;
        }

        Ok(config)
    }

    /// Absolute location of the snapshot file for a project root.
    pub fn graph_file_path(&self, project_root: &Path) -> PathBuf {
        if self.snapshot.graph_file.is_absolute() {
            self.snapshot.graph_file.clone()
        } else {
            project_root.join(&self.snapshot.graph_file)
        }
    }
}
