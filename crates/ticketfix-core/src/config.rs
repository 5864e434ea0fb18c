use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_source")]
    pub source: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Starting document for the output; the output file itself when unset.
    #[serde(default)]
    pub base: Option<PathBuf>,
    /// The first ticket in the source is assumed to be rewritten already.
    #[serde(default = "default_skip_first")]
    pub skip_first: bool,
}

fn default_prefix() -> String {
    paths::DEFAULT_PREFIX.to_string()
}

fn default_source() -> PathBuf {
    PathBuf::from(paths::DEFAULT_SOURCE)
}

fn default_output() -> PathBuf {
    PathBuf::from(paths::DEFAULT_OUTPUT)
}

fn default_skip_first() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            source: default_source(),
            output: default_output(),
            base: None,
            skip_first: default_skip_first(),
        }
    }
}

impl Config {
    /// Load `ticketfix.yaml` from `root`, or the defaults when it is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn source_path(&self, root: &Path) -> PathBuf {
        paths::resolve(root, &self.source)
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        paths::resolve(root, &self.output)
    }

    pub fn base_path(&self, root: &Path) -> PathBuf {
        paths::resolve(root, self.base.as_deref().unwrap_or(&self.output))
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Whether writing the output would overwrite the source document.
    pub fn output_overwrites_source(&self, root: &Path) -> bool {
        let source = self.source_path(root);
        let output = self.output_path(root);
        if source == output {
            return true;
        }
        match (source.canonicalize(), output.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    pub fn validate(&self, root: &Path) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if let Err(e) = paths::validate_prefix(&self.prefix) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: e.to_string(),
            });
        }

        if self.output_overwrites_source(root) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!(
                    "source and output are the same file: {}",
                    self.source.display()
                ),
            });
        }

        if let Some(base) = &self.base {
            if base != &self.output {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "base {} differs from output {}; the output will not accumulate across runs",
                        base.display(),
                        self.output.display()
                    ),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
