use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LexisError;
use crate::types::OutputFormat;

/// File analyzed when neither the CLI nor the config names one.
pub const DEFAULT_FILE: &str = "document.txt";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = ".lexis.toml";

/// Top-level configuration loaded from `.lexis.toml`.
///
/// Supports layered resolution: CLI flags > local config > defaults.
///
/// # Examples
///
/// ```
/// use lexis_core::{LexisConfig, OutputFormat};
///
/// let config = LexisConfig::default();
/// assert_eq!(config.analysis.file, "document.txt");
/// assert_eq!(config.output.format, OutputFormat::Text);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexisConfig {
    /// What to analyze.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// How to render the report.
    #[serde(default)]
    pub output: OutputConfig,
}

impl LexisConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LexisError::FileNotFound`] if the file does not exist,
    /// [`LexisError::Io`] if it cannot be read, or [`LexisError::Toml`] if
    /// the content is not valid TOML.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lexis_core::LexisConfig;
    /// use std::path::Path;
    ///
    /// let config = LexisConfig::from_file(Path::new(".lexis.toml")).unwrap();
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, LexisError> {
        if !path.exists() {
            return Err(LexisError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`LexisError::Toml`] if parsing fails, or
    /// [`LexisError::Config`] if `analysis.file` is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis_core::LexisConfig;
    ///
    /// let toml = r#"
    /// [analysis]
    /// file = "notes/essay.md"
    /// "#;
    /// let config = LexisConfig::from_toml(toml).unwrap();
    /// assert_eq!(config.analysis.file, "notes/essay.md");
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, LexisError> {
        let config: Self = toml::from_str(content)?;
        if config.analysis.file.trim().is_empty() {
            return Err(LexisError::Config("analysis.file must not be empty".into()));
        }
        Ok(config)
    }

    /// Load `path` if given, otherwise `.lexis.toml` in `dir` if it exists,
    /// otherwise defaults.
    ///
    /// # Errors
    ///
    /// Propagates [`LexisConfig::from_file`] errors. An explicitly requested
    /// file that is missing is an error; a missing default file is not.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self, LexisError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = dir.join(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Analysis target configuration.
///
/// # Examples
///
/// ```
/// use lexis_core::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.file, "document.txt");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Repo-relative path of the tracked text file (default: `document.txt`).
    #[serde(default = "default_file")]
    pub file: String,
}

fn default_file() -> String {
    DEFAULT_FILE.into()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
        }
    }
}

/// Report rendering configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format (default: `text`).
    #[serde(default)]
    pub format: OutputFormat,
}
