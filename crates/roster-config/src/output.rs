//! Output rendering defaults.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const FORMATS: [&str; 3] = ["json", "table", "raw"];

fn default_format() -> String {
    "json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format when `--format` is not given: json, table, raw.
    #[serde(default = "default_format")]
    pub format: String,

    /// Colorize status cells in table output.
    #[serde(default)]
    pub color: bool,

    /// Maximum table width in columns. Unlimited when unset.
    #[serde(default)]
    pub max_width: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: false,
            max_width: None,
        }
    }
}

impl OutputConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "output.format".into(),
                reason: format!("expected one of {}, got '{}'", FORMATS.join(", "), self.format),
            });
        }
        if self.max_width.is_some_and(|width| width < 20) {
            return Err(ConfigError::InvalidValue {
                field: "output.max_width".into(),
                reason: "must be at least 20 columns".into(),
            });
        }
        Ok(())
    }
}
