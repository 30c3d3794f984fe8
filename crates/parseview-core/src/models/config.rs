//! Configuration structures for view rendering.
//!
//! Label strings belong to the presentation layer; the classifier only
//! produces outcomes. Defaults match the strings the web UI ships with.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ParseViewError, Result};

/// Main configuration for parse result views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Status badge labels.
    pub labels: StatusLabels,

    /// Placeholder strings for missing data.
    pub placeholders: Placeholders,

    /// Value formatting options.
    pub format: FormatConfig,
}

/// Labels shown for each parse outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    /// List row whose entity has no file attached.
    pub not_uploaded: String,

    /// List row whose file is attached but carries no recognised status.
    pub pending: String,

    /// Detail dialog for a payload without a recognised status.
    pub unparsed: String,

    pub full: String,
    pub partial: String,
    pub failed: String,
    pub unsupported: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            not_uploaded: "未上传".to_string(),
            pending: "待解析".to_string(),
            unparsed: "未解析".to_string(),
            full: "完整解析".to_string(),
            partial: "部分解析".to_string(),
            failed: "解析失败".to_string(),
            unsupported: "不支持解析".to_string(),
        }
    }
}

/// Placeholder strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    /// Summary row value when the field is missing or unusable.
    pub missing_value: String,

    /// Message when the payload carries no `parse_message`.
    pub no_message: String,

    /// Shown instead of an empty raw text block.
    pub no_raw_text: String,

    /// Shown instead of the summary table when there is no payload.
    pub no_data: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            missing_value: "-".to_string(),
            no_message: "暂无信息".to_string(),
            no_raw_text: "暂无原始文本".to_string(),
            no_data: "暂无解析数据".to_string(),
        }
    }
}

/// How calendar dates are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    /// `2024/1/15`
    #[default]
    ZhCn,
    /// `2024-01-15`
    Iso,
}

/// Value formatting options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Glyph placed before money amounts.
    pub currency_symbol: String,

    /// Calendar date rendering.
    pub date_style: DateStyle,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "¥".to_string(),
            date_style: DateStyle::ZhCn,
        }
    }
}

impl ViewConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ParseViewError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ViewConfig =
            serde_json::from_str(r#"{"format": {"date_style": "iso"}}"#).unwrap();

        assert_eq!(config.format.date_style, DateStyle::Iso);
        assert_eq!(config.format.currency_symbol, "¥");
        assert_eq!(config.labels, StatusLabels::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ViewConfig::default();
        config.labels.full = "OK".to_string();
        config.save(&path).unwrap();

        assert_eq!(ViewConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            ViewConfig::from_file(&path),
            Err(ParseViewError::Config(_))
        ));
    }
}
