use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HbError, HbResult};
use crate::length::HibernateLength;

/// Player-facing configuration: the duration presets offered by the
/// "Hibernate For" menu, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HibernationConfig {
    /// Length presets such as `"1 week"` or `"forever"`.
    pub length_options: Vec<String>,
}

impl Default for HibernationConfig {
    fn default() -> Self {
        Self {
            length_options: [
                "1 night", "3 nights", "1 week", "2 weeks", "1 season", "1 year", "forever",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl HibernationConfig {
    /// Replace the length presets.
    pub fn with_length_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.length_options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> HbResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> HbResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| HbError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The presets that parse, in configured order. Invalid entries are skipped.
    pub fn parsed_length_options(&self) -> Vec<HibernateLength> {
        self.length_options
            .iter()
            .filter_map(|raw| match raw.parse::<HibernateLength>() {
                Ok(length) => Some(length),
                Err(e) => {
                    log::warn!("ignoring length option: {e}");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nights::Nights;

    #[test]
    fn default_presets_all_parse() {
        let config = HibernationConfig::default();
        let parsed = config.parsed_length_options();
        assert_eq!(parsed.len(), config.length_options.len());
        assert_eq!(parsed.last().unwrap().night_count(), Nights::Infinite);
    }

    #[test]
    fn invalid_presets_are_skipped_in_order() {
        let config =
            HibernationConfig::default().with_length_options(["2 weeks", "soon", "1 night"]);
        let parsed: Vec<String> = config
            .parsed_length_options()
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(parsed, vec!["2 weeks", "1 night"]);
    }

    #[test]
    fn reads_camel_case_json() {
        let config = HibernationConfig::from_json(r#"{ "lengthOptions": ["1 season"] }"#).unwrap();
        assert_eq!(config.length_options, vec!["1 season"]);
    }

    #[test]
    fn load_reports_missing_file() {
        assert!(matches!(
            HibernationConfig::load(Path::new("/nonexistent/config.json")),
            Err(HbError::Io { .. })
        ));
    }
}
