use std::collections::BTreeMap;

use keywords_core::{ControlConfig, Styling};
use keywords_logging::kw_warn;
use serde::Deserialize;

/// Arguments the host passes on every render; only read once, at mount.
///
/// Every field is optional on the wire and falls back to the control's defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderArgs {
    pub label: Option<String>,
    pub text: Option<String>,
    pub initial_value: Option<Vec<String>>,
    pub max_keywords: Option<serde_json::Number>,
}

impl RenderArgs {
    /// Maximum as an integer. Fractional values are truncated toward zero.
    pub fn max_tokens(&self) -> Option<i64> {
        let number = self.max_keywords.as_ref()?;
        number.as_i64().or_else(|| match number.as_f64() {
            Some(value) if value.is_finite() => Some(value as i64),
            _ => {
                kw_warn!("Ignoring unusable maxKeywords {}", number);
                None
            }
        })
    }

    pub fn into_config(self, theme: Option<BTreeMap<String, serde_json::Value>>) -> ControlConfig {
        let defaults = ControlConfig::default();
        ControlConfig {
            max_tokens: self.max_tokens(),
            label: self.label.unwrap_or(defaults.label),
            guidance_text: self.text.unwrap_or(defaults.guidance_text),
            initial_tokens: self.initial_value.unwrap_or_default(),
            styling: theme.map(styling_from_theme).unwrap_or_default(),
        }
    }
}

fn styling_from_theme(theme: BTreeMap<String, serde_json::Value>) -> Styling {
    theme
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some((key, text)),
            other => Some((key, other.to_string())),
        })
        .collect()
}
