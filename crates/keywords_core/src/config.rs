use std::collections::BTreeMap;

use crate::LimitPolicy;

/// Caption used when the host does not supply one.
pub const DEFAULT_LABEL: &str = "Keywords Input";
/// Guidance text used when the host does not supply one.
pub const DEFAULT_GUIDANCE_TEXT: &str = "Type a keyword and press Enter";

/// Appearance parameters passed through to the input control untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Styling {
    entries: BTreeMap<String, String>,
}

impl Styling {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Styling {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Construction-time configuration; read once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlConfig {
    pub label: String,
    pub guidance_text: String,
    pub initial_tokens: Vec<String>,
    /// Raw maximum as supplied by the host. Absent, zero or negative means unbounded.
    pub max_tokens: Option<i64>,
    pub styling: Styling,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            guidance_text: DEFAULT_GUIDANCE_TEXT.to_string(),
            initial_tokens: Vec::new(),
            max_tokens: None,
            styling: Styling::default(),
        }
    }
}

impl ControlConfig {
    pub fn limit(&self) -> LimitPolicy {
        LimitPolicy::from_config(self.max_tokens)
    }
}
