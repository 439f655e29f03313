use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use keywords_core::{ControlConfig, Styling};
use keywords_logging::kw_info;
use serde::{Deserialize, Serialize};

/// One keywords control as the demo page declares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSpec {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub value: Vec<String>,
    #[serde(default)]
    pub max_keywords: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WidgetFile {
    widgets: Vec<WidgetSpec>,
}

impl WidgetSpec {
    pub fn to_config(&self) -> ControlConfig {
        let defaults = ControlConfig::default();
        ControlConfig {
            label: self.label.clone().unwrap_or(defaults.label),
            guidance_text: self.text.clone().unwrap_or(defaults.guidance_text),
            initial_tokens: self.value.clone(),
            max_tokens: self.max_keywords,
            styling: light_theme(),
        }
    }
}

fn light_theme() -> Styling {
    [
        ("primaryColor", "#ff4b4b"),
        ("backgroundColor", "#ffffff"),
        ("secondaryBackgroundColor", "#f0f2f6"),
        ("textColor", "#31333F"),
    ]
    .into_iter()
    .collect()
}

/// Basic, limited and pre-populated controls.
pub fn builtin_widgets() -> Vec<WidgetSpec> {
    vec![
        WidgetSpec {
            key: "basic".to_string(),
            label: Some("Keywords".to_string()),
            text: Some("Add keywords and press Enter".to_string()),
            value: Vec::new(),
            max_keywords: None,
        },
        WidgetSpec {
            key: "max5".to_string(),
            label: Some("Enter up to 5 keywords".to_string()),
            text: Some("Add up to 5 keywords".to_string()),
            value: Vec::new(),
            max_keywords: Some(5),
        },
        WidgetSpec {
            key: "defaults".to_string(),
            label: Some("Edit your keywords".to_string()),
            text: Some("These keywords are pre-populated".to_string()),
            value: vec![
                "Streamlit".to_string(),
                "Python".to_string(),
                "Data Science".to_string(),
            ],
            max_keywords: None,
        },
    ]
}

/// Reads widget declarations from a RON file; keys must be present and unique.
pub fn load_widgets(path: &Path) -> anyhow::Result<Vec<WidgetSpec>> {
    let content = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
    let file: WidgetFile =
        ron::from_str(&content).with_context(|| format!("parsing {:?}", path))?;

    if file.widgets.is_empty() {
        bail!("{:?} declares no widgets", path);
    }
    let mut seen = HashSet::new();
    for widget in &file.widgets {
        if widget.key.trim().is_empty() {
            bail!("widget with empty key in {:?}", path);
        }
        if !seen.insert(widget.key.as_str()) {
            bail!("duplicate widget key {:?} in {:?}", widget.key, path);
        }
    }

    kw_info!("Loaded {} widgets from {:?}", file.widgets.len(), path);
    Ok(file.widgets)
}
