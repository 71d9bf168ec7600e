use serde::{Deserialize, Serialize};

/// Process-wide default values per property kind.
///
/// These seed the initial control values in the settings UI. They are
/// never consulted at render time: only an explicitly stored value
/// produces a CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RenderDefaults {
    pub font_size: String,
    pub line_height: String,
    /// Default *choice id* for the font-weight select, not a CSS literal.
    pub font_weight: String,
    pub font_family: String,
    pub color: String,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            font_size: String::new(),
            line_height: "1".to_string(),
            font_weight: "normal".to_string(),
            font_family: String::new(),
            color: String::new(),
        }
    }
}
