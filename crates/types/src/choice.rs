use serde::{Deserialize, Serialize};

/// One selectable named value for a choice-based property (font family or
/// font weight).
///
/// `value` is emitted verbatim into the generated CSS. `src` is only ever
/// set on font families that require an external stylesheet; a choice
/// without `src` never queues a resource load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontChoice {
    /// Unique within its choice list; stored in the value store when the
    /// user picks this choice.
    pub id: String,
    /// Human-readable label shown in the settings UI.
    pub name: String,
    /// The CSS literal, e.g. `"Open Sans"`, `bold` or `200`.
    pub value: String,
    /// External stylesheet URL loading the font, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl FontChoice {
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), value: value.into(), src: None }
    }

    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }
}
