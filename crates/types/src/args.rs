//! Caller-facing registration arguments.
//!
//! These mirror the loose input shapes the host is allowed to pass for
//! each property: a plain on/off flag, an explicit literal, or a custom
//! choice list whose entries may be bare display names resolved against
//! the system default list. The untagged deserializers let JSON
//! configuration use any of those shapes for the same key.

use crate::choice::FontChoice;
use serde::{Deserialize, Serialize};

/// Argument for the free-form literal kinds (font-size, line-height,
/// color).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToggleArg {
    /// Enable or disable the property; the process-wide default seeds the
    /// control.
    Enabled(bool),
    /// Enable the property and use this literal as the section's control
    /// default.
    Value(String),
}

impl ToggleArg {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, ToggleArg::Enabled(false))
    }
}

impl From<bool> for ToggleArg {
    fn from(enabled: bool) -> Self {
        ToggleArg::Enabled(enabled)
    }
}

impl From<&str> for ToggleArg {
    fn from(value: &str) -> Self {
        ToggleArg::Value(value.to_string())
    }
}

impl From<String> for ToggleArg {
    fn from(value: String) -> Self {
        ToggleArg::Value(value)
    }
}

/// One entry of a caller-supplied choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceEntry {
    /// A bare display name, resolved by exact match against the system
    /// default list at registration time.
    Name(String),
    /// A fully specified choice, used as-is.
    Choice(FontChoice),
}

/// Argument for the choice-based kinds (font-weight, font-family).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceArg {
    /// Enable with the full system default list, or disable.
    Enabled(bool),
    /// Enable with a custom list.
    List(Vec<ChoiceEntry>),
    /// Enable with a custom list and an explicit default choice id.
    Detailed {
        choices: Vec<ChoiceEntry>,
        #[serde(default)]
        default: Option<String>,
    },
}

impl From<bool> for ChoiceArg {
    fn from(enabled: bool) -> Self {
        ChoiceArg::Enabled(enabled)
    }
}

impl From<Vec<FontChoice>> for ChoiceArg {
    fn from(choices: Vec<FontChoice>) -> Self {
        ChoiceArg::List(choices.into_iter().map(ChoiceEntry::Choice).collect())
    }
}

impl From<Vec<ChoiceEntry>> for ChoiceArg {
    fn from(entries: Vec<ChoiceEntry>) -> Self {
        ChoiceArg::List(entries)
    }
}

/// Per-section registration arguments.
///
/// Every omitted property is enabled with system defaults, matching the
/// merge against the all-enabled default set performed at registration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SectionArgs {
    pub font_size: Option<ToggleArg>,
    pub line_height: Option<ToggleArg>,
    pub font_weight: Option<ChoiceArg>,
    pub font_family: Option<ChoiceArg>,
    pub color: Option<ToggleArg>,
}

impl SectionArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(mut self, arg: impl Into<ToggleArg>) -> Self {
        self.font_size = Some(arg.into());
        self
    }

    pub fn line_height(mut self, arg: impl Into<ToggleArg>) -> Self {
        self.line_height = Some(arg.into());
        self
    }

    pub fn font_weight(mut self, arg: impl Into<ChoiceArg>) -> Self {
        self.font_weight = Some(arg.into());
        self
    }

    pub fn font_family(mut self, arg: impl Into<ChoiceArg>) -> Self {
        self.font_family = Some(arg.into());
        self
    }

    pub fn color(mut self, arg: impl Into<ToggleArg>) -> Self {
        self.color = Some(arg.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_arg_accepts_bool_or_string() {
        let enabled: ToggleArg = serde_json::from_str("true").unwrap();
        assert_eq!(enabled, ToggleArg::Enabled(true));

        let literal: ToggleArg = serde_json::from_str("\"1.5em\"").unwrap();
        assert_eq!(literal, ToggleArg::Value("1.5em".to_string()));
        assert!(literal.is_enabled());
        assert!(!ToggleArg::Enabled(false).is_enabled());
    }

    #[test]
    fn test_choice_arg_accepts_bool_list_or_map() {
        let disabled: ChoiceArg = serde_json::from_str("false").unwrap();
        assert_eq!(disabled, ChoiceArg::Enabled(false));

        let list: ChoiceArg = serde_json::from_str(
            r#"["Bold 600", {"id":"slim","name":"Slim 200","value":"200"}]"#,
        )
        .unwrap();
        match list {
            ChoiceArg::List(entries) => {
                assert_eq!(entries[0], ChoiceEntry::Name("Bold 600".to_string()));
                assert!(matches!(&entries[1], ChoiceEntry::Choice(c) if c.value == "200"));
            }
            other => panic!("expected list, got {:?}", other),
        }

        let detailed: ChoiceArg = serde_json::from_str(
            r#"{"choices":["Normal 400"],"default":"normal"}"#,
        )
        .unwrap();
        assert!(matches!(
            detailed,
            ChoiceArg::Detailed { ref default, .. } if default.as_deref() == Some("normal")
        ));
    }

    #[test]
    fn test_section_args_from_kebab_case_json() {
        let args: SectionArgs = serde_json::from_str(
            r#"{"font-size":false,"font-weight":true,"line-height":"1.4"}"#,
        )
        .unwrap();
        assert_eq!(args.font_size, Some(ToggleArg::Enabled(false)));
        assert_eq!(args.font_weight, Some(ChoiceArg::Enabled(true)));
        assert_eq!(args.line_height, Some(ToggleArg::Value("1.4".to_string())));
        assert_eq!(args.font_family, None);
    }

    #[test]
    fn test_builder_shape() {
        let args = SectionArgs::new().font_size(false).color("#333333");
        assert_eq!(args.font_size, Some(ToggleArg::Enabled(false)));
        assert_eq!(args.color, Some(ToggleArg::Value("#333333".to_string())));
    }
}
