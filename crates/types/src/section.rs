//! The normalized, immutable section definition stored by the registry.

use crate::choice::FontChoice;
use crate::ids::SectionId;
use crate::kind::PropertyKind;
use serde::{Deserialize, Serialize};

/// Configuration of an enabled free-form property (font-size,
/// line-height, color).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LiteralProperty {
    /// Section-specific control default. Seeds the settings UI only;
    /// never consulted at render time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Configuration of an enabled choice-based property (font-weight,
/// font-family).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceProperty {
    pub choices: Vec<FontChoice>,
    /// Default choice id for the settings UI control, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ChoiceProperty {
    /// Looks up a choice by its id.
    pub fn find(&self, id: &str) -> Option<&FontChoice> {
        self.choices.iter().find(|choice| choice.id == id)
    }
}

/// One registered customization unit: a CSS selector plus the property
/// configuration exposed for it.
///
/// A `None` property field means the property is disabled for this
/// section. Sections are built once by the registry's `add` operation and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    /// Opaque CSS selector, possibly a comma-separated list. Passed
    /// through verbatim, never parsed.
    pub selector: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<LiteralProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<LiteralProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<ChoiceProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<ChoiceProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<LiteralProperty>,
}

impl Section {
    /// The literal-property configuration for `kind`, if that kind is
    /// literal-valued and enabled.
    pub fn literal(&self, kind: PropertyKind) -> Option<&LiteralProperty> {
        match kind {
            PropertyKind::FontSize => self.font_size.as_ref(),
            PropertyKind::LineHeight => self.line_height.as_ref(),
            PropertyKind::Color => self.color.as_ref(),
            _ => None,
        }
    }

    /// The choice-property configuration for `kind`, if that kind is
    /// choice-valued and enabled.
    pub fn choices(&self, kind: PropertyKind) -> Option<&ChoiceProperty> {
        match kind {
            PropertyKind::FontWeight => self.font_weight.as_ref(),
            PropertyKind::FontFamily => self.font_family.as_ref(),
            _ => None,
        }
    }

    /// True if `kind` is enabled for this section.
    pub fn has(&self, kind: PropertyKind) -> bool {
        self.literal(kind).is_some() || self.choices(kind).is_some()
    }
}
