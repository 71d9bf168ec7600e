use crate::ids::SectionId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five supported CSS-affecting dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyKind {
    FontSize,
    LineHeight,
    FontWeight,
    FontFamily,
    Color,
}

/// The order in which properties are resolved and emitted inside a rule.
///
/// The relative order is arbitrary but must stay fixed so that repeated
/// renders of the same state produce byte-identical output.
pub const RESOLUTION_ORDER: [PropertyKind; 5] = [
    PropertyKind::FontSize,
    PropertyKind::LineHeight,
    PropertyKind::FontWeight,
    PropertyKind::FontFamily,
    PropertyKind::Color,
];

impl PropertyKind {
    /// Returns the CSS property name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::FontSize => "font-size",
            PropertyKind::LineHeight => "line-height",
            PropertyKind::FontWeight => "font-weight",
            PropertyKind::FontFamily => "font-family",
            PropertyKind::Color => "color",
        }
    }

    /// True for the kinds configured through a choice list rather than a
    /// free-form literal.
    pub fn is_choice(&self) -> bool {
        matches!(self, PropertyKind::FontWeight | PropertyKind::FontFamily)
    }

    /// The value-store key holding the user's stored value for this
    /// property of the given section.
    pub fn value_key(&self, section: &SectionId) -> String {
        format!("{}-{}", self.as_str(), section)
    }
}

/// The value-store key holding the fallback font choice for a section.
///
/// Only `font-family` carries a second, separately stored slot.
pub fn fallback_value_key(section: &SectionId) -> String {
    format!("font-family-fallback-{}", section)
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
