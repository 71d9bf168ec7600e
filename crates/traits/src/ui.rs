//! Control descriptors handed to the host's settings UI.
//!
//! The core only builds this structure; presenting the controls and
//! persisting their values is the host's concern.

use serde::{Deserialize, Serialize};

/// The kind of control the settings UI should present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlKind {
    /// Free-form text input (font-size, line-height).
    Text,
    /// Color picker (color).
    ColorPicker,
    /// Select box over a fixed choice list (font-weight, font-family).
    Select,
}

/// One named control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    /// The value-store key this control reads and writes.
    pub key: String,
    pub label: String,
    pub description: String,
    pub kind: ControlKind,
    /// `(id, display name)` pairs for select controls; empty otherwise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<(String, String)>,
    /// Value preseeding the control when nothing is stored yet.
    pub default: String,
}

/// The controls of one registered section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionControls {
    pub id: String,
    pub title: String,
    pub description: String,
    pub controls: Vec<Control>,
}

/// The full settings panel derived from a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub sections: Vec<SectionControls>,
}

/// A host-side consumer of the settings panel.
pub trait UiRegistrar {
    /// Registers the panel with the host's configuration UI.
    fn register_panel(&mut self, panel: &PanelSpec);
}
