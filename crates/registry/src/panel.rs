//! Builds the settings-panel description handed to the host UI.

use crate::registry::FontRegistry;
use typetune_traits::{Control, ControlKind, PanelSpec, SectionControls};
use typetune_types::{fallback_value_key, ChoiceProperty, PropertyKind, Section, RESOLUTION_ORDER};

/// Derives the settings panel for every registered section.
///
/// Returns `None` when the registry is empty, mirroring the renderer's
/// no-section short-circuit. Each enabled property becomes one control
/// (two for font-family, which carries a separately stored fallback
/// slot). The control defaults come from the section's explicit default
/// where present, else the process-wide default; `color` deliberately
/// falls back to an empty default instead of the process-wide one.
pub fn panel(registry: &FontRegistry) -> Option<PanelSpec> {
    if registry.is_empty() {
        return None;
    }

    let sections = registry
        .sections()
        .iter()
        .map(|section| SectionControls {
            id: section.id.to_string(),
            title: section.title.clone(),
            description: section.description.clone(),
            controls: section_controls(registry, section),
        })
        .collect();

    Some(PanelSpec {
        title: "Fonts Manager".to_string(),
        description: "Manage the appearance of your fonts.".to_string(),
        priority: registry.section_priority(),
        sections,
    })
}

fn section_controls(registry: &FontRegistry, section: &Section) -> Vec<Control> {
    let defaults = registry.defaults();
    let mut controls = Vec::new();

    for kind in RESOLUTION_ORDER {
        match kind {
            PropertyKind::FontSize => {
                if let Some(property) = section.literal(kind) {
                    controls.push(Control {
                        key: kind.value_key(&section.id),
                        label: "Font size".to_string(),
                        description: "Change the font size of the element.".to_string(),
                        kind: ControlKind::Text,
                        choices: Vec::new(),
                        default: property
                            .default
                            .clone()
                            .unwrap_or_else(|| defaults.font_size.clone()),
                    });
                }
            }
            PropertyKind::LineHeight => {
                if let Some(property) = section.literal(kind) {
                    controls.push(Control {
                        key: kind.value_key(&section.id),
                        label: "Line height".to_string(),
                        description: "Change the line height of the element.".to_string(),
                        kind: ControlKind::Text,
                        choices: Vec::new(),
                        default: property
                            .default
                            .clone()
                            .unwrap_or_else(|| defaults.line_height.clone()),
                    });
                }
            }
            PropertyKind::FontWeight => {
                if let Some(property) = section.choices(kind) {
                    controls.push(Control {
                        key: kind.value_key(&section.id),
                        label: "Font weight".to_string(),
                        description: "Change the font weight of the element.".to_string(),
                        kind: ControlKind::Select,
                        choices: choice_pairs(property),
                        default: property
                            .default
                            .clone()
                            .unwrap_or_else(|| defaults.font_weight.clone()),
                    });
                }
            }
            PropertyKind::FontFamily => {
                if let Some(property) = section.choices(kind) {
                    let pairs = choice_pairs(property);
                    controls.push(Control {
                        key: kind.value_key(&section.id),
                        label: "Font family".to_string(),
                        description: "Change the font family of the element.".to_string(),
                        kind: ControlKind::Select,
                        choices: pairs.clone(),
                        default: property
                            .default
                            .clone()
                            .unwrap_or_else(|| defaults.font_family.clone()),
                    });
                    controls.push(Control {
                        key: fallback_value_key(&section.id),
                        label: "Font fallback".to_string(),
                        description: "Change the fallback font of the element.".to_string(),
                        kind: ControlKind::Select,
                        choices: pairs,
                        default: String::new(),
                    });
                }
            }
            PropertyKind::Color => {
                if let Some(property) = section.literal(kind) {
                    // Unlike size and line-height, color only honors an
                    // explicitly set section default.
                    controls.push(Control {
                        key: kind.value_key(&section.id),
                        label: "Color".to_string(),
                        description: "Change the text color of the element.".to_string(),
                        kind: ControlKind::ColorPicker,
                        choices: Vec::new(),
                        default: property.default.clone().unwrap_or_default(),
                    });
                }
            }
        }
    }

    controls
}

fn choice_pairs(property: &ChoiceProperty) -> Vec<(String, String)> {
    property
        .choices
        .iter()
        .map(|choice| (choice.id.clone(), choice.name.clone()))
        .collect()
}
