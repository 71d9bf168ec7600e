use serde::{Deserialize, Serialize};

/// Construction-time configuration for a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RegistryConfig {
    /// Priority of the settings panel inside the host's configuration UI.
    pub section_priority: i32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { section_priority: 40 }
    }
}
