//! typetune: a typography settings registry and CSS renderer.
//!
//! A host application registers named style sections (a CSS selector
//! plus a set of typographic properties), exposes the registered
//! properties as controls in its own settings UI, and at page-render
//! time turns the user's stored values into a stylesheet plus a
//! deduplicated list of external font links.
//!
//! The crates divide along that lifecycle:
//! - `typetune-types`: the normalized data model.
//! - `typetune-traits`: the injected collaborators (value store, filter
//!   hooks, UI registrar).
//! - `typetune-registry`: validation, default merging and named-choice
//!   resolution at registration time.
//! - `typetune-render`: the pure render pass.
//!
//! [`FontManager`] is the integration facade wiring those together for
//! the common single-registry host.
//!
//! # Example
//!
//! ```
//! use typetune::{FontManager, InMemoryValueStore, RegistryConfig, SectionArgs};
//!
//! let mut manager = FontManager::new(RegistryConfig::default());
//! manager
//!     .add("body", "p,li", "Text elements", "Font settings for texts.", SectionArgs::new())
//!     .unwrap();
//!
//! let store = InMemoryValueStore::new();
//! store.set("font-size-body", "16px");
//!
//! let output = manager.output(&store);
//! assert_eq!(output.css, "p,li{font-size:16px;}");
//! ```

pub use typetune_registry::{system_fonts, system_weights, FontRegistry, RegistryError};
pub use typetune_render::{render, RenderedOutput};
pub use typetune_traits::{
    Control, ControlKind, FilterHooks, InMemoryValueStore, NoopHooks, PanelSpec, SectionContext,
    SectionControls, UiRegistrar, ValueStore,
};
pub use typetune_types::{
    fallback_value_key, ChoiceArg, ChoiceEntry, ChoiceProperty, FontChoice, LiteralProperty,
    PropertyKind, RegistryConfig, RenderDefaults, Section, SectionArgs, SectionId, ToggleArg,
    RESOLUTION_ORDER,
};

/// The integration facade: one registry, one settings panel, one render
/// entry point.
///
/// Registration (`add`, `set_typekit`) happens during host
/// initialization; `output` and `controls` are pure reads afterwards.
#[derive(Debug)]
pub struct FontManager {
    registry: FontRegistry,
}

impl FontManager {
    pub fn new(config: RegistryConfig) -> Self {
        Self { registry: FontRegistry::new(config) }
    }

    pub fn with_hooks(config: RegistryConfig, hooks: Box<dyn FilterHooks>) -> Self {
        Self { registry: FontRegistry::with_hooks(config, hooks) }
    }

    /// Registers a style section. See [`FontRegistry::add`].
    pub fn add(
        &mut self,
        id: &str,
        selector: &str,
        title: &str,
        description: &str,
        args: SectionArgs,
    ) -> Result<(), RegistryError> {
        self.registry.add(id, selector, title, description, args)
    }

    /// Configures the typekit loader script URL; empty disables it.
    pub fn set_typekit(&mut self, url: &str) {
        self.registry.set_typekit(url);
    }

    /// Renders the stored values into stylesheet output.
    pub fn output(&self, store: &dyn ValueStore) -> RenderedOutput {
        log::debug!(
            "rendering {} section(s) from store '{}'",
            self.registry.len(),
            store.name()
        );
        render(&self.registry, store)
    }

    /// The settings panel for the registered sections, or `None` when
    /// nothing is registered.
    pub fn controls(&self) -> Option<PanelSpec> {
        typetune_registry::panel(&self.registry)
    }

    /// Hands the settings panel to the host's UI, if there is one.
    pub fn register_controls(&self, registrar: &mut dyn UiRegistrar) {
        if let Some(panel) = self.controls() {
            registrar.register_panel(&panel);
        }
    }

    pub fn registry(&self) -> &FontRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingRegistrar {
        panels: Vec<PanelSpec>,
    }

    impl UiRegistrar for RecordingRegistrar {
        fn register_panel(&mut self, panel: &PanelSpec) {
            self.panels.push(panel.clone());
        }
    }

    #[test]
    fn test_register_controls_skips_empty_registry() {
        let manager = FontManager::new(RegistryConfig::default());
        let mut registrar = RecordingRegistrar::default();
        manager.register_controls(&mut registrar);
        assert!(registrar.panels.is_empty());
    }

    #[test]
    fn test_register_controls_hands_over_panel() {
        let mut manager = FontManager::new(RegistryConfig::default());
        manager.add("body", "p", "Body", "", SectionArgs::new()).unwrap();

        let mut registrar = RecordingRegistrar::default();
        manager.register_controls(&mut registrar);
        assert_eq!(registrar.panels.len(), 1);
        assert_eq!(registrar.panels[0].sections[0].id, "body");
    }
}
