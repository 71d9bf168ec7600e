pub mod hooks;
pub mod ui;
pub mod value_store;

pub use hooks::{FilterHooks, NoopHooks, SectionContext};
pub use ui::{Control, ControlKind, PanelSpec, SectionControls, UiRegistrar};
pub use value_store::{InMemoryValueStore, ValueStore};
