pub mod args;
pub mod choice;
pub mod config;
pub mod defaults;
pub mod ids;
pub mod kind;
pub mod section;

pub use args::{ChoiceArg, ChoiceEntry, SectionArgs, ToggleArg};
pub use choice::FontChoice;
pub use config::RegistryConfig;
pub use defaults::RenderDefaults;
pub use ids::SectionId;
pub use kind::{fallback_value_key, PropertyKind, RESOLUTION_ORDER};
pub use section::{ChoiceProperty, LiteralProperty, Section};
