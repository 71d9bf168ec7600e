//! The style-section registry.
//!
//! Owns the mapping from section id to normalized section definition.
//! Validation, default merging and named-choice resolution all happen
//! here, at registration time, so the render path works on fully
//! resolved data and never branches on input shape.

mod defaults;
mod error;
mod panel;
mod registry;

pub use defaults::{system_fonts, system_weights};
pub use error::RegistryError;
pub use panel::panel;
pub use registry::FontRegistry;
