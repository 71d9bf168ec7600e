//! Resolves stored user values into a deterministic stylesheet.
//!
//! The renderer is a pure read over a populated registry and the host's
//! value store: it resolves choice ids to CSS literals, deduplicates
//! external font links and serializes one rule per selector. Lookup
//! misses are never errors; a partially configured section renders
//! whatever subset is resolvable.

mod output;
mod render;

pub use output::RenderedOutput;
pub use render::render;
