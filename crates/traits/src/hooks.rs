//! Pluggable filter hooks applied during registration.
//!
//! The host can rewrite the system default choice lists, the merged
//! registration arguments and the process-wide defaults by implementing
//! this trait. Every method is a pure transformation with an identity
//! default, so a host with no customizations passes [`NoopHooks`].

use typetune_types::{FontChoice, RegistryConfig, RenderDefaults, SectionArgs};

/// Identifying data of the section currently being registered, passed to
/// the per-section hooks.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    /// Normalized section id.
    pub id: &'a str,
    pub selector: &'a str,
    pub title: &'a str,
}

/// Registration-time filter hooks.
///
/// Call order within a single `add`: `filter_default_fonts` and
/// `filter_default_weights` run before bare names in caller-supplied
/// lists are resolved; `filter_args` runs on the fully merged and
/// resolved arguments just before the section is stored.
/// `filter_defaults` runs once, at registry construction.
pub trait FilterHooks: Send + Sync {
    /// Rewrites the system default font list for one section.
    fn filter_default_fonts(
        &self,
        fonts: Vec<FontChoice>,
        _section: &SectionContext<'_>,
        _args: &SectionArgs,
    ) -> Vec<FontChoice> {
        fonts
    }

    /// Rewrites the system default font-weight list for one section.
    fn filter_default_weights(
        &self,
        weights: Vec<FontChoice>,
        _section: &SectionContext<'_>,
        _args: &SectionArgs,
    ) -> Vec<FontChoice> {
        weights
    }

    /// Rewrites the merged arguments before the section is stored.
    fn filter_args(&self, args: SectionArgs, _section: &SectionContext<'_>) -> SectionArgs {
        args
    }

    /// Rewrites the process-wide defaults at registry construction.
    fn filter_defaults(
        &self,
        defaults: RenderDefaults,
        _config: &RegistryConfig,
    ) -> RenderDefaults {
        defaults
    }
}

/// The identity hook set.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl FilterHooks for NoopHooks {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_hooks_are_identity() {
        let hooks = NoopHooks;
        let section = SectionContext { id: "body", selector: "p", title: "Body" };

        let fonts = vec![FontChoice::new("arial", "Arial", "Arial")];
        assert_eq!(hooks.filter_default_fonts(fonts.clone(), &section, &SectionArgs::new()), fonts);

        let args = SectionArgs::new().font_size(false);
        assert_eq!(hooks.filter_args(args.clone(), &section), args);

        let defaults = RenderDefaults::default();
        assert_eq!(
            hooks.filter_defaults(defaults.clone(), &RegistryConfig::default()),
            defaults
        );
    }
}
