use crate::defaults::{system_fonts, system_weights};
use crate::error::RegistryError;
use std::collections::HashMap;
use std::fmt;
use typetune_traits::{FilterHooks, NoopHooks, SectionContext};
use typetune_types::{
    ChoiceArg, ChoiceEntry, ChoiceProperty, FontChoice, LiteralProperty, RegistryConfig,
    RenderDefaults, Section, SectionArgs, SectionId, ToggleArg,
};

/// The process-wide registry of style sections.
///
/// Expected lifecycle: populated once during host initialization, then
/// treated as read-only by the render and control-building paths. The
/// `&mut self` registration methods and `&self` read methods encode that
/// phase split in the type system.
pub struct FontRegistry {
    config: RegistryConfig,
    defaults: RenderDefaults,
    hooks: Box<dyn FilterHooks>,
    /// Sections in insertion order. Overwriting a duplicate id replaces
    /// the definition in place, keeping the original position.
    sections: Vec<Section>,
    index: HashMap<SectionId, usize>,
    typekit: Option<String>,
}

impl FontRegistry {
    /// Creates a registry with no filter hooks.
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_hooks(config, Box::new(NoopHooks))
    }

    /// Creates a registry with the given filter hooks.
    ///
    /// `filter_defaults` runs here, once, against the built-in defaults.
    pub fn with_hooks(config: RegistryConfig, hooks: Box<dyn FilterHooks>) -> Self {
        let defaults = hooks.filter_defaults(RenderDefaults::default(), &config);
        Self {
            config,
            defaults,
            hooks,
            sections: Vec::new(),
            index: HashMap::new(),
            typekit: None,
        }
    }

    /// Registers a style section.
    ///
    /// The raw `id` is normalized to `[a-z0-9_-]`; two raw ids that
    /// normalize identically address the same section, and registering an
    /// existing id overwrites the earlier definition (last write wins).
    ///
    /// Any property omitted from `args` is enabled with system defaults.
    /// Bare names in caller-supplied choice lists are resolved by exact
    /// display-name match against the (hook-filtered) system default
    /// list; an unmatched name rejects the whole section.
    pub fn add(
        &mut self,
        id: &str,
        selector: &str,
        title: &str,
        description: &str,
        args: SectionArgs,
    ) -> Result<(), RegistryError> {
        if id.trim().is_empty() {
            return Err(RegistryError::MissingField("id"));
        }
        if selector.trim().is_empty() {
            return Err(RegistryError::MissingField("selector"));
        }
        if title.trim().is_empty() {
            return Err(RegistryError::MissingField("title"));
        }

        let section_id = SectionId::new(id);
        if section_id.is_empty() {
            return Err(RegistryError::MissingField("id"));
        }

        let cx = SectionContext { id: section_id.as_str(), selector, title };

        // Merge against the all-enabled default set.
        let merged = SectionArgs {
            font_size: Some(args.font_size.unwrap_or(ToggleArg::Enabled(true))),
            line_height: Some(args.line_height.unwrap_or(ToggleArg::Enabled(true))),
            font_weight: Some(args.font_weight.unwrap_or(ChoiceArg::Enabled(true))),
            font_family: Some(args.font_family.unwrap_or(ChoiceArg::Enabled(true))),
            color: Some(args.color.unwrap_or(ToggleArg::Enabled(true))),
        };

        let fonts = self.hooks.filter_default_fonts(system_fonts(), &cx, &merged);
        let weights = self.hooks.filter_default_weights(system_weights(), &cx, &merged);

        // Resolve bare names before the args hook sees the arguments, so
        // the hook always observes fully specified choice lists.
        let resolved = SectionArgs {
            font_weight: Some(resolve_choice_arg(
                merged.font_weight.clone().unwrap_or(ChoiceArg::Enabled(true)),
                &weights,
                RegistryError::UnknownFontWeight,
            )?),
            font_family: Some(resolve_choice_arg(
                merged.font_family.clone().unwrap_or(ChoiceArg::Enabled(true)),
                &fonts,
                RegistryError::UnknownFont,
            )?),
            ..merged
        };

        let filtered = self.hooks.filter_args(resolved, &cx);

        let section = Section {
            id: section_id.clone(),
            selector: selector.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            font_size: filtered.font_size.and_then(normalize_toggle),
            line_height: filtered.line_height.and_then(normalize_toggle),
            font_weight: filtered
                .font_weight
                .map(|arg| normalize_choice_arg(arg, &weights, RegistryError::UnknownFontWeight))
                .transpose()?
                .flatten(),
            font_family: filtered
                .font_family
                .map(|arg| normalize_choice_arg(arg, &fonts, RegistryError::UnknownFont))
                .transpose()?
                .flatten(),
            color: filtered.color.and_then(normalize_toggle),
        };

        match self.index.get(&section_id) {
            Some(&position) => {
                log::debug!("overwriting section '{}' (selector '{}')", section_id, selector);
                self.sections[position] = section;
            }
            None => {
                log::debug!("registered section '{}' (selector '{}')", section_id, selector);
                self.index.insert(section_id, self.sections.len());
                self.sections.push(section);
            }
        }
        Ok(())
    }

    /// Stores the typekit script URL. An empty string disables typekit
    /// loading.
    pub fn set_typekit(&mut self, url: &str) {
        self.typekit = if url.is_empty() { None } else { Some(url.to_string()) };
    }

    /// The registered sections, in insertion order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a section; the raw id is normalized first.
    pub fn get(&self, id: &str) -> Option<&Section> {
        let section_id = SectionId::new(id);
        self.index.get(&section_id).map(|&position| &self.sections[position])
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn typekit(&self) -> Option<&str> {
        self.typekit.as_deref()
    }

    pub fn defaults(&self) -> &RenderDefaults {
        &self.defaults
    }

    pub fn section_priority(&self) -> i32 {
        self.config.section_priority
    }
}

impl fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRegistry")
            .field("config", &self.config)
            .field("defaults", &self.defaults)
            .field("sections", &self.sections)
            .field("typekit", &self.typekit)
            .finish_non_exhaustive()
    }
}

/// Resolves a choice argument into one where every list entry is a full
/// `FontChoice`, leaving enable/disable flags untouched.
fn resolve_choice_arg(
    arg: ChoiceArg,
    defaults: &[FontChoice],
    unknown: fn(String) -> RegistryError,
) -> Result<ChoiceArg, RegistryError> {
    match arg {
        ChoiceArg::Enabled(enabled) => Ok(ChoiceArg::Enabled(enabled)),
        ChoiceArg::List(entries) => Ok(ChoiceArg::List(
            resolve_entries(entries, defaults, unknown)?
                .into_iter()
                .map(ChoiceEntry::Choice)
                .collect(),
        )),
        ChoiceArg::Detailed { choices, default } => Ok(ChoiceArg::Detailed {
            choices: resolve_entries(choices, defaults, unknown)?
                .into_iter()
                .map(ChoiceEntry::Choice)
                .collect(),
            default,
        }),
    }
}

fn resolve_entries(
    entries: Vec<ChoiceEntry>,
    defaults: &[FontChoice],
    unknown: fn(String) -> RegistryError,
) -> Result<Vec<FontChoice>, RegistryError> {
    entries
        .into_iter()
        .map(|entry| match entry {
            ChoiceEntry::Choice(choice) => Ok(choice),
            ChoiceEntry::Name(name) => defaults
                .iter()
                .find(|candidate| candidate.name == name)
                .cloned()
                .ok_or_else(|| unknown(name)),
        })
        .collect()
}

/// Turns a (possibly hook-rewritten) choice argument into the stored
/// property configuration.
fn normalize_choice_arg(
    arg: ChoiceArg,
    defaults: &[FontChoice],
    unknown: fn(String) -> RegistryError,
) -> Result<Option<ChoiceProperty>, RegistryError> {
    match arg {
        ChoiceArg::Enabled(false) => Ok(None),
        ChoiceArg::Enabled(true) => {
            Ok(Some(ChoiceProperty { choices: defaults.to_vec(), default: None }))
        }
        ChoiceArg::List(entries) => Ok(Some(ChoiceProperty {
            choices: resolve_entries(entries, defaults, unknown)?,
            default: None,
        })),
        ChoiceArg::Detailed { choices, default } => Ok(Some(ChoiceProperty {
            choices: resolve_entries(choices, defaults, unknown)?,
            default,
        })),
    }
}

fn normalize_toggle(arg: ToggleArg) -> Option<LiteralProperty> {
    match arg {
        ToggleArg::Enabled(false) => None,
        ToggleArg::Enabled(true) => Some(LiteralProperty { default: None }),
        ToggleArg::Value(value) => Some(LiteralProperty { default: Some(value) }),
    }
}
