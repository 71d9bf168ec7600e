use crate::output::RenderedOutput;
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt::Write;
use typetune_registry::FontRegistry;
use typetune_traits::ValueStore;
use typetune_types::{fallback_value_key, PropertyKind, Section, RESOLUTION_ORDER};

/// Renders the current stored values of every registered section.
///
/// Pure and uncached; expected to be called once per page render. Only
/// explicitly stored values produce declarations: the configured section
/// and process defaults seed the settings UI, never this output. Sections
/// sharing a selector string merge into one rule, later registrations
/// overwriting earlier ones on a property collision.
pub fn render(registry: &FontRegistry, store: &dyn ValueStore) -> RenderedOutput {
    if registry.is_empty() {
        return RenderedOutput::default();
    }

    // Rules keyed by verbatim selector string, in first-occurrence order.
    let mut rules: Vec<(&str, Vec<(PropertyKind, String)>)> = Vec::new();
    let mut rule_index: HashMap<&str, usize> = HashMap::new();
    let mut links: Vec<String> = Vec::new();

    for section in registry.sections() {
        for kind in RESOLUTION_ORDER {
            let Some(value) = resolve(section, kind, store, &mut links) else {
                continue;
            };

            let position = *rule_index.entry(section.selector.as_str()).or_insert_with(|| {
                rules.push((section.selector.as_str(), Vec::new()));
                rules.len() - 1
            });
            let declarations = &mut rules[position].1;
            match declarations.iter_mut().find(|(existing, _)| *existing == kind) {
                Some(declaration) => declaration.1 = value,
                None => declarations.push((kind, value)),
            }
        }
    }

    if rules.is_empty() {
        log::debug!("{} section(s) registered but no stored values resolved", registry.len());
        return RenderedOutput::default();
    }

    let mut css = String::new();
    for (selector, declarations) in &rules {
        let _ = write!(css, "{}{{", selector);
        for (kind, value) in declarations {
            let _ = write!(css, "{}:{};", kind, value);
        }
        css.push('}');
    }

    RenderedOutput {
        links: links.into_iter().unique().collect(),
        css,
        typekit: registry.typekit().map(str::to_string),
    }
}

/// Resolves one property of one section to its CSS literal, queueing any
/// external font links on the way. `None` means "emit no declaration".
fn resolve(
    section: &Section,
    kind: PropertyKind,
    store: &dyn ValueStore,
    links: &mut Vec<String>,
) -> Option<String> {
    match kind {
        PropertyKind::FontSize | PropertyKind::LineHeight | PropertyKind::Color => {
            section.literal(kind)?;
            store.get(&kind.value_key(&section.id)).filter(|value| !value.is_empty())
        }
        PropertyKind::FontWeight => {
            let property = section.choices(kind)?;
            let stored = store.get(&kind.value_key(&section.id)).filter(|id| !id.is_empty())?;
            match property.find(&stored) {
                Some(choice) => Some(choice.value.clone()),
                None => {
                    log::debug!(
                        "section '{}': stored font-weight id '{}' has no matching choice",
                        section.id,
                        stored
                    );
                    None
                }
            }
        }
        PropertyKind::FontFamily => {
            let property = section.choices(kind)?;
            let stored = store.get(&kind.value_key(&section.id)).filter(|id| !id.is_empty())?;
            let primary = match property.find(&stored) {
                Some(choice) => choice,
                None => {
                    log::debug!(
                        "section '{}': stored font-family id '{}' has no matching choice",
                        section.id,
                        stored
                    );
                    return None;
                }
            };
            if let Some(src) = &primary.src {
                links.push(src.clone());
            }

            let mut value = primary.value.clone();
            let fallback_id =
                store.get(&fallback_value_key(&section.id)).filter(|id| !id.is_empty());
            if let Some(fallback) = fallback_id.and_then(|id| property.find(&id)) {
                if let Some(src) = &fallback.src {
                    links.push(src.clone());
                }
                // A fallback identical to the primary would only repeat it.
                if fallback.value != primary.value {
                    value.push(',');
                    value.push_str(&fallback.value);
                }
            }
            Some(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typetune_registry::FontRegistry;
    use typetune_traits::InMemoryValueStore;
    use typetune_types::{ChoiceEntry, FontChoice, RegistryConfig, SectionArgs};

    fn registry() -> FontRegistry {
        FontRegistry::new(RegistryConfig::default())
    }

    #[test]
    fn test_zero_sections_render_empty() {
        let output = render(&registry(), &InMemoryValueStore::new());
        assert!(output.is_empty());
        assert!(output.links.is_empty());
        assert_eq!(output.typekit, None);
    }

    #[test]
    fn test_empty_value_store_renders_nothing() {
        let mut reg = registry();
        reg.add("body", "p", "Body", "", SectionArgs::new()).unwrap();
        reg.set_typekit("//use.typekit.net/abc.js");

        let output = render(&reg, &InMemoryValueStore::new());
        assert!(output.is_empty());
        // The no-declaration short-circuit drops the typekit too.
        assert_eq!(output.typekit, None);
    }

    #[test]
    fn test_single_weight_end_to_end() {
        let mut reg = registry();
        reg.add(
            "t1",
            "p",
            "Text",
            "",
            SectionArgs::new()
                .font_size(false)
                .line_height(false)
                .font_family(false)
                .color(false)
                .font_weight(vec![ChoiceEntry::Choice(FontChoice::new("b", "Bold", "bold"))]),
        )
        .unwrap();

        let store = InMemoryValueStore::new();
        store.set("font-weight-t1", "b");

        let output = render(&reg, &store);
        assert_eq!(output.css, "p{font-weight:bold;}");
        assert!(output.links.is_empty());
    }

    #[test]
    fn test_literal_values_render_verbatim() {
        let mut reg = registry();
        reg.add("body", "p", "Body", "", SectionArgs::new()).unwrap();

        let store = InMemoryValueStore::new();
        store.set("font-size-body", "16px");
        store.set("line-height-body", "1.6");
        store.set("color-body", "#333333");

        let output = render(&reg, &store);
        assert_eq!(output.css, "p{font-size:16px;line-height:1.6;color:#333333;}");
    }

    #[test]
    fn test_section_default_is_not_a_render_fallback() {
        // The explicit literal arg seeds the UI control only.
        let mut reg = registry();
        reg.add("body", "p", "Body", "", SectionArgs::new().font_size("16px")).unwrap();

        let output = render(&reg, &InMemoryValueStore::new());
        assert!(output.is_empty());
    }

    #[test]
    fn test_unknown_choice_id_is_skipped() {
        let mut reg = registry();
        reg.add("body", "p", "Body", "", SectionArgs::new()).unwrap();

        let store = InMemoryValueStore::new();
        store.set("font-weight-body", "no-such-weight");
        store.set("color-body", "#000");

        let output = render(&reg, &store);
        assert_eq!(output.css, "p{color:#000;}");
    }

    #[test]
    fn test_font_family_queues_link() {
        let mut reg = registry();
        reg.add("body", "p", "Body", "", SectionArgs::new()).unwrap();

        let store = InMemoryValueStore::new();
        store.set("font-family-body", "open-sans");

        let output = render(&reg, &store);
        assert_eq!(output.css, "p{font-family:\"Open Sans\";}");
        assert_eq!(output.links, vec!["https://fonts.googleapis.com/css?family=Open+Sans"]);
    }

    #[test]
    fn test_font_without_src_queues_no_link() {
        let mut reg = registry();
        reg.add(
            "body",
            "p",
            "Body",
            "",
            SectionArgs::new()
                .font_family(vec![ChoiceEntry::Choice(FontChoice::new("f", "Arial", "Arial"))]),
        )
        .unwrap();

        let store = InMemoryValueStore::new();
        store.set("font-family-body", "f");

        let output = render(&reg, &store);
        assert_eq!(output.css, "p{font-family:Arial;}");
        assert!(output.links.is_empty());
    }

    #[test]
    fn test_fallback_font_is_comma_joined() {
        let mut reg = registry();
        reg.add("body", "p", "Body", "", SectionArgs::new()).unwrap();

        let store = InMemoryValueStore::new();
        store.set("font-family-body", "roboto");
        store.set("font-family-fallback-body", "helvetica");

        let output = render(&reg, &store);
        assert_eq!(output.css, "p{font-family:\"Roboto\",Helvetica;}");
        assert_eq!(output.links, vec!["https://fonts.googleapis.com/css?family=Roboto"]);
    }

    #[test]
    fn test_fallback_equal_to_primary_is_dropped() {
        let mut reg = registry();
        reg.add("body", "p", "Body", "", SectionArgs::new()).unwrap();

        let store = InMemoryValueStore::new();
        store.set("font-family-body", "open-sans");
        store.set("font-family-fallback-body", "open-sans");

        let output = render(&reg, &store);
        assert_eq!(output.css, "p{font-family:\"Open Sans\";}");
        // One link, not two: dedup by first occurrence.
        assert_eq!(output.links.len(), 1);
    }

    #[test]
    fn test_fallback_alone_never_renders() {
        let mut reg = registry();
        reg.add("body", "p", "Body", "", SectionArgs::new()).unwrap();

        let store = InMemoryValueStore::new();
        store.set("font-family-fallback-body", "roboto");

        let output = render(&reg, &store);
        assert!(output.is_empty());
    }

    #[test]
    fn test_shared_resource_url_is_emitted_once() {
        let mut reg = registry();
        reg.add("body", "p", "Body", "", SectionArgs::new()).unwrap();
        reg.add("list", "li", "Lists", "", SectionArgs::new()).unwrap();

        let store = InMemoryValueStore::new();
        store.set("font-family-body", "open-sans");
        store.set("font-family-list", "open-sans");

        let output = render(&reg, &store);
        assert_eq!(output.links, vec!["https://fonts.googleapis.com/css?family=Open+Sans"]);
        assert!(output.css.contains("p{") && output.css.contains("li{"));
    }

    #[test]
    fn test_sections_with_same_selector_merge() {
        let mut reg = registry();
        reg.add("first", "p", "First", "", SectionArgs::new()).unwrap();
        reg.add("second", "p", "Second", "", SectionArgs::new()).unwrap();

        let store = InMemoryValueStore::new();
        store.set("font-size-first", "12px");
        store.set("font-size-second", "18px");
        store.set("color-first", "#111");

        let output = render(&reg, &store);
        // One rule; the later section wins the collision, the
        // non-colliding property survives.
        assert_eq!(output.css, "p{font-size:18px;color:#111;}");
    }

    #[test]
    fn test_typekit_appended_when_rules_render() {
        let mut reg = registry();
        reg.add("body", "p", "Body", "", SectionArgs::new()).unwrap();
        reg.set_typekit("//use.typekit.net/abc.js");

        let store = InMemoryValueStore::new();
        store.set("font-size-body", "16px");

        let output = render(&reg, &store);
        assert_eq!(output.typekit.as_deref(), Some("//use.typekit.net/abc.js"));
        assert!(output.to_html().ends_with("</script>"));
    }

    #[test]
    fn test_empty_stored_value_is_unset() {
        let mut reg = registry();
        reg.add("body", "p", "Body", "", SectionArgs::new()).unwrap();

        let store = InMemoryValueStore::new();
        store.set("font-size-body", "");
        store.set("font-weight-body", "");

        let output = render(&reg, &store);
        assert!(output.is_empty());
    }

    #[test]
    fn test_output_is_deterministic() {
        let mut reg = registry();
        reg.add("body", "p", "Body", "", SectionArgs::new()).unwrap();
        reg.add("list", "li", "Lists", "", SectionArgs::new()).unwrap();

        let store = InMemoryValueStore::new();
        store.set("font-size-body", "16px");
        store.set("font-family-list", "roboto");

        let first = render(&reg, &store);
        let second = render(&reg, &store);
        assert_eq!(first, second);
    }
}
