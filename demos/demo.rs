//! Walkthrough of the typetune surface: a basic section, a restricted
//! one, custom weight and family lists, typekit, and the rendered
//! output for a simulated set of stored user values.

use typetune::{
    ChoiceEntry, FontChoice, FontManager, InMemoryValueStore, RegistryConfig, SectionArgs,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut manager = FontManager::new(RegistryConfig { section_priority: 1 });
    manager.set_typekit("//use.typekit.net/qzc2ote.js");

    // Everything enabled with system defaults.
    manager.add(
        "my-id",
        "p,li",
        "Text elements",
        "Change the font settings for texts.",
        SectionArgs::new(),
    )?;

    // Headings keep everything except the size input.
    manager.add(
        "my-id2",
        "h1,h2,h1.entry-title,h2.entry-title",
        "Headings",
        "Change the font settings for headings.",
        SectionArgs::new().font_size(false),
    )?;

    // A custom weight list; bare names resolve against the defaults.
    manager.add(
        "my-id3",
        ".entry-content p",
        "Post text",
        "Change the font settings for the post texts.",
        SectionArgs::new().font_weight(vec![
            ChoiceEntry::Name("Normal 400".to_string()),
            ChoiceEntry::Name("Bold 600".to_string()),
            ChoiceEntry::Choice(FontChoice::new("slim", "Slim 200", "200")),
        ]),
    )?;

    // A custom font list with one externally loaded family.
    manager.add(
        "my-id4",
        "body h2.entry-title",
        "The post title",
        "Change the font settings for the post title.",
        SectionArgs::new().font_family(vec![
            ChoiceEntry::Choice(FontChoice::new("arial", "Arial", "Arial")),
            ChoiceEntry::Choice(
                FontChoice::new("baloo-da", "Baloo Da", "\"Baloo Da\", cursive")
                    .with_src("https://fonts.googleapis.com/css?family=Baloo+Da"),
            ),
        ]),
    )?;

    let panel = manager.controls().expect("sections are registered");
    println!("settings panel:\n{}\n", serde_json::to_string_pretty(&panel)?);

    // Simulate the values a user picked in the settings UI.
    let store = InMemoryValueStore::new();
    store.set("font-size-my-id", "16px");
    store.set("font-family-my-id", "open-sans");
    store.set("font-family-fallback-my-id", "helvetica");
    store.set("font-weight-my-id3", "slim");
    store.set("font-family-my-id4", "baloo-da");

    let output = manager.output(&store);
    println!("font links: {:?}", output.links);
    println!("stylesheet: {}", output.css);
    println!("html fragment:\n{}", output.to_html());

    Ok(())
}
