//! System default choice lists.
//!
//! These are the lists a section receives when it enables font-family or
//! font-weight without supplying its own choices. Filter hooks may
//! rewrite them per section before bare-name resolution.

use typetune_types::FontChoice;

/// The system default font list.
pub fn system_fonts() -> Vec<FontChoice> {
    vec![
        FontChoice::new("open-sans", "Open Sans", "\"Open Sans\"")
            .with_src("https://fonts.googleapis.com/css?family=Open+Sans"),
        FontChoice::new("roboto", "Roboto", "\"Roboto\"")
            .with_src("https://fonts.googleapis.com/css?family=Roboto"),
        FontChoice::new("helvetica", "Helvetica", "Helvetica"),
    ]
}

/// The system default font-weight list.
pub fn system_weights() -> Vec<FontChoice> {
    vec![
        FontChoice::new("normal", "Normal 400", "normal"),
        FontChoice::new("bold", "Bold 600", "bold"),
    ]
}
