use std::fmt::Write;

/// The composed result of one render pass.
///
/// `links` holds the deduplicated external font stylesheet URLs in first
/// occurrence order. `css` is the serialized stylesheet, one rule per
/// selector. `typekit` is only set when a typekit URL is configured and
/// at least one rule rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedOutput {
    pub links: Vec<String>,
    pub css: String,
    pub typekit: Option<String>,
}

impl RenderedOutput {
    /// True when nothing resolved: no stylesheet, no links, no typekit.
    pub fn is_empty(&self) -> bool {
        self.css.is_empty()
    }

    /// Serializes the output as an HTML fragment: one `<link>` per font
    /// URL, the `<style>` block, then the typekit loader scripts.
    ///
    /// An empty render produces an empty fragment.
    pub fn to_html(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut html = String::new();
        for link in &self.links {
            let _ = write!(
                html,
                "<link class=\"typetune-font\" rel=\"stylesheet\" href=\"{}\">",
                link
            );
        }
        let _ = write!(html, "<style id=\"typetune\">{}</style>", self.css);
        if let Some(typekit) = &self.typekit {
            let _ = write!(
                html,
                "<script src=\"{}\"></script><script>try{{Typekit.load();}}catch(e){{}}</script>",
                typekit
            );
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output_is_empty_fragment() {
        assert!(RenderedOutput::default().is_empty());
        assert_eq!(RenderedOutput::default().to_html(), "");
    }

    #[test]
    fn test_fragment_order_links_style_script() {
        let output = RenderedOutput {
            links: vec!["https://fonts.example/a".to_string()],
            css: "p{font-weight:bold;}".to_string(),
            typekit: Some("//use.typekit.net/abc.js".to_string()),
        };
        let html = output.to_html();
        let link_at = html.find("<link").unwrap();
        let style_at = html.find("<style").unwrap();
        let script_at = html.find("<script").unwrap();
        assert!(link_at < style_at && style_at < script_at);
        assert!(html.contains("<style id=\"typetune\">p{font-weight:bold;}</style>"));
        assert!(html.contains("try{Typekit.load();}catch(e){}"));
    }
}
