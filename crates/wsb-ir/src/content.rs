//! Rich-text extraction for TEXT components.
//!
//! Authored content arrives as an HTML fragment. Only the first recognized
//! tag survives translation; everything else is flattened into plain text and
//! re-rendered as a single annotated paragraph.

use scraper::{Html, Selector};

/// Recognized tags in priority order, paired with the WSB class each one
/// maps onto. The first tag present in the fragment wins.
const TAG_CLASSES: [(&str, &str); 5] = [
    ("span", "textpara"),
    ("h1", "textheading1"),
    ("h2", "textheading2"),
    ("h3", "textheading3"),
    ("p", "textpara"),
];

/// What survives of an authored HTML fragment: the winning tag's WSB class,
/// its flattened text, and the first inline `style` attribute in the
/// fragment. All fields are empty when no recognized tag matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub tag_class: String,
    pub content: String,
    pub style: String,
}

impl Extraction {
    /// Renders the extraction back into the canonical single-paragraph form
    /// stored on a TEXT component.
    pub fn to_html(&self) -> String {
        format!(
            "<p class=\"{}\" style=\"{}\"><span>{}</span></p>",
            self.tag_class, self.style, self.content
        )
    }
}

/// Scans `html` for the highest-priority recognized tag and pulls out its
/// class, text, and the fragment's first inline style. A fragment with no
/// recognized tag extracts to empty fields, style included.
pub fn extract(html: &str) -> Extraction {
    let fragment = Html::parse_fragment(html);
    let mut extraction = Extraction::default();

    for (tag, class) in TAG_CLASSES {
        let Ok(selector) = Selector::parse(tag) else {
            continue;
        };
        if let Some(element) = fragment.select(&selector).next() {
            extraction.tag_class = class.to_string();
            extraction.content = element.text().collect::<String>().trim().to_string();
            break;
        }
    }
    if extraction.tag_class.is_empty() {
        return extraction;
    }

    if let Ok(selector) = Selector::parse("[style]") {
        if let Some(element) = fragment.select(&selector).next() {
            if let Some(style) = element.value().attr("style") {
                extraction.style = style.trim().to_string();
            }
        }
    }

    extraction
}

/// Convenience wrapper: extract and immediately re-render.
pub fn render(html: &str) -> String {
    extract(html).to_html()
}
