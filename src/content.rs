//! Flattening a navigation container into the parser's input sequence.
//!
//! Every `h1`-`h4` and `p` descendant of the container becomes one
//! [`ContentElement`], in document order (nested matches included, as with
//! `querySelectorAll("h1, h2, h3, h4, p")`).

use url::Url;

use crate::dom::{ArenaDom, ArenaNodeId};
use crate::model::Icon;

/// Default marker class for icon elements.
pub const DEFAULT_ICON_CLASS: &str = "icon";

/// Heading depth, restricted to the four levels the navigation supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const L1: HeadingLevel = HeadingLevel(1);
    pub const L2: HeadingLevel = HeadingLevel(2);
    pub const L3: HeadingLevel = HeadingLevel(3);
    pub const L4: HeadingLevel = HeadingLevel(4);

    /// `None` outside 1..=4.
    pub fn new(level: u8) -> Option<Self> {
        (1..=4).contains(&level).then_some(Self(level))
    }

    /// Level for a tag name such as `h3`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(Self::L1),
            "h2" => Some(Self::L2),
            "h3" => Some(Self::L3),
            "h4" => Some(Self::L4),
            _ => None,
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// One element of the flat heading/paragraph sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentElement {
    Heading {
        level: HeadingLevel,
        text: String,
        /// Href of the first anchor inside the heading.
        link: Option<String>,
        icon: Option<Icon>,
    },
    Paragraph {
        text: String,
        /// Href of the first anchor inside the paragraph.
        link: Option<String>,
    },
}

impl ContentElement {
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
            link: None,
            icon: None,
        }
    }

    pub fn linked_heading(level: HeadingLevel, text: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
            link: Some(href.into()),
            icon: None,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph {
            text: text.into(),
            link: None,
        }
    }

    pub fn linked_paragraph(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Paragraph {
            text: text.into(),
            link: Some(href.into()),
        }
    }
}

/// How links and icons are read from the markup.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Base for resolving relative hrefs. Raw attribute values are kept when unset.
    pub base_url: Option<Url>,
    /// Class marking icon elements.
    pub icon_class: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            icon_class: DEFAULT_ICON_CLASS.to_string(),
        }
    }
}

impl ExtractOptions {
    pub fn with_base_url(mut self, base: Url) -> Self {
        self.base_url = Some(base);
        self
    }

    /// Resolve an attribute value against the base URL.
    pub fn resolve(&self, raw: &str) -> String {
        match &self.base_url {
            Some(base) => base
                .join(raw)
                .map(String::from)
                .unwrap_or_else(|_| raw.to_string()),
            None => raw.to_string(),
        }
    }
}

/// Collect the heading/paragraph sequence under `container`.
pub fn collect_elements(
    dom: &ArenaDom,
    container: ArenaNodeId,
    options: &ExtractOptions,
) -> Vec<ContentElement> {
    let mut elements = Vec::new();

    for id in dom.descendants(container) {
        let Some(tag) = dom.element_name(id) else {
            continue;
        };

        if tag.as_ref() == "p" {
            elements.push(ContentElement::Paragraph {
                text: dom.text_content(id).trim().to_string(),
                link: first_link(dom, id, options),
            });
        } else if let Some(level) = HeadingLevel::from_tag(tag.as_ref()) {
            elements.push(ContentElement::Heading {
                level,
                text: dom.text_content(id).trim().to_string(),
                link: first_link(dom, id, options),
                icon: first_icon(dom, id, options),
            });
        }
    }

    elements
}

/// Href of the first `<a>` under `id`; an anchor without `href` yields `""`.
fn first_link(dom: &ArenaDom, id: ArenaNodeId, options: &ExtractOptions) -> Option<String> {
    let anchor = dom.find_descendant(id, |n| dom.has_tag(n, "a"))?;
    Some(match dom.get_attr(anchor, "href") {
        Some(raw) => options.resolve(raw),
        None => String::new(),
    })
}

fn first_icon(dom: &ArenaDom, id: ArenaNodeId, options: &ExtractOptions) -> Option<Icon> {
    let marker = dom.find_descendant(id, |n| dom.has_class(n, &options.icon_class))?;

    let prefix = format!("{}-", options.icon_class);
    let name = dom
        .element_classes(marker)
        .iter()
        .find_map(|c| c.strip_prefix(&prefix))
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    let src = dom
        .find_descendant(marker, |n| dom.has_tag(n, "img"))
        .and_then(|img| dom.get_attr(img, "src"))
        .filter(|src| !src.is_empty())
        .map(|src| options.resolve(src));

    Some(Icon {
        name,
        src,
        svg: None,
    })
}
