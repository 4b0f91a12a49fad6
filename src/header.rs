//! Header decoration: splitting a nav fragment and parsing its parts.
//!
//! A nav fragment is a sequence of top-level sections. By position they are
//! the brand, the navigation sections and the tools:
//!
//! ```html
//! <main>
//!   <div><p><a href="/">Acme</a></p></div>           <!-- brand -->
//!   <div><h1>Products</h1><h2>Software</h2></div>    <!-- sections -->
//!   <div><p><a href="/contact">Contact</a></p></div> <!-- tools -->
//! </main>
//! ```

use std::sync::Arc;

use serde::Serialize;

use crate::config::NavConfig;
use crate::content::ExtractOptions;
use crate::dom::{ArenaDom, ArenaNodeId, Selector, parse_html};
use crate::error::{Error, Result};
use crate::icons::{DirIconSource, EnrichReport, enrich_icons};
use crate::model::NavigationNode;
use crate::parser::parse_container;

/// Class marking a service-nav block inside the tools section.
pub const SERVICE_NAV_CLASS: &str = "service-nav";

/// Top-level sections of a nav fragment, by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavFragment {
    pub brand: Option<ArenaNodeId>,
    pub sections: Option<ArenaNodeId>,
    pub tools: Option<ArenaNodeId>,
    /// Sections past the first three, kept in order.
    pub extra: Vec<ArenaNodeId>,
}

impl NavFragment {
    /// Split the element children of `<main>` (or `<body>`).
    pub fn split(dom: &ArenaDom) -> Self {
        let root = dom
            .find_by_tag("main")
            .or_else(|| dom.find_by_tag("body"))
            .unwrap_or_else(|| dom.document());

        let mut children = dom.element_children(root);
        let brand = children.next();
        let sections = children.next();
        let tools = children.next();
        let extra: Vec<_> = children.collect();
        if !extra.is_empty() {
            log::debug!(
                "nav fragment has {} section(s) beyond brand/sections/tools",
                extra.len()
            );
        }

        Self {
            brand,
            sections,
            tools,
            extra,
        }
    }
}

/// A plain text link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Brand {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// A service-nav flyout: a title that toggles a body of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceNav {
    pub title: String,
    pub links: Vec<Link>,
    /// Trimmed text of the body.
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tools {
    /// Links outside any service-nav block.
    pub links: Vec<Link>,
    pub service_navs: Vec<ServiceNav>,
}

/// A decorated header: brand, navigation forest and tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Header {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
    pub navigation: Vec<NavigationNode>,
    pub tools: Tools,
}

impl Header {
    /// Build a header from a parsed nav fragment.
    pub fn from_dom(dom: &ArenaDom, config: &NavConfig) -> Result<Self> {
        let options = config.extract_options()?;
        let fragment = NavFragment::split(dom);

        let container = match &config.sections_selector {
            Some(source) => {
                let selector = Selector::parse(source)?;
                let found = selector
                    .select_first(dom, dom.document())
                    .ok_or_else(|| Error::ContainerNotFound(source.clone()))?;
                Some(found)
            }
            None => fragment.sections,
        };

        let navigation = match container {
            Some(container) => parse_container(dom, container, &options),
            None => {
                log::debug!("nav fragment has no sections section");
                Vec::new()
            }
        };

        Ok(Self {
            brand: fragment.brand.map(|id| brand(dom, id, &options)),
            navigation,
            tools: fragment
                .tools
                .map(|id| tools(dom, id, &options))
                .unwrap_or_default(),
        })
    }

    pub fn forest(&self) -> &[NavigationNode] {
        &self.navigation
    }

    pub fn forest_mut(&mut self) -> &mut [NavigationNode] {
        &mut self.navigation
    }

    /// Inline icons from the configured directory. `None` when no icon root
    /// is configured.
    pub fn enrich_icons(&mut self, config: &NavConfig) -> Option<EnrichReport> {
        let root = config.icons.root.as_ref()?;
        let source = Arc::new(DirIconSource::new(root));
        Some(enrich_icons(
            &mut self.navigation,
            source,
            config.icons.timeout(),
        ))
    }
}

/// Parse a nav fragment and build its header, inlining icons when an icon
/// root is configured.
pub fn decorate_header(html: &str, config: &NavConfig) -> Result<Header> {
    let dom = parse_html(html);
    let mut header = Header::from_dom(&dom, config)?;
    header.enrich_icons(config);
    Ok(header)
}

fn brand(dom: &ArenaDom, section: ArenaNodeId, options: &ExtractOptions) -> Brand {
    let href = dom
        .find_descendant(section, |n| dom.has_tag(n, "a"))
        .and_then(|a| dom.get_attr(a, "href"))
        .map(|raw| options.resolve(raw));

    Brand {
        text: dom.text_content(section).trim().to_string(),
        href,
    }
}

fn tools(dom: &ArenaDom, section: ArenaNodeId, options: &ExtractOptions) -> Tools {
    let mut tools = Tools::default();

    // Pre-order walk that stops at service-nav blocks.
    let mut stack: Vec<ArenaNodeId> = dom.element_children(section).collect();
    stack.reverse();
    while let Some(id) = stack.pop() {
        if dom.has_class(id, SERVICE_NAV_CLASS) {
            match service_nav(dom, id, options) {
                Some(nav) => tools.service_navs.push(nav),
                None => log::debug!("service-nav block without title and body ignored"),
            }
            continue;
        }
        if dom.has_tag(id, "a") {
            tools.links.push(link(dom, id, options));
        }
        let start = stack.len();
        stack.extend(dom.element_children(id));
        stack[start..].reverse();
    }

    tools
}

fn service_nav(
    dom: &ArenaDom,
    block: ArenaNodeId,
    options: &ExtractOptions,
) -> Option<ServiceNav> {
    let mut parts = dom.element_children(block);
    let title = parts.next()?;
    let body = parts.next()?;

    let links = dom
        .descendants(body)
        .filter(|&id| dom.has_tag(id, "a"))
        .map(|id| link(dom, id, options))
        .collect();

    Some(ServiceNav {
        title: dom.text_content(title).trim().to_string(),
        links,
        text: dom.text_content(body).trim().to_string(),
    })
}

fn link(dom: &ArenaDom, anchor: ArenaNodeId, options: &ExtractOptions) -> Link {
    Link {
        text: dom.text_content(anchor).trim().to_string(),
        href: dom
            .get_attr(anchor, "href")
            .map(|raw| options.resolve(raw))
            .unwrap_or_default(),
    }
}
