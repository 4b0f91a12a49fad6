//! Heading structure parser.
//!
//! Turns a flat, document-ordered run of headings and paragraphs into a
//! navigation forest up to four levels deep:
//!
//! ```text
//! h1 Products              Products
//! p  All our products  =>    description: "All our products"
//! h2 Software                Software
//! h3 Editors                   Editors
//! h4 Pro                         Pro
//! ```
//!
//! A single left-to-right scan keeps one open node per level (1-3) in an
//! [`OpenContext`]. Headings attach under the open node one level up or are
//! dropped; paragraphs annotate the deepest open node.

use crate::content::{ContentElement, ExtractOptions, HeadingLevel, collect_elements};
use crate::dom::{ArenaDom, ArenaNodeId};
use crate::model::{Icon, NavigationNode, OverviewLink};

/// Parse a heading/paragraph sequence into a navigation forest.
///
/// Never fails. Headings whose parent level is not open and paragraphs before
/// the first heading are dropped.
pub fn parse_heading_structure(elements: &[ContentElement]) -> Vec<NavigationNode> {
    let mut forest = Vec::new();
    let mut open = OpenContext::default();

    for element in elements {
        match element {
            ContentElement::Heading {
                level,
                text,
                link,
                icon,
            } => {
                open_heading(&mut forest, &mut open, *level, text, link, icon);
            }
            ContentElement::Paragraph { text, link } => {
                annotate(&mut forest, &open, text, link.as_deref());
            }
        }
    }

    forest
}

/// Collect the elements under `container` and parse them.
pub fn parse_container(
    dom: &ArenaDom,
    container: ArenaNodeId,
    options: &ExtractOptions,
) -> Vec<NavigationNode> {
    parse_heading_structure(&collect_elements(dom, container, options))
}

/// Positions of the currently open node at levels 1-3.
///
/// Each entry indexes into the child list of the level above (level 1 into
/// the forest). Open levels are always contiguous from level 1: `level2` is
/// only set while `level1` is, and `level3` only while `level2` is.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenContext {
    level1: Option<usize>,
    level2: Option<usize>,
    level3: Option<usize>,
}

impl OpenContext {
    fn open_level1(&mut self, index: usize) {
        *self = Self {
            level1: Some(index),
            level2: None,
            level3: None,
        };
    }

    fn open_level2(&mut self, index: usize) {
        self.level2 = Some(index);
        self.level3 = None;
    }

    fn open_level3(&mut self, index: usize) {
        self.level3 = Some(index);
    }

    /// Open node at `level` (1-3), if any.
    fn node_mut<'f>(
        &self,
        forest: &'f mut [NavigationNode],
        level: u8,
    ) -> Option<&'f mut NavigationNode> {
        let mut node = forest.get_mut(self.level1?)?;
        if level >= 2 {
            node = node.children.get_mut(self.level2?)?;
        }
        if level >= 3 {
            node = node.children.get_mut(self.level3?)?;
        }
        Some(node)
    }

    /// Deepest open level, if any heading has opened.
    fn depth(&self) -> Option<u8> {
        match (self.level1, self.level2, self.level3) {
            (Some(_), Some(_), Some(_)) => Some(3),
            (Some(_), Some(_), None) => Some(2),
            (Some(_), None, _) => Some(1),
            (None, _, _) => None,
        }
    }

    fn deepest_mut<'f>(&self, forest: &'f mut [NavigationNode]) -> Option<&'f mut NavigationNode> {
        self.node_mut(forest, self.depth()?)
    }
}

fn open_heading(
    forest: &mut Vec<NavigationNode>,
    open: &mut OpenContext,
    level: HeadingLevel,
    text: &str,
    link: &Option<String>,
    icon: &Option<Icon>,
) {
    let node = NavigationNode::new(level.get(), text, link.clone(), icon.clone());

    if level == HeadingLevel::L1 {
        forest.push(node);
        open.open_level1(forest.len() - 1);
        return;
    }

    // Level N attaches under the open node at N-1.
    let parent_level = level.get() - 1;
    let Some(parent) = open.node_mut(forest, parent_level) else {
        log::debug!("dropping h{} {text:?}: no open h{parent_level}", level.get());
        return;
    };

    parent.children.push(node);
    let index = parent.children.len() - 1;

    match level.get() {
        2 => {
            parent.has_submenu = Some(true);
            open.open_level2(index);
        }
        3 => open.open_level3(index),
        // Level 4 nodes are leaves and never become open.
        _ => {}
    }
}

fn annotate(forest: &mut [NavigationNode], open: &OpenContext, text: &str, link: Option<&str>) {
    let Some(node) = open.deepest_mut(forest) else {
        log::debug!("ignoring paragraph {text:?} before any heading");
        return;
    };

    match link {
        Some(href) => node.overview_link = Some(OverviewLink::new(text, href)),
        None => node.push_description(text),
    }
}
