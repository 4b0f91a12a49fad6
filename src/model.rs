//! Navigation model: the forest handed to the menu renderers.
//!
//! Serialized field names follow the camelCase contract the renderers read
//! (`hasLink`, `overviewLink`, `hasSubmenu`).

use serde::Serialize;

/// Placeholder `href` for headings without a link.
pub const NO_LINK_HREF: &str = "#";

/// One entry of the navigation tree, at any level from 1 to 4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationNode {
    /// Heading level the node was built from (1-4).
    pub level: u8,
    /// Trimmed heading text.
    pub text: String,
    /// Link target, or `"#"` when the heading has no link.
    pub href: String,
    pub has_link: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Space-joined text of the plain paragraphs that followed the heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Call-to-action link from the last linked paragraph under the heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview_link: Option<OverviewLink>,
    pub children: Vec<NavigationNode>,
    /// Set on level-1 nodes only: true once a level-2 child is attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_submenu: Option<bool>,
}

impl NavigationNode {
    /// A fresh node with no description, overview link or children.
    pub fn new(level: u8, text: impl Into<String>, link: Option<String>, icon: Option<Icon>) -> Self {
        let has_link = link.is_some();
        Self {
            level,
            text: text.into(),
            href: link.unwrap_or_else(|| NO_LINK_HREF.to_string()),
            has_link,
            icon,
            description: None,
            overview_link: None,
            children: Vec::new(),
            has_submenu: (level == 1).then_some(false),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether a level-1 node opens a submenu. Always false below level 1.
    pub fn has_submenu(&self) -> bool {
        self.has_submenu.unwrap_or(false)
    }

    /// Append a plain paragraph's text to the description. An empty
    /// description counts as unset and is replaced.
    pub(crate) fn push_description(&mut self, text: &str) {
        match &mut self.description {
            Some(existing) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(text);
            }
            _ => self.description = Some(text.to_string()),
        }
    }

    /// Depth-first walk over this node and its descendants.
    pub fn walk(&self) -> impl Iterator<Item = &NavigationNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

/// A single call-to-action link attached to a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewLink {
    pub text: String,
    pub href: String,
    /// Always true; kept for parity with the renderer contract.
    pub has_link: bool,
}

impl OverviewLink {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            has_link: true,
        }
    }
}

/// Decorative icon attached to a heading.
///
/// A lightweight value copied out of the source markup; renderers clone it
/// freely. `svg` is filled in by [`crate::icons::enrich_icons`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    /// Name from an `icon-<name>` class, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Image source the icon was rendered from, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Inline SVG markup once resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
}

impl Icon {
    pub fn is_inline(&self) -> bool {
        self.svg.is_some()
    }
}

/// Iterate every node of a forest, depth first, in document order.
pub fn walk_forest(forest: &[NavigationNode]) -> impl Iterator<Item = &NavigationNode> {
    forest.iter().flat_map(NavigationNode::walk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_defaults() {
        let node = NavigationNode::new(2, "Services", None, None);
        assert_eq!(node.href, "#");
        assert!(!node.has_link);
        assert_eq!(node.has_submenu, None);

        let top = NavigationNode::new(1, "Home", Some("/".to_string()), None);
        assert!(top.has_link);
        assert_eq!(top.href, "/");
        assert_eq!(top.has_submenu, Some(false));
    }

    #[test]
    fn test_push_description_joins_with_space() {
        let mut node = NavigationNode::new(1, "A", None, None);
        node.push_description("first");
        node.push_description("second");
        assert_eq!(node.description.as_deref(), Some("first second"));
    }

    #[test]
    fn test_push_description_replaces_empty() {
        let mut node = NavigationNode::new(1, "A", None, None);
        node.push_description("");
        node.push_description("x");
        assert_eq!(node.description.as_deref(), Some("x"));
    }

    #[test]
    fn test_walk_is_document_order() {
        let mut a = NavigationNode::new(1, "A", None, None);
        let mut b = NavigationNode::new(2, "B", None, None);
        b.children.push(NavigationNode::new(3, "C", None, None));
        a.children.push(b);
        a.children.push(NavigationNode::new(2, "D", None, None));
        let forest = vec![a, NavigationNode::new(1, "E", None, None)];

        let texts: Vec<_> = walk_forest(&forest).map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B", "C", "D", "E"]);
    }
}
