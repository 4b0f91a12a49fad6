//! Desktop mega-menu.
//!
//! One level-1 item is expanded at a time. An expanded item with a submenu
//! shows up to three panels: its level-2 items on the left, the active
//! level-2 item's children in the middle, and the active level-3 item's
//! children on the right.

use super::Key;
use crate::model::{NavigationNode, OverviewLink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Active {
    level1: usize,
    level2: Option<usize>,
    level3: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct MegaMenu<'a> {
    forest: &'a [NavigationNode],
    active: Option<Active>,
}

/// What the open mega-menu shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panels<'a> {
    pub left: LeftPanel<'a>,
    /// Present iff the active level-2 item has children.
    pub middle: Option<ItemPanel<'a>>,
    /// Present iff a level-3 item is active.
    pub right: Option<ItemPanel<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeftPanel<'a> {
    /// Description of the expanded level-1 item.
    pub description: Option<&'a str>,
    pub items: &'a [NavigationNode],
    pub active: Option<usize>,
    /// Description of the active level-2 item.
    pub active_description: Option<&'a str>,
    pub overview_link: Option<&'a OverviewLink>,
}

/// Middle or right panel: a header, the items under it, and its overview link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPanel<'a> {
    pub header: &'a str,
    pub items: &'a [NavigationNode],
    pub active: Option<usize>,
    pub overview_link: Option<&'a OverviewLink>,
}

impl<'a> MegaMenu<'a> {
    pub fn new(forest: &'a [NavigationNode]) -> Self {
        Self {
            forest,
            active: None,
        }
    }

    pub fn forest(&self) -> &'a [NavigationNode] {
        self.forest
    }

    /// Toggle level-1 item `index`.
    ///
    /// Expanding an item closes any other first; an item with a submenu then
    /// auto-activates its first level-2 child.
    pub fn activate_level1(&mut self, index: usize) {
        if index >= self.forest.len() {
            return;
        }
        if self.is_expanded(index) {
            self.close_all();
            return;
        }

        self.close_all();
        self.active = Some(Active {
            level1: index,
            level2: None,
            level3: None,
        });
        if self.is_open() {
            self.activate_level2(0);
        }
    }

    /// Level-1 click. Clicks only drive the mega-menu on desktop.
    pub fn click_level1(&mut self, index: usize, is_desktop: bool) {
        if is_desktop {
            self.activate_level1(index);
        }
    }

    /// Level-1 key press: Enter or Space toggles on desktop.
    pub fn key_level1(&mut self, index: usize, key: Key, is_desktop: bool) {
        if is_desktop && key.is_activation() {
            self.activate_level1(index);
        }
    }

    /// Activate level-2 item `index` of the open menu.
    ///
    /// Clears level 3, then auto-activates the first level-3 child that has
    /// children of its own.
    pub fn activate_level2(&mut self, index: usize) {
        let Some(level1) = self.open_item() else {
            return;
        };
        let Some(level2) = level1.children.get(index) else {
            return;
        };
        let Some(active) = self.active.as_mut() else {
            return;
        };

        active.level2 = Some(index);
        active.level3 = level2.children.iter().position(NavigationNode::has_children);
    }

    /// Activate level-3 item `index`; a no-op for items without children.
    pub fn activate_level3(&mut self, index: usize) {
        let has_children = self
            .active_level2()
            .and_then(|level2| level2.children.get(index))
            .is_some_and(NavigationNode::has_children);

        if let (true, Some(active)) = (has_children, self.active.as_mut()) {
            active.level3 = Some(index);
        }
    }

    pub fn close_all(&mut self) {
        self.active = None;
    }

    /// Escape closes the menu on desktop.
    pub fn escape(&mut self, is_desktop: bool) {
        if is_desktop {
            self.close_all();
        }
    }

    /// A click outside the menu closes it on desktop.
    pub fn outside_click(&mut self, is_desktop: bool) {
        if is_desktop {
            self.close_all();
        }
    }

    /// Leaving the desktop breakpoint closes the menu.
    pub fn viewport_changed(&mut self, is_desktop: bool) {
        if !is_desktop {
            self.close_all();
        }
    }

    /// `aria-expanded` of level-1 item `index`.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.active.is_some_and(|a| a.level1 == index)
    }

    /// Whether the mega-menu content is showing. An expanded item without a
    /// submenu has nothing to show.
    pub fn is_open(&self) -> bool {
        self.open_item().is_some()
    }

    pub fn active_level2(&self) -> Option<&'a NavigationNode> {
        let index = self.active?.level2?;
        self.open_item()?.children.get(index)
    }

    pub fn active_level3(&self) -> Option<&'a NavigationNode> {
        let index = self.active?.level3?;
        self.active_level2()?.children.get(index)
    }

    /// The panels of the open menu, or `None` when it is closed.
    pub fn panels(&self) -> Option<Panels<'a>> {
        let level1 = self.open_item()?;
        let active = self.active?;
        let level2 = self.active_level2();

        let left = LeftPanel {
            description: level1.description.as_deref(),
            items: &level1.children,
            active: active.level2,
            active_description: level2.and_then(|n| n.description.as_deref()),
            overview_link: level1.overview_link.as_ref(),
        };

        let middle = level2.filter(|n| n.has_children()).map(|n| ItemPanel {
            header: &n.text,
            items: &n.children,
            active: active.level3,
            overview_link: n.overview_link.as_ref(),
        });

        let right = self.active_level3().map(|n| ItemPanel {
            header: &n.text,
            items: &n.children,
            active: None,
            overview_link: n.overview_link.as_ref(),
        });

        Some(Panels {
            left,
            middle,
            right,
        })
    }

    fn open_item(&self) -> Option<&'a NavigationNode> {
        let item = self.forest.get(self.active?.level1)?;
        item.has_submenu().then_some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentElement, HeadingLevel};
    use crate::parser::parse_heading_structure;

    fn h(level: u8, text: &str) -> ContentElement {
        ContentElement::heading(HeadingLevel::new(level).unwrap(), text)
    }

    /// Products > {Software > {Editors, Tools > {CLI}}, Hardware}, About
    fn forest() -> Vec<NavigationNode> {
        parse_heading_structure(&[
            h(1, "Products"),
            ContentElement::paragraph("All products"),
            ContentElement::linked_paragraph("See all", "/products"),
            h(2, "Software"),
            ContentElement::paragraph("Apps"),
            h(3, "Editors"),
            h(3, "Tools"),
            h(4, "CLI"),
            h(2, "Hardware"),
            h(1, "About"),
        ])
    }

    #[test]
    fn test_activate_level1_auto_activates_path() {
        let forest = forest();
        let mut menu = MegaMenu::new(&forest);
        menu.activate_level1(0);

        assert!(menu.is_expanded(0));
        assert!(menu.is_open());
        assert_eq!(menu.active_level2().map(|n| n.text.as_str()), Some("Software"));
        // Editors has no children, so Tools is the first candidate.
        assert_eq!(menu.active_level3().map(|n| n.text.as_str()), Some("Tools"));
    }

    #[test]
    fn test_activate_level1_toggles_and_switches() {
        let forest = forest();
        let mut menu = MegaMenu::new(&forest);

        menu.activate_level1(0);
        menu.activate_level1(1);
        assert!(!menu.is_expanded(0));
        assert!(menu.is_expanded(1));
        // About has no submenu: expanded but nothing to show.
        assert!(!menu.is_open());
        assert_eq!(menu.panels(), None);

        menu.activate_level1(1);
        assert!(!menu.is_expanded(1));
    }

    #[test]
    fn test_activate_level2_without_children_clears_level3() {
        let forest = forest();
        let mut menu = MegaMenu::new(&forest);
        menu.activate_level1(0);
        menu.activate_level2(1);

        assert_eq!(menu.active_level2().map(|n| n.text.as_str()), Some("Hardware"));
        assert_eq!(menu.active_level3(), None);

        let panels = menu.panels().unwrap();
        assert_eq!(panels.left.active, Some(1));
        assert_eq!(panels.middle, None);
        assert_eq!(panels.right, None);
    }

    #[test]
    fn test_activate_level3_requires_children() {
        let forest = forest();
        let mut menu = MegaMenu::new(&forest);
        menu.activate_level1(0);

        menu.activate_level3(0);
        assert_eq!(menu.active_level3().map(|n| n.text.as_str()), Some("Tools"));

        menu.activate_level3(7);
        assert_eq!(menu.active_level3().map(|n| n.text.as_str()), Some("Tools"));
    }

    #[test]
    fn test_panels_content() {
        let forest = forest();
        let mut menu = MegaMenu::new(&forest);
        menu.activate_level1(0);

        let panels = menu.panels().unwrap();
        assert_eq!(panels.left.description, Some("All products"));
        assert_eq!(panels.left.items.len(), 2);
        assert_eq!(panels.left.active_description, Some("Apps"));
        assert_eq!(panels.left.overview_link.map(|l| l.href.as_str()), Some("/products"));

        let middle = panels.middle.unwrap();
        assert_eq!(middle.header, "Software");
        assert_eq!(middle.active, Some(1));

        let right = panels.right.unwrap();
        assert_eq!(right.header, "Tools");
        assert_eq!(right.items[0].text, "CLI");
    }

    #[test]
    fn test_dismissal_respects_viewport() {
        let forest = forest();
        let mut menu = MegaMenu::new(&forest);
        menu.activate_level1(0);

        menu.escape(false);
        menu.outside_click(false);
        menu.viewport_changed(true);
        assert!(menu.is_open());

        menu.outside_click(true);
        assert!(!menu.is_open());

        menu.activate_level1(0);
        menu.escape(true);
        assert!(!menu.is_open());

        menu.activate_level1(0);
        menu.viewport_changed(false);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_mobile_clicks_are_ignored() {
        let forest = forest();
        let mut menu = MegaMenu::new(&forest);
        menu.click_level1(0, false);
        menu.key_level1(0, Key::Enter, false);
        assert!(!menu.is_expanded(0));

        menu.key_level1(0, Key::Other, true);
        assert!(!menu.is_expanded(0));
        menu.key_level1(0, Key::Space, true);
        assert!(menu.is_expanded(0));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let forest = forest();
        let mut menu = MegaMenu::new(&forest);
        menu.activate_level1(9);
        menu.activate_level2(0);
        assert!(!menu.is_open());
    }
}
