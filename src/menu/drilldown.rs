//! Mobile drill-down navigation.
//!
//! The menu shows one level at a time. Opening an item with children pushes
//! it onto a stack; going back pops it, and going back from the top closes
//! the menu.

use crate::model::{NavigationNode, OverviewLink};

/// Back button label when there is no parent to name.
pub const BACK_LABEL: &str = "Back";

/// What the header brand area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderMode<'a> {
    Brand,
    Back { label: &'a str },
}

/// Result of going back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Back {
    /// Now showing this level.
    Level(usize),
    /// Was at the top; the menu is hidden.
    Closed,
}

/// What tapping an item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction<'a> {
    /// Descend into the item's children.
    Drill,
    /// Navigate away, closing the menu.
    Follow(&'a str),
    /// Neither children nor a link.
    Inert,
}

#[derive(Debug, Clone)]
pub struct DrillDown<'a> {
    forest: &'a [NavigationNode],
    stack: Vec<&'a NavigationNode>,
    visible: bool,
}

impl<'a> DrillDown<'a> {
    pub fn new(forest: &'a [NavigationNode]) -> Self {
        Self {
            forest,
            stack: Vec::new(),
            visible: false,
        }
    }

    /// Show the menu at the top level.
    pub fn show(&mut self) {
        self.stack.clear();
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Hide and return to the top level, e.g. when switching to desktop.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Descend into item `index`. Returns false for items without children.
    pub fn open(&mut self, index: usize) -> bool {
        match self.current_items().get(index) {
            Some(item) if item.has_children() => {
                self.stack.push(item);
                true
            }
            _ => false,
        }
    }

    pub fn back(&mut self) -> Back {
        if self.stack.pop().is_none() {
            self.hide();
            return Back::Closed;
        }
        Back::Level(self.level())
    }

    /// Current level, starting at 1.
    pub fn level(&self) -> usize {
        self.stack.len() + 1
    }

    pub fn current_items(&self) -> &'a [NavigationNode] {
        match self.current_parent() {
            Some(parent) => &parent.children,
            None => self.forest,
        }
    }

    pub fn current_parent(&self) -> Option<&'a NavigationNode> {
        self.stack.last().copied()
    }

    pub fn header_mode(&self) -> HeaderMode<'a> {
        if self.level() == 1 {
            return HeaderMode::Brand;
        }
        let label = self
            .current_parent()
            .map_or(BACK_LABEL, |parent| parent.text.as_str());
        HeaderMode::Back { label }
    }

    /// Overview link of the current parent. Never shown at the top level.
    pub fn overview_link(&self) -> Option<&'a OverviewLink> {
        self.current_parent()?.overview_link.as_ref()
    }

    pub fn item_action(&self, index: usize) -> Option<ItemAction<'a>> {
        let item = self.current_items().get(index)?;
        Some(if item.has_children() {
            ItemAction::Drill
        } else if item.has_link {
            ItemAction::Follow(&item.href)
        } else {
            ItemAction::Inert
        })
    }

    /// Tap item `index`: drill in, or hide the menu when following a link.
    pub fn select(&mut self, index: usize) -> Option<ItemAction<'a>> {
        let action = self.item_action(index)?;
        match action {
            ItemAction::Drill => {
                self.open(index);
            }
            ItemAction::Follow(_) => self.hide(),
            ItemAction::Inert => {}
        }
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(level: u8, text: &str, href: Option<&str>) -> NavigationNode {
        NavigationNode::new(level, text, href.map(str::to_string), None)
    }

    fn forest() -> Vec<NavigationNode> {
        let mut software = node(2, "Software", None);
        software.children.push(node(3, "Editors", Some("/editors")));
        software.overview_link = Some(OverviewLink::new("All software", "/software"));

        let mut products = node(1, "Products", None);
        products.children.push(software);
        products.children.push(node(2, "Plain", None));
        products.has_submenu = Some(true);
        products.overview_link = Some(OverviewLink::new("All products", "/products"));

        vec![products, node(1, "About", Some("/about"))]
    }

    #[test]
    fn test_show_starts_at_top() {
        let forest = forest();
        let mut nav = DrillDown::new(&forest);
        assert!(!nav.is_visible());

        nav.show();
        assert!(nav.is_visible());
        assert_eq!(nav.level(), 1);
        assert_eq!(nav.current_items().len(), 2);
        assert_eq!(nav.header_mode(), HeaderMode::Brand);
        assert_eq!(nav.overview_link(), None);
    }

    #[test]
    fn test_drill_and_back() {
        let forest = forest();
        let mut nav = DrillDown::new(&forest);
        nav.show();

        assert!(nav.open(0));
        assert_eq!(nav.level(), 2);
        assert_eq!(nav.header_mode(), HeaderMode::Back { label: "Products" });
        assert_eq!(nav.overview_link().map(|l| l.href.as_str()), Some("/products"));

        assert!(nav.open(0));
        assert_eq!(nav.level(), 3);
        assert_eq!(nav.current_items()[0].text, "Editors");
        assert_eq!(nav.header_mode(), HeaderMode::Back { label: "Software" });

        assert_eq!(nav.back(), Back::Level(2));
        assert_eq!(nav.back(), Back::Level(1));
        assert!(nav.is_visible());
        assert_eq!(nav.back(), Back::Closed);
        assert!(!nav.is_visible());
    }

    #[test]
    fn test_open_leaf_is_noop() {
        let forest = forest();
        let mut nav = DrillDown::new(&forest);
        nav.show();
        assert!(!nav.open(1));
        assert!(!nav.open(5));
        assert_eq!(nav.level(), 1);
    }

    #[test]
    fn test_item_actions() {
        let forest = forest();
        let mut nav = DrillDown::new(&forest);
        nav.show();
        assert_eq!(nav.item_action(0), Some(ItemAction::Drill));
        assert_eq!(nav.item_action(1), Some(ItemAction::Follow("/about")));
        assert_eq!(nav.item_action(2), None);

        nav.open(0);
        assert_eq!(nav.item_action(1), Some(ItemAction::Inert));
    }

    #[test]
    fn test_select_follow_hides() {
        let forest = forest();
        let mut nav = DrillDown::new(&forest);
        nav.show();
        assert_eq!(nav.select(0), Some(ItemAction::Drill));
        assert_eq!(nav.level(), 2);

        nav.open(0);
        assert_eq!(nav.select(0), Some(ItemAction::Follow("/editors")));
        assert!(!nav.is_visible());

        nav.show();
        assert_eq!(nav.level(), 1);
    }

    #[test]
    fn test_reset() {
        let forest = forest();
        let mut nav = DrillDown::new(&forest);
        nav.show();
        nav.open(0);
        nav.reset();
        assert!(!nav.is_visible());
        assert_eq!(nav.level(), 1);
    }
}
