//! Interaction state for the navigation renderers.
//!
//! Each type here is a small state machine over a borrowed navigation forest.
//! They decide what is open, active and visible; building markup from that
//! state is left to the renderer.

mod drilldown;
mod flyout;
mod mega;
mod toggle;

pub use drilldown::{BACK_LABEL, Back, DrillDown, HeaderMode, ItemAction};
pub use flyout::Flyout;
pub use mega::{ItemPanel, LeftPanel, MegaMenu, Panels};
pub use toggle::{CLOSE_NAVIGATION_LABEL, NavToggle, OPEN_NAVIGATION_LABEL};

/// Keys the menus react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }

    /// Enter and Space activate buttons.
    pub fn is_activation(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_dom_key("Enter"), Key::Enter);
        assert_eq!(Key::from_dom_key(" "), Key::Space);
        assert_eq!(Key::from_dom_key("Escape"), Key::Escape);
        assert_eq!(Key::from_dom_key("a"), Key::Other);
        assert!(Key::Space.is_activation());
        assert!(!Key::Escape.is_activation());
    }
}
