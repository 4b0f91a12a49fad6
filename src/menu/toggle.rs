//! Mobile hamburger toggle.

pub const OPEN_NAVIGATION_LABEL: &str = "Open navigation";
pub const CLOSE_NAVIGATION_LABEL: &str = "Close navigation";

/// State of the hamburger button and the nav it controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavToggle {
    expanded: bool,
    scroll_locked: bool,
    listeners_active: bool,
}

impl NavToggle {
    /// Initial state for a viewport: expanded on desktop, collapsed on mobile.
    pub fn new(is_desktop: bool) -> Self {
        let mut toggle = Self::default();
        toggle.toggle(Some(is_desktop), is_desktop);
        toggle
    }

    /// Flip the expanded state, or set it to `force`.
    pub fn toggle(&mut self, force: Option<bool>, is_desktop: bool) {
        let was_expanded = match force {
            Some(expand) => !expand,
            None => self.expanded,
        };

        self.expanded = !was_expanded;
        self.scroll_locked = !was_expanded && !is_desktop;
        self.listeners_active = !was_expanded || is_desktop;
    }

    /// Escape on mobile collapses the nav. Returns whether it acted.
    pub fn escape(&mut self, is_desktop: bool) -> bool {
        if is_desktop || !self.listeners_active {
            return false;
        }
        self.toggle(None, is_desktop);
        true
    }

    /// Focus leaving the nav collapses it on mobile.
    pub fn focus_lost(&mut self, is_desktop: bool) {
        if !is_desktop && self.listeners_active {
            self.toggle(Some(false), is_desktop);
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn aria_label(&self) -> &'static str {
        if self.expanded {
            CLOSE_NAVIGATION_LABEL
        } else {
            OPEN_NAVIGATION_LABEL
        }
    }

    /// Whether page scrolling is locked behind the open mobile nav.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Whether Escape and focus-loss dismissal are listened for.
    pub fn listeners_active(&self) -> bool {
        self.listeners_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let mobile = NavToggle::new(false);
        assert!(!mobile.is_expanded());
        assert_eq!(mobile.aria_label(), OPEN_NAVIGATION_LABEL);
        assert!(!mobile.scroll_locked());
        assert!(!mobile.listeners_active());

        let desktop = NavToggle::new(true);
        assert!(desktop.is_expanded());
        assert!(!desktop.scroll_locked());
        assert!(desktop.listeners_active());
    }

    #[test]
    fn test_mobile_open_close() {
        let mut nav = NavToggle::new(false);

        nav.toggle(None, false);
        assert!(nav.is_expanded());
        assert_eq!(nav.aria_label(), CLOSE_NAVIGATION_LABEL);
        assert!(nav.scroll_locked());
        assert!(nav.listeners_active());

        nav.toggle(None, false);
        assert!(!nav.is_expanded());
        assert!(!nav.scroll_locked());
        assert!(!nav.listeners_active());
    }

    #[test]
    fn test_force_sets_state() {
        let mut nav = NavToggle::new(false);
        nav.toggle(Some(false), false);
        assert!(!nav.is_expanded());

        nav.toggle(Some(true), false);
        nav.toggle(Some(true), false);
        assert!(nav.is_expanded());
    }

    #[test]
    fn test_desktop_never_locks_scroll() {
        let mut nav = NavToggle::new(false);
        nav.toggle(Some(true), true);
        assert!(nav.is_expanded());
        assert!(!nav.scroll_locked());
        assert!(nav.listeners_active());
    }

    #[test]
    fn test_escape_and_focus_loss() {
        let mut nav = NavToggle::new(false);
        assert!(!nav.escape(false));

        nav.toggle(None, false);
        assert!(!nav.escape(true));
        assert!(nav.escape(false));
        assert!(!nav.is_expanded());

        nav.toggle(None, false);
        nav.focus_lost(false);
        assert!(!nav.is_expanded());
    }
}
