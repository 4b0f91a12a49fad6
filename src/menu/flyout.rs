//! Service-nav flyout: a title button that shows or hides its body.

use super::Key;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flyout {
    open: bool,
}

impl Flyout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Enter and Space on the title toggle; Escape anywhere closes.
    /// Returns whether the key was handled.
    pub fn key(&mut self, key: Key) -> bool {
        match key {
            Key::Enter | Key::Space => {
                self.toggle();
                true
            }
            Key::Escape => {
                self.close();
                true
            }
            Key::Other => false,
        }
    }

    /// Focus moved outside the flyout.
    pub fn focus_lost(&mut self) {
        self.close();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value for the title's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_open_close() {
        let mut flyout = Flyout::new();
        assert_eq!(flyout.aria_expanded(), "false");

        flyout.toggle();
        assert!(flyout.is_open());
        assert_eq!(flyout.aria_expanded(), "true");

        flyout.toggle();
        assert!(!flyout.is_open());

        flyout.open();
        flyout.open();
        assert!(flyout.is_open());
        flyout.close();
        assert!(!flyout.is_open());
    }

    #[test]
    fn test_keys() {
        let mut flyout = Flyout::new();
        assert!(flyout.key(Key::Enter));
        assert!(flyout.is_open());
        assert!(flyout.key(Key::Space));
        assert!(!flyout.is_open());

        flyout.open();
        assert!(!flyout.key(Key::Other));
        assert!(flyout.is_open());
        assert!(flyout.key(Key::Escape));
        assert!(!flyout.is_open());
    }

    #[test]
    fn test_focus_lost_closes() {
        let mut flyout = Flyout::new();
        flyout.open();
        flyout.focus_lost();
        assert!(!flyout.is_open());
    }
}
