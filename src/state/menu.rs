#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The menu button was pressed.
    Trigger,
    /// A pointer click, inside or outside the menu's region.
    Click { inside: bool },
    /// A navigation link in the menu was followed.
    Navigate,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    open: bool,
}

impl Menu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn apply(&mut self, event: MenuEvent) {
        match event {
            MenuEvent::Trigger => self.open = !self.open,
            MenuEvent::Click { inside: false } | MenuEvent::Navigate => self.open = false,
            MenuEvent::Click { inside: true } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!Menu::default().is_open());
    }

    #[test]
    fn test_trigger_toggles() {
        let mut menu = Menu::default();
        menu.apply(MenuEvent::Trigger);
        assert!(menu.is_open());
        menu.apply(MenuEvent::Trigger);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut menu = Menu::default();
        menu.apply(MenuEvent::Trigger);
        menu.apply(MenuEvent::Click { inside: false });
        assert!(!menu.is_open());

        // closed stays closed
        menu.apply(MenuEvent::Click { inside: false });
        assert!(!menu.is_open());
    }

    #[test]
    fn test_inside_click_keeps_open() {
        let mut menu = Menu::default();
        menu.apply(MenuEvent::Trigger);
        menu.apply(MenuEvent::Click { inside: true });
        assert!(menu.is_open());
    }

    #[test]
    fn test_navigate_closes() {
        let mut menu = Menu::default();
        menu.apply(MenuEvent::Trigger);
        menu.apply(MenuEvent::Navigate);
        assert!(!menu.is_open());
    }
}
