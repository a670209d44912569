/// Open/closed flag behind the header's burger button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link or the call-to-action always collapses the menu.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MobileMenu::default().is_open());
    }

    #[test]
    fn toggle_parity_decides_state() {
        for presses in 0..7 {
            let mut menu = MobileMenu::default();
            for _ in 0..presses {
                menu.toggle();
            }
            assert_eq!(menu.is_open(), presses % 2 == 1, "after {presses} presses");
        }
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MobileMenu::default();
        menu.close();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }
}
