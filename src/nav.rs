// src/nav.rs
//
// Navigation bar state, independent of the table data and of any UI
// toolkit: a "scrolled" style flag driven by the vertical offset, and an
// open/closed hamburger menu.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavState {
    threshold: f32,
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    /// Evaluates the initial offset right away, as a fresh page would.
    pub fn new(threshold: f32, initial_offset: f32) -> Self {
        let mut s = Self { threshold, scrolled: false, menu_open: false };
        s.on_scroll(initial_offset);
        s
    }

    /// Re-evaluate on every scroll update. Returns true if the style changed.
    pub fn on_scroll(&mut self, offset_y: f32) -> bool {
        let next = offset_y > self.threshold;
        let changed = next != self.scrolled;
        self.scrolled = next;
        changed
    }

    pub fn scrolled(&self) -> bool { self.scrolled }

    pub fn menu_open(&self) -> bool { self.menu_open }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        logd!("Nav: menu {}", if self.menu_open { "open" } else { "closed" });
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Mirrors the accessibility attribute on the toggle button.
    pub fn expanded(&self) -> bool { self.menu_open }

    pub fn aria_expanded(&self) -> &'static str {
        if self.menu_open { "true" } else { "false" }
    }

    pub fn on_link_click(&mut self) { self.close_menu(); }

    /// A click that landed neither in the menu nor on its toggle.
    pub fn on_click_outside(&mut self) { self.close_menu(); }

    pub fn on_key(&mut self, key: NavKey) {
        if key == NavKey::Escape {
            self.close_menu();
        }
    }
}
