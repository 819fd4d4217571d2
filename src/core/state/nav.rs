/// Scroll offset past which the navigation bar switches to its raised style
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// In-page sections reachable from the navigation links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Contact,
}

impl Section {
    pub const NAV: [Section; 3] = [Section::About, Section::Projects, Section::Contact];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// On the home page the link is a bare anchor. Anywhere else it first
    /// routes back to `/` and then jumps to the anchor.
    pub fn href(self, on_home: bool) -> String {
        if on_home {
            format!("#{}", self.anchor())
        } else {
            format!("/#{}", self.anchor())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavBarState {
    threshold: f64,
    is_scrolled: bool,
    mobile_menu_open: bool,
}

impl Default for NavBarState {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD)
    }
}

impl NavBarState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            is_scrolled: false,
            mobile_menu_open: false,
        }
    }

    /// Recompute the scrolled flag from the current vertical offset.
    pub fn on_scroll(&mut self, offset: f64) {
        self.is_scrolled = offset > self.threshold;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Called whenever a navigation link is followed
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }
}
