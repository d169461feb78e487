//! Scroll-reactive navbar state
//!
//! The landing page keeps exactly one piece of local state: whether the
//! viewport has been scrolled past [`SCROLL_THRESHOLD`]. Everything the navbar
//! renders differently is derived from that flag through [`NavbarMode`].

/// Vertical offset (in CSS pixels) above which the navbar switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Visual mode of the navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavbarMode {
    /// Page is at (or near) the top: tall, transparent bar
    #[default]
    Top,
    /// Page has been scrolled: compact, translucent and blurred bar
    Scrolled,
}

impl NavbarMode {
    /// Tailwind classes that differ between the two modes.
    pub fn class(&self) -> &'static str {
        match self {
            NavbarMode::Top => "py-6 bg-transparent",
            NavbarMode::Scrolled => "py-3 bg-slate-950/80 backdrop-blur-md shadow-lg",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavbarMode::Top => "top",
            NavbarMode::Scrolled => "scrolled",
        }
    }
}

/// Local scroll state of the landing page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScrollState {
    is_scrolled: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn mode(&self) -> NavbarMode {
        if self.is_scrolled {
            NavbarMode::Scrolled
        } else {
            NavbarMode::Top
        }
    }

    /// Recompute the flag from the offset reported by the latest scroll event.
    ///
    /// Returns `true` when the flag actually changed, so callers can skip
    /// notifying subscribers on same-value updates.
    pub fn observe(&mut self, offset: f64) -> bool {
        let is_scrolled = offset > SCROLL_THRESHOLD;
        let changed = is_scrolled != self.is_scrolled;
        self.is_scrolled = is_scrolled;
        changed
    }
}
