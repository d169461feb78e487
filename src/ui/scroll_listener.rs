//! Viewport scroll listener bound to a view's lifetime
//!
//! The listener is acquired when the owning component runs and released in the
//! component's reactive cleanup, so it never outlives the view that created it.

use leptos::prelude::*;

use crate::core::scroll::{NavbarMode, ScrollState};

/// Callback handed to the host; receives the current vertical scroll offset.
pub type ScrollCallback = Box<dyn Fn(f64) + Send + Sync>;

/// Feed one scroll offset into the view state.
///
/// Subscribers are only notified when the flag flips. Once the owning view has
/// been disposed the signal is gone and this does nothing.
pub fn apply_scroll(state: RwSignal<ScrollState>, offset: f64) {
    if state.try_update_untracked(|s| s.observe(offset)) == Some(true) {
        state.notify();
    }
}

/// Attach a scroll listener through `attach` and release it on cleanup.
///
/// `attach` registers the callback with the host and returns the function that
/// deregisters it. That function runs exactly once, when the current reactive
/// owner is cleaned up.
pub fn bind_scroll_listener<A, R>(state: RwSignal<ScrollState>, attach: A)
where
    A: FnOnce(ScrollCallback) -> R,
    R: FnOnce() + Send + Sync + 'static,
{
    let release = attach(Box::new(move |offset| apply_scroll(state, offset)));
    on_cleanup(release);
}

#[cfg(feature = "hydrate")]
fn attach_window_scroll(callback: ScrollCallback) -> impl FnOnce() + Send + Sync + 'static {
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        callback(current_scroll_offset());
    });
    move || handle.remove()
}

#[cfg(feature = "hydrate")]
fn current_scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Navbar mode driven by the window scroll position.
///
/// Must be called from a component body. On the server no listener is
/// attached and the navbar stays in [`NavbarMode::Top`].
pub fn use_navbar_mode() -> Signal<NavbarMode> {
    let state = RwSignal::new(ScrollState::new());

    #[cfg(feature = "hydrate")]
    bind_scroll_listener(state, attach_window_scroll);

    Signal::derive(move || state.with(|s| s.mode()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Stand-in for the browser window: holds at most one scroll callback.
    #[derive(Clone, Default)]
    struct FakeWindow {
        listener: Arc<Mutex<Option<ScrollCallback>>>,
        releases: Arc<AtomicUsize>,
    }

    impl FakeWindow {
        fn attach(&self, callback: ScrollCallback) -> impl FnOnce() + Send + Sync + 'static + use<> {
            *self.listener.lock().unwrap() = Some(callback);
            let listener = self.listener.clone();
            let releases = self.releases.clone();
            move || {
                listener.lock().unwrap().take();
                releases.fetch_add(1, Ordering::SeqCst);
            }
        }

        /// Deliver a scroll event; returns whether a listener received it.
        fn scroll_to(&self, offset: f64) -> bool {
            match self.listener.lock().unwrap().as_ref() {
                Some(callback) => {
                    callback(offset);
                    true
                }
                None => false,
            }
        }

        fn has_listener(&self) -> bool {
            self.listener.lock().unwrap().is_some()
        }
    }

    #[test]
    fn test_listener_drives_state() {
        let owner = Owner::new();
        let window = FakeWindow::default();

        let state = owner.with(|| {
            let state = RwSignal::new(ScrollState::new());
            let w = window.clone();
            bind_scroll_listener(state, move |cb| w.attach(cb));
            state
        });

        assert!(window.has_listener());
        assert!(!state.get_untracked().is_scrolled());

        window.scroll_to(51.0);
        assert!(state.get_untracked().is_scrolled());

        window.scroll_to(50.0);
        assert!(!state.get_untracked().is_scrolled());

        window.scroll_to(900.0);
        window.scroll_to(0.0);
        assert_eq!(state.get_untracked().mode(), NavbarMode::Top);

        owner.cleanup();
    }

    #[test]
    fn test_listener_released_once_on_cleanup() {
        let owner = Owner::new();
        let window = FakeWindow::default();

        let state = owner.with(|| {
            let state = RwSignal::new(ScrollState::new());
            let w = window.clone();
            bind_scroll_listener(state, move |cb| w.attach(cb));
            state
        });

        owner.cleanup();

        assert!(!window.has_listener());
        assert_eq!(window.releases.load(Ordering::SeqCst), 1);

        // Events after unmount reach nobody and change nothing
        assert!(!window.scroll_to(500.0));
        assert!(state.try_get_untracked().is_none());

        owner.cleanup();
        assert_eq!(window.releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_late_event_after_dispose_is_noop() {
        let owner = Owner::new();
        let state = owner.with(|| RwSignal::new(ScrollState::new()));
        owner.cleanup();

        // Must not panic on a disposed signal
        apply_scroll(state, 120.0);
        assert!(state.try_get_untracked().is_none());
    }

    #[test]
    fn test_apply_scroll_updates_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(ScrollState::new());
            apply_scroll(state, 51.0);
            assert!(state.get_untracked().is_scrolled());
            apply_scroll(state, 51.0);
            assert!(state.get_untracked().is_scrolled());
            apply_scroll(state, 0.0);
            assert!(!state.get_untracked().is_scrolled());
        });
        owner.cleanup();
    }

    #[test]
    fn test_use_navbar_mode_starts_at_top() {
        let owner = Owner::new();
        let mode = owner.with(use_navbar_mode);
        assert_eq!(mode.get_untracked(), NavbarMode::Top);
        owner.cleanup();
    }
}
