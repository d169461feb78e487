//! Page state and host-facing behavior, independent of rendering

#[cfg(feature = "ssr")]
pub mod config;
pub mod mount;
pub mod navigation;
pub mod scroll;

pub use mount::{MountOutcome, ROOT_ID, mount_into};
pub use navigation::{APP_ENTRY, BrowserNavigator, NavigationError, Navigator, go_to_app};
pub use scroll::{NavbarMode, SCROLL_THRESHOLD, ScrollState};
