pub mod common;
pub mod icon;
pub mod pages;
pub mod scroll_listener;

pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
pub use scroll_listener::use_navbar_mode;
