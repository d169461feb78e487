//! Common reusable UI components

pub mod button;

pub use button::{Button, ButtonSize, ButtonVariant, button_classes};
