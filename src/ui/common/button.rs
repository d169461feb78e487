use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    /// Filled brand gradient
    Primary,
    /// Bordered, transparent fill
    Outline,
    /// Text only
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Full class list for a button
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    [
        "btn-base",
        variant.class(),
        size.class(),
        extra,
    ]
    .into_iter()
    .filter(|c| !c.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler
    on_click: Callback<()>,
    /// Button content (text or elements)
    children: Children,
    /// Optional icon name shown after the text
    #[prop(optional)]
    trailing_icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_classes(variant, size, class)
            on:click=move |_| on_click.run(())
        >
            {children()}
            {trailing_icon.map(|icon| view! { <Icon name=icon class="w-4 h-4" /> })}
        </button>
    }
}
