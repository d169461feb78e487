use leptos::prelude::*;

/// Base URL of the hosted icon set (Lucide via Iconify)
const ICON_HOST: &str = "https://api.iconify.design/lucide";

#[component]
pub fn Icon(
    /// Icon name in the hosted set
    name: &'static str,
    /// CSS classes for sizing
    #[prop(default = "w-5 h-5")]
    class: &'static str,
    /// Icon color as a hex string without `#`
    #[prop(default = "ffffff")]
    color: &'static str,
) -> impl IntoView {
    view! {
        <img
            src=icon_url(name, color)
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
            loading="lazy"
        />
    }
}

/// Absolute URL of a hosted icon
pub fn icon_url(name: &str, color: &str) -> String {
    format!("{}/{}.svg?color=%23{}", ICON_HOST, name, color)
}

/// Icons used on the page
pub mod icons {
    pub const ZAP: &str = "zap";
    pub const CALENDAR: &str = "calendar-check";
    pub const USERS: &str = "users";
    pub const BAR_CHART: &str = "bar-chart-3";
    pub const SHIELD: &str = "shield-check";
    pub const SMARTPHONE: &str = "smartphone";
    pub const CHECK: &str = "check";
    pub const STAR: &str = "star";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const INSTAGRAM: &str = "instagram";
    pub const LINKEDIN: &str = "linkedin";
    pub const TWITTER: &str = "twitter";
}
