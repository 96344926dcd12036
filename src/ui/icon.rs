use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const STAR: &str = "star";
    pub const STAR_FILLED: &str = "star-filled";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
    pub const ZAP: &str = "zap";
    pub const BRAIN: &str = "brain";
    pub const SHIELD: &str = "shield";
    pub const CPU: &str = "cpu";
    pub const GITHUB: &str = "github";
    pub const TWITTER: &str = "twitter";
    pub const LINKEDIN: &str = "linkedin";
    pub const MAIL: &str = "mail";
}
