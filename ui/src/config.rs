//! Application configuration.
//!
//! Compile-time constants shared by the shell, the views and the platform
//! launchers. There is no runtime configuration surface.

/// Product name shown in the sidebar brand and window titles.
pub const APP_NAME: &str = "OctaRoute";

/// Locale used when the requested languages cannot be satisfied.
pub const FALLBACK_LOCALE: &str = "en-US";

/// Shared stylesheet, embedded so every platform can inline it.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// CSS classes applied to sidebar links.
pub mod nav {
    /// Class for a link that does not match the current location.
    pub const LINK_CLASS: &str = "nav-link";
    /// Class for the link matching the current location.
    pub const ACTIVE_LINK_CLASS: &str = "nav-link active";
}

/// Path the NotFound view links back to.
pub const HOME_PATH: &str = "/";
