//! Shared UI crate for the OctaRoute console. The route table, the navigation
//! shell and every page live here; platform crates only supply the router.

pub mod config;
pub mod core;
pub mod data;
pub mod i18n;
pub mod views;

pub mod components {
    // Sidebar + content region (components/app_shell.rs)
    pub mod app_shell;
    pub use app_shell::register_nav;
    pub use app_shell::AppShell;
    pub use app_shell::NavBuilder;
}

pub use config::THEME_CSS;
pub use crate::core::registry::registry;
