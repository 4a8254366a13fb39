//! Shared UI crate for the notebook ratings explorer. Data handling, tables and views live here.

pub mod core;
pub mod tables;
pub mod views;

pub mod components {
    // Tab navigation (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Shared theme stylesheet, embedded by the platform launchers.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
