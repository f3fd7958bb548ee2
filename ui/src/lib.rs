//! Shared UI crate for Govcheck: question catalogs, scoring, report tables,
//! charts and the Dioxus views the web and desktop launchers mount.

pub mod core;
pub mod i18n;
pub mod questionnaire;
pub mod results;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

#[cfg(test)]
#[path = "tests/i18n_completeness.rs"]
mod i18n_completeness;
