#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::SourceConfig;
use ui::tables::use_documents_provider;
use ui::views::{NotebookRatings, PlotRatings};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    NotebookRatings {},
    #[route("/plots")]
    PlotRatings {},
}

const THEME_CSS_INLINE: &str = ui::THEME_CSS;

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!(
                        "DANDI AI Notebooks Explorer – v{}",
                        env!("CARGO_PKG_VERSION")
                    ))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::launch(App);
}

fn nav_ratings(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::NotebookRatings {}, "{label}" })
}
fn nav_plots(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::PlotRatings {}, "{label}" })
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        ratings: nav_ratings,
        plots: nav_plots,
    });

    use_documents_provider(SourceConfig::default());

    rsx! {
        // Always inline the embedded theme (no external file dependency for desktop builds)
        document::Style { "{THEME_CSS_INLINE}" }

        Router::<Route> { }
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
