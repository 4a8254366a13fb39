use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::SourceConfig;
use ui::tables::use_documents_provider;
use ui::views::{NotebookRatings, PlotRatings};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    NotebookRatings {},
    #[route("/plots")]
    PlotRatings {},
}

const THEME_CSS_INLINE: &str = ui::THEME_CSS;

fn nav_ratings(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::NotebookRatings {},
        "{label}"
    })
}
fn nav_plots(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::PlotRatings {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        ratings: nav_ratings,
        plots: nav_plots,
    });

    // Both tabs read the same documents; fetch them once for the whole app.
    use_documents_provider(SourceConfig::default());

    rsx! {
        document::Style { "{THEME_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
