use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Tab links supplied by the platform crate.
///
/// `ui` does not know each platform's `Route` enum, so the web and desktop
/// launchers register one function per tab that builds a `Link` around the
/// label they are given:
///
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         ratings: |label| rsx!( Link { class: "navbar__link", to: Route::NotebookRatings {}, "{label}" } ),
///         plots: |label| rsx!( Link { class: "navbar__link", to: Route::PlotRatings {}, "{label}" } ),
///     });
/// }
/// ```
///
/// Without a registered builder the navbar renders its `children` instead.
pub struct NavBuilder {
    pub ratings: fn(label: &str) -> Element,
    pub plots: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation already registered");
    }
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let internal_nav = NAV_BUILDER.get().map(|b| {
        let ratings = (b.ratings)("Notebook ratings");
        let plots = (b.plots)("Plot ratings");

        rsx! {
            nav { class: "navbar__links",
                {ratings}
                {plots}
            }
        }
    });

    rsx! {
        // Include shared navbar stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "DANDI AI Notebooks" }
                    }
                    span { class: "navbar__brand-subtitle", "Ratings explorer" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
