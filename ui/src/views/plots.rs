use dioxus::prelude::*;

use crate::tables::{use_documents, LoadFailure, Loading, PlotRatingsTable};

#[component]
pub fn PlotRatings() -> Element {
    let documents = use_documents();

    rsx! {
        section { class: "page page-plots",
            match &*documents.read_unchecked() {
                Some(Ok(loaded)) => rsx! {
                    PlotRatingsTable { plot_ratings: loaded.plot_ratings.clone() }
                },
                Some(Err(err)) => rsx! {
                    LoadFailure { message: err.to_string() }
                },
                None => rsx! {
                    Loading {}
                },
            }
        }
    }
}
