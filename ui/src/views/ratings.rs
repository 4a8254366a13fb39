use dioxus::prelude::*;

use crate::tables::{use_documents, LoadFailure, Loading, RatingsTable};

#[component]
pub fn NotebookRatings() -> Element {
    let documents = use_documents();

    rsx! {
        section { class: "page page-ratings",
            match &*documents.read_unchecked() {
                Some(Ok(loaded)) => rsx! {
                    RatingsTable { ratings: loaded.ratings.clone() }
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
