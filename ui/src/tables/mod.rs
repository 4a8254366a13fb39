mod controls;
pub use controls::{GroupFilter, LoadFailure, Loading, Pagination, ScoreCell, SortHeader};

mod ratings_table;
pub use ratings_table::RatingsTable;

mod plot_table;
pub use plot_table::PlotRatingsTable;

use dioxus::prelude::*;

use crate::core::config::SourceConfig;
use crate::core::fetch::{self, Documents, LoadError};

/// The loaded documents, or why they could not be loaded. `None` while pending.
pub type DocumentsResource = Resource<Result<Documents, LoadError>>;

/// Start loading both documents and share the result with every tab.
///
/// Call once from the platform `App` component.
pub fn use_documents_provider(config: SourceConfig) -> DocumentsResource {
    let resource = use_resource(move || {
        let config = config.clone();
        async move {
            let loaded = fetch::load_documents(&config).await;
            if let Err(err) = &loaded {
                tracing::error!(%err, "failed to load rating documents");
            }
            loaded
        }
    });
    use_context_provider(|| resource)
}

/// The documents registered by [`use_documents_provider`].
pub fn use_documents() -> DocumentsResource {
    use_context::<DocumentsResource>()
}
