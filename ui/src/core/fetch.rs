//! Loading the rating documents.
//!
//! Both documents are requested concurrently; if either fails the whole load
//! fails and nothing is shown. There is no retry.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::config::SourceConfig;
use super::model::{PlotRating, Rating};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("{url} is not a valid rating document: {message}")]
    Decode { url: String, message: String },
}

/// The two loaded documents, shared read-only between the tabs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Documents {
    pub ratings: Rc<Vec<Rating>>,
    pub plot_ratings: Rc<Vec<PlotRating>>,
}

pub async fn load_documents(config: &SourceConfig) -> Result<Documents, LoadError> {
    let client = reqwest::Client::new();

    let (ratings, plot_ratings) = futures::try_join!(
        fetch_json::<Vec<Rating>>(&client, &config.ratings_url),
        fetch_json::<Vec<PlotRating>>(&client, &config.plot_ratings_url)
    )?;

    tracing::info!(
        ratings = ratings.len(),
        plot_ratings = plot_ratings.len(),
        "rating documents loaded"
    );

    Ok(Documents {
        ratings: Rc::new(ratings),
        plot_ratings: Rc::new(plot_ratings),
    })
}

async fn fetch_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, LoadError> {
    let request_error = |err: reqwest::Error| LoadError::Request {
        url: url.to_string(),
        message: err.to_string(),
    };

    let response = client.get(url).send().await.map_err(request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(request_error)?;
    decode_document(url, &body)
}

/// Parse one document body. `url` is only used for error context.
pub fn decode_document<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, LoadError> {
    serde_json::from_str(body).map_err(|err| LoadError::Decode {
        url: url.to_string(),
        message: err.to_string(),
    })
}
