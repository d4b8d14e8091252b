use crate::models::classify::{decode_book, decode_search, ClassifyBookResponse, SearchResult};
use async_trait::async_trait;
use reqwest::Url;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_CLASSIFY_URL: &str = "http://classify.oclc.org/classify2/Classify";

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] quick_xml::DeError),
    /// Transport failure from a `ClassifyApi` that does not go through reqwest.
    #[error("Connection error: {0}")]
    Connection(String),
}

/// Raw access to the classification endpoint: one GET, body returned as-is.
#[async_trait]
pub trait ClassifyApi {
    async fn get(&self, url: &str) -> Result<Vec<u8>, ClassifyError>;
}

pub struct HttpClassifyApi {
    client: reqwest::Client,
}

impl HttpClassifyApi {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpClassifyApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClassifyApi for HttpClassifyApi {
    async fn get(&self, url: &str) -> Result<Vec<u8>, ClassifyError> {
        // Status is not checked; an error page fails in the decoder instead.
        let response = self.client.get(url).send().await?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

#[derive(Clone)]
pub struct ClassifyService {
    api: Arc<dyn ClassifyApi + Send + Sync>,
    base_url: Url,
}

impl ClassifyService {
    pub fn new(api: Arc<dyn ClassifyApi + Send + Sync>, base_url: Url) -> Self {
        Self { api, base_url }
    }

    fn url_for(&self, key: &str, value: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("summary", "true")
            .append_pair(key, value);
        url
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClassifyError> {
        let url = self.url_for("title", query);
        info!("Searching classify service: {}", url);

        let body = self.api.get(url.as_str()).await?;
        Ok(decode_search(&body)?)
    }

    pub async fn find(&self, id: &str) -> Result<ClassifyBookResponse, ClassifyError> {
        let url = self.url_for("owi", id);
        info!("Resolving work {} via {}", id, url);

        let body = self.api.get(url.as_str()).await?;
        Ok(decode_book(&body)?)
    }
}
