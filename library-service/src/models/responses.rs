use crate::models::storage::Book;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

/// Context handed to the `index.html` template.
#[derive(Debug, Serialize)]
pub struct Page {
    pub books: Vec<Book>,
}
