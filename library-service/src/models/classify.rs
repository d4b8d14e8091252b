use quick_xml::DeError;
use serde::{Deserialize, Serialize};

/// One match from a title search. Deserialized from the attributes of a
/// `<work>` node, serialized as plain JSON for the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename(serialize = "title", deserialize = "@title"), default)]
    pub title: String,
    #[serde(rename(serialize = "author", deserialize = "@author"), default)]
    pub author: String,
    #[serde(rename(serialize = "year", deserialize = "@hyr"), default)]
    pub year: String,
    #[serde(rename(serialize = "id", deserialize = "@owi"), default)]
    pub id: String,
}

#[derive(Debug, Deserialize)]
struct ClassifySearchResponse {
    #[serde(default)]
    works: Works,
}

#[derive(Debug, Default, Deserialize)]
struct Works {
    #[serde(rename = "work", default)]
    work: Vec<SearchResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkData {
    #[serde(rename = "@title", default)]
    pub title: String,
    #[serde(rename = "@author", default)]
    pub author: String,
    #[serde(rename = "@owi", default)]
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
struct Recommendations {
    #[serde(default)]
    ddc: Ddc,
}

#[derive(Debug, Default, Deserialize)]
struct Ddc {
    #[serde(rename = "mostPopular", default)]
    most_popular: Vec<MostPopular>,
}

#[derive(Debug, Deserialize)]
struct MostPopular {
    #[serde(rename = "@sfa", default)]
    sfa: String,
}

#[derive(Debug, Deserialize)]
struct RawBookResponse {
    work: WorkData,
    #[serde(default)]
    recommendations: Recommendations,
}

/// A single work resolved by its `owi` identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyBookResponse {
    pub book: WorkData,
    /// Most popular DDC classification; empty when the work has none.
    pub classification: String,
}

impl From<RawBookResponse> for ClassifyBookResponse {
    fn from(raw: RawBookResponse) -> Self {
        // The service repeats mostPopular on ties; the last node wins.
        let classification = raw
            .recommendations
            .ddc
            .most_popular
            .into_iter()
            .last()
            .map(|m| m.sfa)
            .unwrap_or_default();

        Self {
            book: raw.work,
            classification,
        }
    }
}

/// Decodes the multi-result `works > work` shape of a title search.
pub fn decode_search(body: &[u8]) -> Result<Vec<SearchResult>, DeError> {
    let response: ClassifySearchResponse = quick_xml::de::from_reader(body)?;
    Ok(response.works.work)
}

/// Decodes the single-work shape returned when classifying by `owi`.
pub fn decode_book(body: &[u8]) -> Result<ClassifyBookResponse, DeError> {
    let raw: RawBookResponse = quick_xml::de::from_reader(body)?;
    Ok(raw.into())
}
