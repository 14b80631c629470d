use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{PageNumber, Row, INSCRIPTIONS_FALLBACK, PLACE_OF_ORIGIN_FALLBACK},
    error::FetchError,
    protocol::{ArtworksResponse, RawRecord},
};
use tracing::debug;
use url::Url;

pub mod config;

/// Source of catalog pages for the grid.
///
/// Implementations hold no grid state: every call is one request for one page
/// and the result is either the full normalized page or an error.
#[async_trait]
pub trait RecordFetcher: Send + Sync {
    async fn fetch_page(&self, page: PageNumber) -> Result<Vec<Row>, FetchError>;
}

/// Maps one wire record to a grid row.
///
/// `place_of_origin` and `inscriptions` fall back to fixed display strings when
/// absent or empty; all other fields pass through unchanged.
pub fn normalize_record(raw: RawRecord) -> Row {
    Row {
        id: raw.id,
        title: raw.title,
        place_of_origin: or_fallback(raw.place_of_origin, PLACE_OF_ORIGIN_FALLBACK),
        artist_display: raw.artist_display,
        inscriptions: or_fallback(raw.inscriptions, INSCRIPTIONS_FALLBACK),
        date_start: raw.date_start,
        date_end: raw.date_end,
    }
}

fn or_fallback(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => fallback.to_string(),
    }
}

fn classify_transport_error(err: reqwest::Error) -> FetchError {
    if let Some(status) = err.status() {
        FetchError::Status(status.as_u16())
    } else if err.is_decode() {
        FetchError::Decode(err.to_string())
    } else {
        FetchError::Transport(err.to_string())
    }
}

/// HTTP client for `GET {base}/artworks?page={page}`.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn artworks_url(&self, page: PageNumber) -> Result<Url, FetchError> {
        let mut url = Url::parse(&format!("{}/artworks", self.base_url)).map_err(|err| {
            FetchError::Transport(format!("invalid catalog url '{}': {err}", self.base_url))
        })?;
        url.query_pairs_mut()
            .append_pair("page", &page.get().to_string());
        Ok(url)
    }
}

#[async_trait]
impl RecordFetcher for CatalogClient {
    async fn fetch_page(&self, page: PageNumber) -> Result<Vec<Row>, FetchError> {
        let url = self.artworks_url(page)?;
        debug!(page = page.get(), %url, "requesting catalog page");

        let body = self
            .http
            .get(url)
            .send()
            .await
            .map_err(classify_transport_error)?
            .error_for_status()
            .map_err(classify_transport_error)?
            .bytes()
            .await
            .map_err(classify_transport_error)?;

        let listing: ArtworksResponse = serde_json::from_slice(&body)
            .map_err(|err| FetchError::Decode(err.to_string()))?;

        let rows: Vec<Row> = listing.data.into_iter().map(normalize_record).collect();
        debug!(
            page = page.get(),
            rows = rows.len(),
            current_page = ?listing.pagination.current_page,
            total_pages = ?listing.pagination.total_pages,
            "catalog page received"
        );
        Ok(rows)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
