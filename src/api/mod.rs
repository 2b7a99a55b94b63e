// SPDX-License-Identifier: MPL-2.0
//! Pixabay API client: paginated image search and image byte fetching.
//!
//! One search request maps to one HTTP GET with fixed parameters (photo
//! content, horizontal orientation, safe search, twelve hits per page).
//! There are no retries and no caching; every failure is surfaced as an
//! [`ApiError`] and handled identically upstream.

use iced::widget::image;
use serde::Deserialize;

/// Pixabay REST endpoint.
pub const API_ENDPOINT: &str = "https://pixabay.com/api/";

/// Default API key, overridable through `settings.toml`.
pub const DEFAULT_API_KEY: &str = "30742354-1ccc482155368d7c8e305125c";

/// Hits requested per page. The pagination flag in [`crate::search`] is
/// derived from this value, so both must agree.
pub const PER_PAGE: u32 = 12;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the API client.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, redirect loop).
    Request(String),
    /// Server answered with a non-success status code.
    Status(u16),
    /// Body received but could not be decoded (JSON or image bytes).
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Request(msg) => write!(f, "Request failed: {msg}"),
            ApiError::Status(code) => write!(f, "HTTP status: {code}"),
            ApiError::Decode(msg) => write!(f, "Decode failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// One image record from a search response.
///
/// Fields beyond the two URLs and the tag string exist in the API payload
/// but are not carried here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageHit {
    /// Stable Pixabay id, used as the thumbnail cache key.
    pub id: u64,
    /// Medium-sized rendition shown in the gallery grid.
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    /// Full-size rendition shown in the lightbox.
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    /// Comma-separated descriptive tags, doubles as alt text.
    #[serde(default)]
    pub tags: String,
}

/// One decoded page of search results, in API response order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    /// Total number of hits the API reports for the query.
    #[serde(rename = "totalHits")]
    pub total_hits: u64,
    /// The hits of this page, at most [`PER_PAGE`] of them.
    pub hits: Vec<ImageHit>,
}

/// A fetched and decoded image, ready for rendering.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl FetchedImage {
    /// Creates a `FetchedImage` from raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Query parameters for one search request, in wire order.
fn search_params(api_key: &str, query: &str, page: u32) -> [(&'static str, String); 7] {
    [
        ("key", api_key.to_string()),
        ("q", query.to_string()),
        ("image_type", "photo".to_string()),
        ("orientation", "horizontal".to_string()),
        ("safesearch", "true".to_string()),
        ("page", page.to_string()),
        ("per_page", PER_PAGE.to_string()),
    ]
}

/// Builds the HTTP client with explicit redirect policy and user agent.
fn build_client() -> ApiResult<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("IcedFinder/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ApiError::Request(e.to_string()))
}

/// Fetches one page of search results for `query`.
///
/// `page` is 1-based. Raises on any transport failure, non-2xx status, or
/// malformed body; callers do not need to distinguish the kinds.
pub async fn search(api_key: String, query: String, page: u32) -> ApiResult<SearchPage> {
    let client = build_client()?;

    let response = client
        .get(API_ENDPOINT)
        .query(&search_params(&api_key, &query, page))
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }

    response
        .json::<SearchPage>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Downloads and decodes an image (thumbnail or full-size rendition).
pub async fn fetch_image(url: String) -> ApiResult<FetchedImage> {
    let client = build_client()?;

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    let decoded =
        image_rs::load_from_memory(&bytes).map_err(|e| ApiError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(FetchedImage::from_rgba(width, height, rgba.into_raw()))
}
