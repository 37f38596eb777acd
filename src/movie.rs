use serde::Deserialize;
use serde_json::{Map, Value};

pub type MovieId = u64;

/// Raw movie record as returned by the metadata proxy.
///
/// Only the fields the display mapping relies on are typed; every other
/// upstream field is captured in `extra` and carried through untouched.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawMovie {
    pub id: MovieId,
    pub title: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Display-ready movie record: a [`RawMovie`] with `poster`, `year` and
/// `rating` overlaid. The three derived fields are always present; all raw
/// fields are passed through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayMovie {
    pub id: MovieId,
    pub title: Option<String>,
    /// Absolute poster image URL, or `None` when the record has no
    /// `poster_path`. Placeholder resolution is the renderer's concern.
    pub poster: Option<String>,
    /// Four-character release year, or `"N/A"`.
    pub year: String,
    /// Vote average formatted to one decimal place, or `"N/A"`.
    pub rating: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub results: Vec<RawMovie>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Video {
    pub key: String,
    #[serde(default)]
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    pub profile_path: Option<String>,
}

/// Single-movie detail payload: the movie record plus whatever nested video
/// and credit blocks the proxy attached. Missing blocks decode to empty.
#[derive(Debug, Clone)]
pub struct MovieDetails {
    pub movie: RawMovie,
    pub videos: Vec<Video>,
    pub cast: Vec<CastMember>,
}

/// Named group of display-ready movies for list rendering. A section with no
/// movies is valid and renders as an empty-state placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub movies: Vec<DisplayMovie>,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    Network(String),
    Parse(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "network error: {}", e),
            ApiError::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
