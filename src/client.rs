use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::movie::{ApiError, CastMember, ListResponse, MovieDetails, MovieId, RawMovie, Section, Video};
use crate::sections::build_sections;
use crate::settings::AppSettings;

/// HTTP client for the movie metadata proxy. Holds no state beyond its
/// configuration; responses are returned as decoded payloads, unmodified.
/// No retries, no timeouts, no caching.
#[derive(Clone)]
pub struct MovieClient {
    base_url: String,
    language: String,
    http_client: Arc<reqwest::Client>,
}

impl MovieClient {
    pub fn new(base_url: String, language: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            language,
            http_client: Arc::new(reqwest::Client::new()),
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        let language = if settings.language.is_empty() {
            String::from("en-US")
        } else {
            settings.language.clone()
        };
        Self::new(settings.base_url.clone(), language)
    }

    fn list_url(&self, resource: &str) -> String {
        format!("{}/api/{}", self.base_url, resource)
    }

    fn detail_url(&self, id: MovieId) -> String {
        format!("{}/api/movie/{}?language={}", self.base_url, id, self.language)
    }

    async fn fetch_response(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        tracing::debug!("GET {}", url);
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match response.status().as_u16() {
            s if s >= 400 => Err(ApiError::Network(format!("HTTP error: {}", s))),
            _ => Ok(response),
        }
    }

    async fn fetch_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, ApiError> {
        self.fetch_response(url)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn fetch_popular_movies(&self) -> Result<ListResponse, ApiError> {
        self.fetch_json(&self.list_url("popular-movies")).await
    }

    pub async fn fetch_upcoming_movies(&self) -> Result<ListResponse, ApiError> {
        self.fetch_json(&self.list_url("upcoming-movies")).await
    }

    pub async fn fetch_movie_details(&self, id: MovieId) -> Result<MovieDetails, ApiError> {
        let json: Value = self.fetch_json(&self.detail_url(id)).await?;
        let movie: RawMovie =
            serde_json::from_value(json.clone()).map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(MovieDetails {
            movie,
            videos: parse_videos(&json),
            cast: parse_cast(&json),
        })
    }
}

fn parse_videos(json: &Value) -> Vec<Video> {
    json.get("videos")
        .and_then(|v| v.get("results"))
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| serde_json::from_value(v.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

fn parse_cast(json: &Value) -> Vec<CastMember> {
    json.get("credits")
        .and_then(|c| c.get("cast"))
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|c| serde_json::from_value(c.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Fetches both home-screen lists concurrently and aggregates them. Section
/// order is popular before upcoming regardless of which fetch settles first;
/// either failure propagates to the caller.
pub async fn load_home_sections(client: MovieClient) -> Result<Vec<Section>, ApiError> {
    let (popular, upcoming) = tokio::join!(
        client.fetch_popular_movies(),
        client.fetch_upcoming_movies()
    );
    let popular = popular?;
    let upcoming = upcoming?;
    Ok(build_sections(
        Some(&popular.results),
        Some(&upcoming.results),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> MovieClient {
        MovieClient::new(
            String::from("https://proxy.example.com"),
            String::from("en-US"),
        )
    }

    #[test]
    fn test_list_urls() {
        let client = client();
        assert_eq!(
            client.list_url("popular-movies"),
            "https://proxy.example.com/api/popular-movies"
        );
        assert_eq!(
            client.list_url("upcoming-movies"),
            "https://proxy.example.com/api/upcoming-movies"
        );
    }

    #[test]
    fn test_detail_url() {
        let client = client();
        assert_eq!(
            client.detail_url(278),
            "https://proxy.example.com/api/movie/278?language=en-US"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed_from_base_url() {
        let client = MovieClient::new(
            String::from("https://proxy.example.com/"),
            String::from("en-US"),
        );
        assert_eq!(
            client.list_url("popular-movies"),
            "https://proxy.example.com/api/popular-movies"
        );
    }

    #[test]
    fn test_from_settings_defaults_language() {
        let settings = AppSettings {
            base_url: String::from("https://proxy.example.com"),
            language: String::new(),
        };
        let client = MovieClient::from_settings(&settings);
        assert_eq!(
            client.detail_url(1),
            "https://proxy.example.com/api/movie/1?language=en-US"
        );
    }

    #[test]
    fn test_parse_videos() {
        let json = json!({
            "videos": {
                "results": [
                    { "key": "PLl99DlL6b4", "name": "Main Trailer", "site": "YouTube", "type": "Trailer" },
                    { "key": "xyz", "site": "Vimeo", "type": "Clip" }
                ]
            }
        });
        let videos = parse_videos(&json);
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].key, "PLl99DlL6b4");
        assert_eq!(videos[0].name, "Main Trailer");
        assert_eq!(videos[1].name, "");
        assert_eq!(videos[1].video_type, "Clip");
    }

    #[test]
    fn test_parse_videos_missing_block() {
        assert!(parse_videos(&json!({})).is_empty());
        assert!(parse_videos(&json!({ "videos": {} })).is_empty());
    }

    #[test]
    fn test_parse_cast() {
        let json = json!({
            "credits": {
                "cast": [
                    { "id": 3084, "name": "Marlon Brando", "character": "Don Vito Corleone", "profile_path": "/eEHCjqKMWSvQU4bW9IeEvAnOuDs.jpg" },
                    { "id": 1158, "name": "Al Pacino", "character": "Michael Corleone", "profile_path": null }
                ]
            }
        });
        let cast = parse_cast(&json);
        assert_eq!(cast.len(), 2);
        assert_eq!(cast[0].name, "Marlon Brando");
        assert_eq!(cast[0].character, "Don Vito Corleone");
        assert!(cast[1].profile_path.is_none());
    }

    #[test]
    fn test_parse_cast_missing_block() {
        assert!(parse_cast(&json!({})).is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_proxy_surfaces_network_error() {
        // Nothing listens on port 1; the connection is refused immediately.
        let client = MovieClient::new(String::from("http://127.0.0.1:1"), String::from("en-US"));
        let err = load_home_sections(client).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[test]
    fn test_detail_payload_decodes() {
        let json = json!({
            "id": 238,
            "title": "The Godfather",
            "poster_path": "/3bhkrj58Vtu7enYsRolD1fZdja1.jpg",
            "release_date": "1972-03-14",
            "vote_average": 8.7,
            "runtime": 175,
            "videos": { "results": [] },
            "credits": { "cast": [] }
        });
        let movie: RawMovie = serde_json::from_value(json.clone()).unwrap();
        let details = MovieDetails {
            movie,
            videos: parse_videos(&json),
            cast: parse_cast(&json),
        };
        assert_eq!(details.movie.id, 238);
        assert_eq!(
            details.movie.extra.get("runtime").and_then(|v| v.as_u64()),
            Some(175)
        );
        assert!(details.videos.is_empty());
        assert!(details.cast.is_empty());
    }
}
