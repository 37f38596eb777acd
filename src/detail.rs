//! Pure projections over the single-movie detail payload: trailer selection,
//! cast slicing and the derived image/link URLs the detail view renders.

use crate::movie::{CastMember, MovieDetails, RawMovie, Video};

pub const BACKDROP_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w780";
pub const PROFILE_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w300";

/// YouTube-hosted trailers, input order preserved.
pub fn trailers(details: &MovieDetails) -> Vec<&Video> {
    details
        .videos
        .iter()
        .filter(|v| v.video_type == "Trailer" && v.site == "YouTube")
        .collect()
}

/// First `limit` cast members.
pub fn top_cast(details: &MovieDetails, limit: usize) -> &[CastMember] {
    let end = limit.min(details.cast.len());
    &details.cast[..end]
}

pub fn backdrop_url(raw: &RawMovie) -> Option<String> {
    raw.extra
        .get("backdrop_path")
        .and_then(|v| v.as_str())
        .filter(|p| !p.is_empty())
        .map(|p| format!("{}{}", BACKDROP_IMAGE_BASE, p))
}

pub fn profile_url(member: &CastMember) -> Option<String> {
    member
        .profile_path
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|p| format!("{}{}", PROFILE_IMAGE_BASE, p))
}

pub fn youtube_thumbnail(video_key: &str) -> String {
    format!("https://img.youtube.com/vi/{}/mqdefault.jpg", video_key)
}

pub fn youtube_watch_url(video_key: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_key)
}

/// Runtime in minutes from the passthrough `runtime` field, when present.
pub fn runtime_minutes(raw: &RawMovie) -> Option<u32> {
    raw.extra
        .get("runtime")
        .and_then(|v| v.as_u64())
        .map(|v| v as u32)
}

/// `"2h 22m"` style runtime label; empty when absent or zero.
pub fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        None | Some(0) => String::new(),
        Some(m) if m >= 60 => format!("{}h {}m", m / 60, m % 60),
        Some(m) => format!("{}m", m),
    }
}

/// Genre names from the passthrough `genres` field joined with a dot
/// separator; empty when absent.
pub fn genre_line(raw: &RawMovie) -> String {
    raw.extra
        .get("genres")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|g| g.get("name").and_then(|n| n.as_str()))
                .collect::<Vec<_>>()
                .join(" \u{2022} ")
        })
        .unwrap_or_default()
}
