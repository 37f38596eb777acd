use crate::movie::{DisplayMovie, RawMovie};

pub const POSTER_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/original";

/// Maps a raw upstream record into a display-ready one. Total: missing input
/// degrades to `"N/A"` / no poster, it never fails.
pub fn normalize(raw: RawMovie) -> DisplayMovie {
    let poster = raw
        .poster_path
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|p| format!("{}{}", POSTER_IMAGE_BASE, p));
    let year = release_year(raw.release_date.as_deref());
    let rating = format_rating(raw.vote_average);

    let mut extra = raw.extra;
    // The derived fields win over same-named upstream fields.
    extra.remove("poster");
    extra.remove("year");
    extra.remove("rating");

    DisplayMovie {
        id: raw.id,
        title: raw.title,
        poster,
        year,
        rating,
        poster_path: raw.poster_path,
        release_date: raw.release_date,
        vote_average: raw.vote_average,
        extra,
    }
}

/// First four characters of the release date, `"N/A"` when absent or empty.
/// No calendar validation: a shorter date yields a shorter string.
pub fn release_year(release_date: Option<&str>) -> String {
    match release_date {
        Some(date) if !date.is_empty() => date.chars().take(4).collect(),
        _ => String::from("N/A"),
    }
}

/// Vote average to one decimal place, `"N/A"` when absent.
pub fn format_rating(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(avg) => format!("{:.1}", avg),
        None => String::from("N/A"),
    }
}

impl From<RawMovie> for DisplayMovie {
    fn from(raw: RawMovie) -> Self {
        normalize(raw)
    }
}
