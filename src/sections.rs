use crate::movie::{RawMovie, Section};
use crate::normalize::normalize;

pub const POPULAR_SECTION_TITLE: &str = "Popular movies";
pub const UPCOMING_SECTION_TITLE: &str = "Upcoming movies";

/// Groups the two home-screen result sets into named sections, popular before
/// upcoming. An absent or empty input yields an empty section rather than
/// dropping it; element order is preserved, nothing is filtered or deduped.
pub fn build_sections(popular: Option<&[RawMovie]>, upcoming: Option<&[RawMovie]>) -> Vec<Section> {
    vec![
        build_section(POPULAR_SECTION_TITLE, popular),
        build_section(UPCOMING_SECTION_TITLE, upcoming),
    ]
}

fn build_section(title: &str, movies: Option<&[RawMovie]>) -> Section {
    Section {
        title: String::from(title),
        movies: movies
            .unwrap_or_default()
            .iter()
            .cloned()
            .map(normalize)
            .collect(),
    }
}
