//! Movie-discovery data layer.
//!
//! Fetches the popular and upcoming movie lists plus single-movie details
//! from a metadata proxy ([`MovieClient`]), maps each raw record into a
//! display-ready one ([`normalize()`]), and groups the results into named
//! sections for list rendering ([`build_sections`]). The client performs the
//! only I/O; everything downstream is a pure, non-failing projection that the
//! rendering layer consumes as-is.

pub mod client;
pub mod detail;
pub mod movie;
pub mod normalize;
pub mod sections;
pub mod settings;

pub use client::{load_home_sections, MovieClient};
pub use movie::{
    ApiError, CastMember, DisplayMovie, ListResponse, MovieDetails, MovieId, RawMovie, Section,
    Video,
};
pub use normalize::normalize;
pub use sections::build_sections;
pub use settings::AppSettings;
