//! wayfinder route core
//!
//! Fetches a route between two coordinates from a directions provider and
//! decodes its encoded polyline geometry for rendering.

pub mod directions;
pub mod error;
pub mod fetcher;
pub mod geo;
pub mod mode;
pub mod polyline;
pub mod slot;
pub mod traits;
