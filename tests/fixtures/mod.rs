//! Test fixtures for wayfinder.
//!
//! Provides:
//! - Real Las Vegas locations (from OpenStreetMap)
//! - Directions response bodies shaped like the Google Directions API

#![allow(dead_code)]

pub mod responses;

use wayfinder::geo::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

pub const MGM_GRAND: Location = Location::new("MGM Grand", 36.1023654, -115.168872);
pub const WYNN: Location = Location::new("Wynn Las Vegas", 36.1263781, -115.165818);
pub const BELLAGIO: Location = Location::new("Bellagio", 36.1126, -115.1767);
