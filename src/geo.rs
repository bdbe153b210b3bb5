//! Geographic primitives shared by the decoder and the route fetcher.
//!
//! Distances use the great-circle (haversine) formula. Good enough for
//! summarizing a decoded route, not a substitute for the provider's
//! road distance.

use serde::{Deserialize, Serialize};

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        let lat1_rad = self.latitude.to_radians();
        let lat2_rad = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lng = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }

    /// Formats the coordinate the way the directions API expects it.
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// Axis-aligned bounding box around a set of coordinates.
///
/// Callers use it to fit the map camera onto a decoded route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for an empty slice.
    pub fn from_points(points: &[Coordinate]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut south_west = *first;
        let mut north_east = *first;

        for point in rest {
            south_west.latitude = south_west.latitude.min(point.latitude);
            south_west.longitude = south_west.longitude.min(point.longitude);
            north_east.latitude = north_east.latitude.max(point.latitude);
            north_east.longitude = north_east.longitude.max(point.longitude);
        }

        Some(Self {
            south_west,
            north_east,
        })
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south_west.latitude + self.north_east.latitude) / 2.0,
            (self.south_west.longitude + self.north_east.longitude) / 2.0,
        )
    }

    pub fn contains(&self, point: &Coordinate) -> bool {
        point.latitude >= self.south_west.latitude
            && point.latitude <= self.north_east.latitude
            && point.longitude >= self.south_west.longitude
            && point.longitude <= self.north_east.longitude
    }

    /// Grows each side by `factor` times the span of that axis.
    pub fn padded(&self, factor: f64) -> Self {
        let lat_pad = (self.north_east.latitude - self.south_west.latitude) * factor;
        let lng_pad = (self.north_east.longitude - self.south_west.longitude) * factor;

        Self {
            south_west: Coordinate::new(
                self.south_west.latitude - lat_pad,
                self.south_west.longitude - lng_pad,
            ),
            north_east: Coordinate::new(
                self.north_east.latitude + lat_pad,
                self.north_east.longitude + lng_pad,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_same_point() {
        let point = Coordinate::new(36.1, -115.1);
        assert!(point.distance_km(&point) < 0.001, "Same point should have ~0 distance");
    }

    #[test]
    fn test_distance_known() {
        // Las Vegas to Los Angeles, actual distance ~370 km
        let las_vegas = Coordinate::new(36.17, -115.14);
        let los_angeles = Coordinate::new(34.05, -118.24);
        let dist = las_vegas.distance_km(&los_angeles);
        assert!(dist > 350.0 && dist < 400.0, "LV to LA should be ~370km, got {}", dist);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Coordinate::new(36.1, -115.1);
        let b = Coordinate::new(36.2, -115.2);
        assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-9);
    }

    #[test]
    fn test_query_value() {
        assert_eq!(Coordinate::new(38.5, -120.2).to_query_value(), "38.5,-120.2");
        assert_eq!(Coordinate::new(0.0, 0.0).to_query_value(), "0,0");
    }

    #[test]
    fn test_bounds_empty() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_bounds_single_point() {
        let point = Coordinate::new(1.0, 2.0);
        let bounds = Bounds::from_points(&[point]).unwrap();
        assert_eq!(bounds.south_west, point);
        assert_eq!(bounds.north_east, point);
        assert_eq!(bounds.center(), point);
    }

    #[test]
    fn test_bounds_spans_points() {
        let points = [
            Coordinate::new(38.5, -120.2),
            Coordinate::new(40.7, -120.95),
            Coordinate::new(43.252, -126.453),
        ];
        let bounds = Bounds::from_points(&points).unwrap();
        assert_eq!(bounds.south_west, Coordinate::new(38.5, -126.453));
        assert_eq!(bounds.north_east, Coordinate::new(43.252, -120.2));
        for point in &points {
            assert!(bounds.contains(point));
        }
        assert!(!bounds.contains(&Coordinate::new(37.0, -121.0)));
    }

    #[test]
    fn test_bounds_padded() {
        let bounds = Bounds::from_points(&[Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 20.0)])
            .unwrap()
            .padded(0.1);
        assert_eq!(bounds.south_west, Coordinate::new(-1.0, -2.0));
        assert_eq!(bounds.north_east, Coordinate::new(11.0, 22.0));
    }
}
