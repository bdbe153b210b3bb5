//! Encoded polyline codec and route geometry.
//!
//! Directions providers ship route geometry in Google's encoded polyline
//! format: each axis is delta-encoded against the previous point, scaled by
//! 1e5, zig-zag signed and written as 5-bit chunks offset by 63. Decoding
//! happens once at the boundary; everything downstream works with
//! [`Coordinate`] values.

use serde::{Deserialize, Serialize};

use crate::error::PolylineError;
use crate::geo::{Bounds, Coordinate};

/// Fixed-point scale of the encoding (five decimal places).
const PRECISION: f64 = 1e5;

/// Offset added to every chunk so the output is printable ASCII.
const CHUNK_OFFSET: u8 = 63;

/// Set on every chunk except the last one of a value.
const CONTINUATION_BIT: i64 = 0x20;

const CHUNK_MASK: i64 = 0x1f;

/// Largest shift that still fits a 5-bit chunk into an `i64`.
const MAX_SHIFT: u32 = 60;

/// Decodes an encoded polyline into coordinates, in encoding order.
///
/// Empty input yields an empty vector. Truncated input and bytes outside
/// the encoding alphabet are reported as errors rather than guessed at.
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut cursor = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut points = Vec::new();

    while cursor < bytes.len() {
        lat = accumulate(lat, read_delta(bytes, &mut cursor)?, cursor)?;
        lng = accumulate(lng, read_delta(bytes, &mut cursor)?, cursor)?;
        points.push(Coordinate::new(
            lat as f64 / PRECISION,
            lng as f64 / PRECISION,
        ));
    }

    Ok(points)
}

fn accumulate(total: i64, delta: i64, offset: usize) -> Result<i64, PolylineError> {
    total
        .checked_add(delta)
        .ok_or(PolylineError::Overflow { offset })
}

/// Reads one zig-zag encoded varint starting at `cursor`.
fn read_delta(bytes: &[u8], cursor: &mut usize) -> Result<i64, PolylineError> {
    let mut value: i64 = 0;
    let mut shift = 0;

    loop {
        let offset = *cursor;
        let byte = *bytes
            .get(offset)
            .ok_or(PolylineError::Truncated { offset })?;
        if !(CHUNK_OFFSET..=b'~').contains(&byte) {
            return Err(PolylineError::InvalidCharacter { offset, byte });
        }
        if shift > MAX_SHIFT {
            return Err(PolylineError::Overflow { offset });
        }

        let chunk = i64::from(byte - CHUNK_OFFSET);
        value |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        *cursor += 1;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    Ok(if value & 1 != 0 {
        !(value >> 1)
    } else {
        value >> 1
    })
}

/// Encodes coordinates into the polyline format, rounding to 1e-5 degrees.
pub fn encode(points: &[Coordinate]) -> String {
    let mut out = String::new();
    let mut prev_lat = 0;
    let mut prev_lng = 0;

    for point in points {
        let lat = (point.latitude * PRECISION).round() as i64;
        let lng = (point.longitude * PRECISION).round() as i64;
        write_delta(&mut out, lat - prev_lat);
        write_delta(&mut out, lng - prev_lng);
        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

fn write_delta(out: &mut String, delta: i64) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };

    while value >= CONTINUATION_BIT {
        out.push(char::from(
            ((CONTINUATION_BIT | (value & CHUNK_MASK)) as u8) + CHUNK_OFFSET,
        ));
        value >>= 5;
    }
    out.push(char::from(value as u8 + CHUNK_OFFSET));
}

/// A route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline string.
    pub fn decode(encoded: &str) -> Result<Self, PolylineError> {
        decode(encoded).map(Self::new)
    }

    /// Encodes the points back into the compact polyline format.
    pub fn encode(&self) -> String {
        encode(&self.points)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Number of points in the geometry.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when the geometry has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box of the geometry, `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }

    /// Sum of great-circle distances between consecutive points.
    pub fn length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_km(&pair[1]))
            .sum()
    }
}
