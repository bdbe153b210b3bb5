//! Error types for polyline decoding and route fetching.

use thiserror::Error;

/// Failure while decoding an encoded polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// Input ended in the middle of a value.
    #[error("polyline truncated at byte {offset}")]
    Truncated { offset: usize },

    /// Byte outside the encoding alphabet (`?` through `~`).
    #[error("invalid polyline byte 0x{byte:02x} at offset {offset}")]
    InvalidCharacter { offset: usize, byte: u8 },

    /// A single value carries more chunks than fit in 64 bits.
    #[error("polyline value overflows at byte {offset}")]
    Overflow { offset: usize },
}

/// Failure while requesting or interpreting a directions response.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid directions configuration: {0}")]
    Config(String),

    #[error("directions request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("directions service returned HTTP {0}")]
    Status(u16),

    #[error("failed to parse directions response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A route was returned without a field the result needs.
    #[error("directions response missing {0}")]
    MissingField(&'static str),

    #[error("failed to decode route geometry: {0}")]
    Polyline(#[from] PolylineError),
}
