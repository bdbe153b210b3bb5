//! Travel modes and their directions API parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the user wants to travel to the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    TransitBus,
}

impl TravelMode {
    /// Value of the `mode` request parameter.
    pub fn provider_mode(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::TransitBus => "transit",
        }
    }

    /// Value of the `transit_mode` request parameter, if the mode needs one.
    pub fn transit_mode(&self) -> Option<&'static str> {
        match self {
            TravelMode::TransitBus => Some("bus"),
            _ => None,
        }
    }

    /// Label shown next to the route distance.
    pub fn label(&self) -> &'static str {
        match self {
            TravelMode::Driving => "Driving",
            TravelMode::Walking => "Walking",
            TravelMode::Bicycling => "Bicycle",
            TravelMode::TransitBus => "Bus",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Travel mode name that matches none of the known labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown travel mode \"{0}\" (expected driving, walking, bicycle or bus)")]
pub struct UnknownTravelMode(pub String);

impl FromStr for TravelMode {
    type Err = UnknownTravelMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "driving" | "car" => Ok(TravelMode::Driving),
            "walking" | "walk" => Ok(TravelMode::Walking),
            "bicycle" | "bicycling" | "bike" => Ok(TravelMode::Bicycling),
            "bus" | "transit-bus" | "transit" => Ok(TravelMode::TransitBus),
            _ => Err(UnknownTravelMode(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_mapping() {
        assert_eq!(TravelMode::Driving.provider_mode(), "driving");
        assert_eq!(TravelMode::Walking.provider_mode(), "walking");
        assert_eq!(TravelMode::Bicycling.provider_mode(), "bicycling");
        assert_eq!(TravelMode::TransitBus.provider_mode(), "transit");
    }

    #[test]
    fn test_only_bus_has_transit_mode() {
        assert_eq!(TravelMode::TransitBus.transit_mode(), Some("bus"));
        assert_eq!(TravelMode::Driving.transit_mode(), None);
        assert_eq!(TravelMode::Walking.transit_mode(), None);
        assert_eq!(TravelMode::Bicycling.transit_mode(), None);
    }

    #[test]
    fn test_default_is_driving() {
        assert_eq!(TravelMode::default(), TravelMode::Driving);
    }

    #[test]
    fn test_parse_ui_labels() {
        assert_eq!("driving".parse::<TravelMode>(), Ok(TravelMode::Driving));
        assert_eq!("bicycle".parse::<TravelMode>(), Ok(TravelMode::Bicycling));
        assert_eq!("Bus".parse::<TravelMode>(), Ok(TravelMode::TransitBus));
        assert_eq!(" walking ".parse::<TravelMode>(), Ok(TravelMode::Walking));
        assert_eq!("transit-bus".parse::<TravelMode>(), Ok(TravelMode::TransitBus));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "ferry".parse::<TravelMode>().unwrap_err();
        assert_eq!(err, UnknownTravelMode("ferry".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown travel mode \"ferry\" (expected driving, walking, bicycle or bus)"
        );
    }

    #[test]
    fn test_unknown_mode_is_std_error() {
        let err: Box<dyn std::error::Error + Send + Sync> =
            Box::new(UnknownTravelMode("boat".to_string()));
        assert!(err.source().is_none());
        assert!(err.to_string().contains("boat"));
    }

    #[test]
    fn test_display_label() {
        assert_eq!(TravelMode::Bicycling.to_string(), "Bicycle");
        assert_eq!(TravelMode::TransitBus.to_string(), "Bus");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&TravelMode::TransitBus).unwrap();
        assert_eq!(json, "\"transit-bus\"");
        let mode: TravelMode = serde_json::from_str("\"bicycling\"").unwrap();
        assert_eq!(mode, TravelMode::Bicycling);
    }
}
