//! Canned directions API bodies.

/// One route, geometry is the two-point prefix of the reference polyline.
pub const fn single_route_json() -> &'static str {
    r#"{
        "geocoded_waypoints": [
            { "geocoder_status": "OK", "place_id": "ChIJ-1" },
            { "geocoder_status": "OK", "place_id": "ChIJ-2" }
        ],
        "routes": [{
            "bounds": {
                "northeast": { "lat": 40.7, "lng": -120.2 },
                "southwest": { "lat": 38.5, "lng": -120.95 }
            },
            "legs": [{
                "distance": { "text": "1.9 mi", "value": 3058 },
                "duration": { "text": "9 mins", "value": 540 },
                "steps": []
            }],
            "overview_polyline": { "points": "_p~iF~ps|U_ulLnnqC" },
            "summary": "S Las Vegas Blvd",
            "warnings": []
        }],
        "status": "OK"
    }"#
}

pub const fn zero_results_json() -> &'static str {
    r#"{ "geocoded_waypoints": [], "routes": [], "status": "ZERO_RESULTS" }"#
}

pub const fn request_denied_json() -> &'static str {
    r#"{
        "error_message": "The provided API key is invalid.",
        "routes": [],
        "status": "REQUEST_DENIED"
    }"#
}

/// Parseable body shaped like a zero-routes answer, served with an error status.
pub const fn not_found_status_json() -> &'static str {
    r#"{ "routes": [], "status": "NOT_FOUND" }"#
}

/// One route with the given distance text and encoded geometry.
pub fn route_json(distance_text: &str, points: &str) -> String {
    serde_json::json!({
        "routes": [{
            "legs": [{ "distance": { "text": distance_text, "value": 1000 } }],
            "overview_polyline": { "points": points }
        }],
        "status": "OK"
    })
    .to_string()
}
