//! Route fetching and result normalization.
//!
//! [`RouteFetcher`] turns an origin/destination/mode triple into a
//! [`RouteResult`]. Every outcome the caller can see is a value: a missing
//! endpoint is `None`, an empty answer and a failed request are results with
//! fixed placeholder text and no geometry. Errors are logged here and go no
//! further.

use serde::Serialize;
use tracing::{debug, error, instrument, warn};

use crate::directions::{DirectionsRequest, DirectionsResponse};
use crate::error::RouteError;
use crate::geo::{Bounds, Coordinate};
use crate::mode::TravelMode;
use crate::polyline;
use crate::slot::RouteSlot;
use crate::traits::DirectionsProvider;

/// Distance text shown when the provider returned no route.
pub const ROUTE_NOT_FOUND: &str = "Route not found";

/// Distance text shown when the request or its response failed.
pub const ROUTE_FETCH_FAILED: &str = "Error fetching route";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Found,
    NotFound,
    Failed,
}

/// Outcome of one fetch, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub distance_text: Option<String>,
    pub coordinates: Vec<Coordinate>,
    pub status: RouteStatus,
}

impl RouteResult {
    /// A route the provider returned, with its distance text and geometry.
    pub fn found(distance_text: impl Into<String>, coordinates: Vec<Coordinate>) -> Self {
        Self {
            distance_text: Some(distance_text.into()),
            coordinates,
            status: RouteStatus::Found,
        }
    }

    /// Placeholder for a response that carried no route.
    pub fn not_found() -> Self {
        Self {
            distance_text: Some(ROUTE_NOT_FOUND.to_string()),
            coordinates: Vec::new(),
            status: RouteStatus::NotFound,
        }
    }

    /// Placeholder for a request or response that failed.
    pub fn failed() -> Self {
        Self {
            distance_text: Some(ROUTE_FETCH_FAILED.to_string()),
            coordinates: Vec::new(),
            status: RouteStatus::Failed,
        }
    }

    pub fn is_found(&self) -> bool {
        self.status == RouteStatus::Found
    }

    /// Box to fit the map camera on, `None` without geometry.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.coordinates)
    }
}

/// Fetches routes through a [`DirectionsProvider`].
#[derive(Debug, Clone)]
pub struct RouteFetcher<P> {
    provider: P,
}

impl<P: DirectionsProvider> RouteFetcher<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Fetches the route from `origin` to `destination`.
    ///
    /// Returns `None` without contacting the provider when either endpoint is
    /// unknown. Otherwise issues exactly one request and always yields a
    /// result.
    #[instrument(skip(self, mode), fields(mode = mode.provider_mode()))]
    pub fn fetch(
        &self,
        origin: Option<Coordinate>,
        destination: Option<Coordinate>,
        mode: TravelMode,
    ) -> Option<RouteResult> {
        let (Some(origin), Some(destination)) = (origin, destination) else {
            debug!("origin or destination unknown, skipping route fetch");
            return None;
        };

        let request = DirectionsRequest::new(origin, destination, mode);
        let result = match self.resolve(&request) {
            Ok(result) => result,
            Err(err) => {
                error!(error = %err, "failed to fetch route");
                RouteResult::failed()
            }
        };

        Some(result)
    }

    /// Fetches into `slot`, keeping the result only if no newer fetch began.
    ///
    /// Returns whether the slot now holds this fetch's result.
    pub fn fetch_into(
        &self,
        slot: &RouteSlot,
        origin: Option<Coordinate>,
        destination: Option<Coordinate>,
        mode: TravelMode,
    ) -> bool {
        if origin.is_none() || destination.is_none() {
            debug!("origin or destination unknown, leaving route slot untouched");
            return false;
        }

        let generation = slot.begin();
        match self.fetch(origin, destination, mode) {
            Some(result) => slot.publish(generation, result),
            None => false,
        }
    }

    fn resolve(&self, request: &DirectionsRequest) -> Result<RouteResult, RouteError> {
        let response = self.provider.directions(request)?;
        normalize(response)
    }
}

/// Reduces a directions document to the first route's first leg.
fn normalize(response: DirectionsResponse) -> Result<RouteResult, RouteError> {
    let Some(route) = response.routes.into_iter().next() else {
        warn!(
            status = response.status.as_deref().unwrap_or("unknown"),
            message = response.error_message.as_deref().unwrap_or_default(),
            "no routes found"
        );
        return Ok(RouteResult::not_found());
    };

    let distance_text = route
        .legs
        .into_iter()
        .next()
        .and_then(|leg| leg.distance)
        .map(|distance| distance.text)
        .ok_or(RouteError::MissingField("routes[0].legs[0].distance"))?;

    let encoded = route
        .overview_polyline
        .ok_or(RouteError::MissingField("routes[0].overview_polyline"))?;
    let coordinates = polyline::decode(&encoded.points)?;

    debug!(
        distance = %distance_text,
        points = coordinates.len(),
        "route resolved"
    );
    Ok(RouteResult::found(distance_text, coordinates))
}
