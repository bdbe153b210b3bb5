//! Seams between route fetching and the transport that serves it.
//!
//! [`crate::fetcher::RouteFetcher`] only needs something that answers a
//! directions request. The HTTP client implements this; tests and embedding
//! apps can supply their own.

use crate::directions::{DirectionsRequest, DirectionsResponse};
use crate::error::RouteError;

/// Answers one directions request with the provider's response document.
///
/// Implementations issue at most one outbound call per invocation and do
/// not retry.
pub trait DirectionsProvider {
    fn directions(&self, request: &DirectionsRequest) -> Result<DirectionsResponse, RouteError>;
}

impl<P> DirectionsProvider for &P
where
    P: DirectionsProvider + ?Sized,
{
    fn directions(&self, request: &DirectionsRequest) -> Result<DirectionsResponse, RouteError> {
        (**self).directions(request)
    }
}
