use thiserror::Error;

use crate::entities::{MapPoint, ResolvedAddress};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The reverse geocoding request failed: {0}")]
    Request(String),
}

/// Reverse-geocoding service.
pub trait ReverseGeocodingGateway {
    /// Resolves a map position to an ordered list of at most `limit`
    /// candidate addresses. An empty list means no match was found.
    fn resolve_addresses(
        &self,
        pos: MapPoint,
        limit: usize,
    ) -> Result<Vec<ResolvedAddress>, Error>;
}
