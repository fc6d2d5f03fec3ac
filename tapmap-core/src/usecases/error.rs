use thiserror::Error;

use crate::gateways::{geocode, location};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Location permission has not been granted")]
    LocationPermission,
    #[error(transparent)]
    Location(#[from] location::Error),
    #[error(transparent)]
    GeoCoding(#[from] geocode::Error),
}
