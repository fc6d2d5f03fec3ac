use thiserror::Error;

use crate::entities::MapPoint;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The location service is unavailable: {0}")]
    Unavailable(String),
}

/// Platform location service.
pub trait LocationGateway {
    /// Returns the most recently cached device position.
    ///
    /// `Ok(None)` means no fix has been recorded yet, which is a normal
    /// outcome and not an error.
    fn last_known_position(&self) -> Result<Option<MapPoint>, Error>;
}
