mod acquire_initial_location;
mod error;
mod resolve_tapped_address;


pub use self::{acquire_initial_location::*, error::Error, resolve_tapped_address::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::{geocode::ReverseGeocodingGateway, location::LocationGateway},
    };
}
