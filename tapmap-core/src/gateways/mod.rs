pub mod geocode;
pub mod location;
