//! # tapmap-gateways
//!
//! Real implementations of the gateway traits defined in `tapmap-core`.

pub mod location_cache;
pub mod opencage;
