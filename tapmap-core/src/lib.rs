//! # tapmap-core
//!
//! Gateway traits and pure usecases of the map marker screen.

pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use tapmap_entities::{address::*, camera::*, geo::*, marker::*, permission::*};
}
