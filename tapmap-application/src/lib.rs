//! # tapmap-application
//!
//! The interactive map marker screen: a single state holder fed by the
//! one-shot location acquirer and the tap-to-geocode flow.

#[macro_use]
extern crate log;

mod map_screen;

pub use self::map_screen::*;

pub(crate) use tapmap_core::{entities::*, usecases};
