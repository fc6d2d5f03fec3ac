#![deny(missing_debug_implementations)]

//! # tapmap-entities
//!
//! Reusable, agnostic domain entities for the tapmap screen flows.
//!
//! The entities only contain generic value types that do not reveal any
//! application-specific flow logic.

pub mod address;
pub mod camera;
pub mod geo;
pub mod marker;
pub mod permission;
