use std::fmt;

use crate::geo::MapPoint;

/// Discrete map zoom, clamped to the range supported by common tile providers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    pub const MIN: Self = Self(0.0);
    pub const MAX: Self = Self(21.0);

    /// Frames a street or neighborhood.
    pub const STREET_LEVEL: Self = Self(15.0);

    pub fn from_level(level: f32) -> Self {
        Self(level.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub const fn to_level(self) -> f32 {
        self.0
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_level())
    }
}

/// The map viewport: where the camera points and how close it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPosition {
    pub target: MapPoint,
    pub zoom: ZoomLevel,
}

impl CameraPosition {
    pub const fn from_target_zoom(target: MapPoint, zoom: ZoomLevel) -> Self {
        Self { target, zoom }
    }
}
