use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

/// Geographical latitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    pub const DEG_MIN: f64 = -90.0;
    pub const DEG_MAX: f64 = 90.0;

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if deg.is_finite() && (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// Geographical longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    pub const DEG_MIN: f64 = -180.0;
    pub const DEG_MAX: f64 = 180.0;

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if deg.is_finite() && (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical position on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat().to_deg(), self.lng().to_deg())
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Error)]
pub enum MapPointParseError {
    #[error("Expected a 'lat,lng' pair but got '{0}'")]
    Format(String),
    #[error("Invalid latitude '{0}'")]
    Latitude(String),
    #[error("Invalid longitude '{0}'")]
    Longitude(String),
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_deg_str, lng_deg_str)) = s.split(',').map(str::trim).collect_tuple() else {
            return Err(MapPointParseError::Format(s.to_string()));
        };
        let lat = lat_deg_str
            .parse::<f64>()
            .ok()
            .and_then(LatCoord::try_from_deg)
            .ok_or_else(|| MapPointParseError::Latitude(lat_deg_str.to_string()))?;
        let lng = lng_deg_str
            .parse::<f64>()
            .ok()
            .and_then(LngCoord::try_from_deg)
            .ok_or_else(|| MapPointParseError::Longitude(lng_deg_str.to_string()))?;
        Ok(MapPoint::new(lat, lng))
    }
}
