use crate::geo::MapPoint;

/// A single marker to be rendered by the map widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: MapPoint,
    pub title: String,
}
