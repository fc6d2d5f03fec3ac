use geocoding::{Opencage, Point, Reverse};
use log::debug;

use tapmap_core::{
    entities::{MapPoint, ResolvedAddress},
    gateways::geocode::{self, ReverseGeocodingGateway},
};

/// Reverse geocoding backed by the OpenCage web service.
///
/// The underlying client is blocking; callers are expected to dispatch
/// requests off the thread that owns the screen state.
pub struct OpenCage {
    api_key: String,
}

impl OpenCage {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

impl ReverseGeocodingGateway for OpenCage {
    fn resolve_addresses(
        &self,
        pos: MapPoint,
        limit: usize,
    ) -> Result<Vec<ResolvedAddress>, geocode::Error> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let oc = Opencage::new(self.api_key.clone());
        let (lat, lng) = pos.to_lat_lng_deg();
        // geo points are (x, y), i.e. (lng, lat)
        let point = Point::new(lng, lat);
        let formatted = oc
            .reverse(&point)
            .map_err(|err| geocode::Error::Request(err.to_string()))?;
        debug!("Reverse geocoded {pos}: {formatted:?}");
        Ok(formatted
            .map(ResolvedAddress::new)
            .into_iter()
            .take(limit)
            .collect())
    }
}
