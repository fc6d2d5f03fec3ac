use std::sync::Arc;

use tapmap_application::{SharedGeocodingGateway, SharedLocationGateway};
use tapmap_core::{
    entities::{MapPoint, ResolvedAddress},
    gateways::{
        geocode::{self, ReverseGeocodingGateway},
        location::{self, LocationGateway},
    },
};
use tapmap_gateways::{location_cache::LocationCache, opencage::OpenCage};

use crate::config::{Config, GeocodingGateway};

pub fn geocoding_gateway(cfg: &Config) -> SharedGeocodingGateway {
    match &cfg.geocoding.gateway {
        Some(GeocodingGateway::OpenCage { api_key }) => {
            log::info!("Use OpenCage geocoding gateway");
            Arc::new(OpenCage::new(api_key.clone()))
        }
        None => {
            log::warn!("No geocoding gateway was configured");
            Arc::new(DummyGeoCodingGw)
        }
    }
}

pub fn location_gateway(cfg: &Config) -> (SharedLocationGateway, Option<Arc<LocationCache>>) {
    match LocationCache::create(&cfg.location.cache_file) {
        Ok(cache) => {
            let cache = Arc::new(cache);
            (Arc::clone(&cache) as SharedLocationGateway, Some(cache))
        }
        Err(err) => {
            log::warn!(
                "Cannot open the location cache {}: {err}",
                cfg.location.cache_file.display()
            );
            (Arc::new(DummyLocationGw), None)
        }
    }
}

struct DummyGeoCodingGw;

impl ReverseGeocodingGateway for DummyGeoCodingGw {
    fn resolve_addresses(
        &self,
        _pos: MapPoint,
        _limit: usize,
    ) -> Result<Vec<ResolvedAddress>, geocode::Error> {
        log::debug!("Cannot resolve addresses because no geocoding gateway was configured");
        Ok(Vec::new())
    }
}

struct DummyLocationGw;

impl LocationGateway for DummyLocationGw {
    fn last_known_position(&self) -> Result<Option<MapPoint>, location::Error> {
        log::debug!("No location source available");
        Ok(None)
    }
}
