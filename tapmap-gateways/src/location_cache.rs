use std::{io, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use tapmap_core::{
    entities::MapPoint,
    gateways::location::{self, LocationGateway},
};

const LAST_KNOWN_ID: &str = "last-known-position";

#[derive(Debug, Serialize, Deserialize)]
struct CachedPosition {
    lat: f64,
    lng: f64,
}

/// Last-known device position persisted in a single JSON file.
///
/// Stands in for a platform location provider on hosts without one: the
/// harness records each marked position, and the next run recenters there.
pub struct LocationCache {
    store: jfs::Store,
}

impl LocationCache {
    pub fn create<P: AsRef<Path>>(file: P) -> io::Result<Self> {
        let cfg = jfs::Config {
            single: true,
            pretty: true,
            ..Default::default()
        };
        let store = jfs::Store::new_with_cfg(file, cfg)?;
        Ok(Self { store })
    }

    /// Remembers the given position as the new last-known device position.
    pub fn record_position(&self, pos: MapPoint) -> io::Result<()> {
        let (lat, lng) = pos.to_lat_lng_deg();
        self.store
            .save_with_id(&CachedPosition { lat, lng }, LAST_KNOWN_ID)?;
        Ok(())
    }
}

impl LocationGateway for LocationCache {
    fn last_known_position(&self) -> Result<Option<MapPoint>, location::Error> {
        match self.store.get::<CachedPosition>(LAST_KNOWN_ID) {
            Ok(cached) => {
                let pos = MapPoint::try_from_lat_lng_deg(cached.lat, cached.lng);
                if pos.is_none() {
                    debug!(
                        "Ignoring cached position with out-of-range coordinates: {},{}",
                        cached.lat, cached.lng
                    );
                }
                Ok(pos)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(location::Error::Unavailable(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_in(dir: &tempfile::TempDir) -> LocationCache {
        LocationCache::create(dir.path().join("location.json")).unwrap()
    }

    #[test]
    fn round_trip_last_known_position() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(&dir);
        let pos = MapPoint::try_from_lat_lng_deg(48.7755, 9.1827).unwrap();
        cache.record_position(pos).unwrap();
        assert_eq!(Some(pos), cache.last_known_position().unwrap());
    }

    #[test]
    fn missing_cache_yields_no_fix() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(&dir);
        assert_eq!(None, cache.last_known_position().unwrap());
    }

    #[test]
    fn recorded_position_survives_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("location.json");
        let pos = MapPoint::try_from_lat_lng_deg(-33.8671, 151.2071).unwrap();
        LocationCache::create(&file)
            .unwrap()
            .record_position(pos)
            .unwrap();
        let reopened = LocationCache::create(&file).unwrap();
        assert_eq!(Some(pos), reopened.last_known_position().unwrap());
    }

    #[test]
    fn out_of_range_cached_coordinates_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("location.json");
        let cache = LocationCache::create(&file).unwrap();
        cache
            .store
            .save_with_id(
                &CachedPosition {
                    lat: 999.0,
                    lng: 0.0,
                },
                LAST_KNOWN_ID,
            )
            .unwrap();
        assert_eq!(None, cache.last_known_position().unwrap());
    }
}
