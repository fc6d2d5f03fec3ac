use std::sync::Arc;

use tokio::task::{self, JoinHandle};

use crate::{
    usecases, CameraPosition, LocationPermission, MapPoint, Marker, ResolvedAddress, ZoomLevel,
};
use tapmap_core::gateways::{geocode::ReverseGeocodingGateway, location::LocationGateway};

/// Title of the single marker rendered by the map widget.
pub const MARKER_TITLE: &str = "Your Location";

pub type SharedLocationGateway = Arc<dyn LocationGateway + Send + Sync>;
pub type SharedGeocodingGateway = Arc<dyn ReverseGeocodingGateway + Send + Sync>;

/// Result of one tap-to-geocode lookup, reported via the log side channel.
#[derive(Debug)]
pub enum GeocodeOutcome {
    Resolved(ResolvedAddress),
    NoMatch,
    Failed(usecases::Error),
}

/// State holder of the map screen.
///
/// Owns the single "current marked coordinate" cell. Both the one-shot
/// location fetch and the per-tap geocode lookup run as blocking tasks on
/// the tokio runtime; neither completion mutates screen state, so rapid
/// successive taps never race the marker.
pub struct MapScreen {
    location_gw: SharedLocationGateway,
    geocoding_gw: SharedGeocodingGateway,
    permission: LocationPermission,
    marked_position: Option<MapPoint>,
    camera: Option<CameraPosition>,
    mounted: bool,
}

impl MapScreen {
    pub fn new(
        location_gw: SharedLocationGateway,
        geocoding_gw: SharedGeocodingGateway,
        permission: LocationPermission,
    ) -> Self {
        Self {
            location_gw,
            geocoding_gw,
            permission,
            marked_position: None,
            camera: None,
            mounted: false,
        }
    }

    /// The current marked coordinate, fed to the map widget's marker layer.
    pub fn marked_position(&self) -> Option<MapPoint> {
        self.marked_position
    }

    /// The camera target set by the initial location fetch, if any.
    pub fn camera(&self) -> Option<CameraPosition> {
        self.camera
    }

    pub fn marker(&self) -> Option<Marker> {
        self.marked_position.map(|position| Marker {
            position,
            title: MARKER_TITLE.to_string(),
        })
    }

    /// Fetches the device's last-known position, exactly once per screen.
    ///
    /// On success the marked coordinate and the camera are set to the fix at
    /// street-level zoom. Without a fix the screen stays at its default view.
    /// Failures are logged and swallowed; there is no retry.
    pub async fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let gateway = Arc::clone(&self.location_gw);
        let permission = self.permission;
        let acquired = task::spawn_blocking(move || {
            usecases::acquire_initial_location(gateway.as_ref(), permission)
        })
        .await;

        match acquired {
            Ok(Ok(Some(pos))) => {
                self.marked_position = Some(pos);
                self.camera = Some(CameraPosition::from_target_zoom(
                    pos,
                    ZoomLevel::STREET_LEVEL,
                ));
                debug!("Initial location acquired: {pos}");
            }
            Ok(Ok(None)) => {
                debug!("No last-known location available");
            }
            Ok(Err(err)) => {
                warn!("Failed to acquire the initial location: {err}");
            }
            Err(err) => {
                warn!("Location task did not complete: {err}");
            }
        }
    }

    /// Handles one tap on the map.
    ///
    /// The marked coordinate is overwritten before the lookup is dispatched,
    /// so the marker relocates regardless of geocoding latency or failure.
    /// The returned handle resolves once the lookup has been logged; it may
    /// be dropped, and overlapping lookups may complete out of order.
    pub fn on_map_tap(&mut self, pos: MapPoint) -> JoinHandle<GeocodeOutcome> {
        self.marked_position = Some(pos);

        let gateway = Arc::clone(&self.geocoding_gw);
        task::spawn_blocking(move || {
            let outcome = match usecases::resolve_tapped_address(gateway.as_ref(), pos) {
                Ok(Some(address)) => GeocodeOutcome::Resolved(address),
                Ok(None) => GeocodeOutcome::NoMatch,
                Err(err) => GeocodeOutcome::Failed(err),
            };
            log_geocode_outcome(pos, &outcome);
            outcome
        })
    }
}

fn log_geocode_outcome(pos: MapPoint, outcome: &GeocodeOutcome) {
    match outcome {
        GeocodeOutcome::Resolved(address) => {
            info!("Selected address: {address}");
        }
        GeocodeOutcome::NoMatch => {
            info!("No address found for the selected location {pos}");
        }
        GeocodeOutcome::Failed(err) => {
            error!("Error fetching address for {pos}: {err}");
        }
    }
}
