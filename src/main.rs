#[macro_use]
extern crate log;

mod config;
mod gateways;

use std::{
    io::{self, BufRead},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;

use tapmap_application::MapScreen;
use tapmap_core::entities::MapPoint;
use tapmap_gateways::location_cache::LocationCache;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "tapmap",
    about = "Map marker screen harness: mark tapped positions and reverse-geocode them.",
    version
)]
struct Args {
    /// Path to the configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Simulated tap positions; when omitted, taps are read from stdin
    /// line by line.
    #[arg(long = "tap", value_name = "LAT,LNG")]
    taps: Vec<MapPoint>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;
    run(cfg, args.taps).await
}

async fn run(cfg: Config, taps: Vec<MapPoint>) -> Result<()> {
    let geocoding_gw = gateways::geocoding_gateway(&cfg);
    let (location_gw, location_cache) = gateways::location_gateway(&cfg);

    let mut screen = MapScreen::new(location_gw, geocoding_gw, cfg.location.permission);
    screen.mount().await;
    if let Some(camera) = screen.camera() {
        info!("Camera centered on {} (zoom {})", camera.target, camera.zoom);
    }

    if !taps.is_empty() {
        for pos in taps {
            tap(&mut screen, location_cache.as_deref(), pos).await;
        }
        return Ok(());
    }

    info!("Reading tap positions from stdin (one 'lat,lng' pair per line)");
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<MapPoint>() {
            Ok(pos) => tap(&mut screen, location_cache.as_deref(), pos).await,
            Err(err) => warn!("Ignoring input line: {err}"),
        }
    }
    Ok(())
}

async fn tap(screen: &mut MapScreen, location_cache: Option<&LocationCache>, pos: MapPoint) {
    let lookup = screen.on_map_tap(pos);
    if let Some(cache) = location_cache {
        if let Err(err) = cache.record_position(pos) {
            warn!("Failed to record the last-known position: {err}");
        }
    }
    // Wait for the lookup so its log line lands before the next prompt.
    lookup.await.ok();
}
