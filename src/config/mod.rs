use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Result};

use tapmap_core::entities::LocationPermission;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "tapmap.toml";

const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

pub struct Config {
    pub location: Location,
    pub geocoding: Geocoding,
}

pub struct Location {
    /// JSON file holding the most recently cached device position.
    pub cache_file: PathBuf,
    pub permission: LocationPermission,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

pub enum GeocodingGateway {
    OpenCage { api_key: String },
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_key) = env::var(ENV_NAME_OPENCAGE_API_KEY) {
            cfg.geocoding.gateway = Some(GeocodingGateway::OpenCage { api_key });
        }
        Ok(cfg)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            location,
            geocoding,
        } = from;

        let raw::Location {
            cache_file,
            permission_granted,
        } = location.unwrap_or_default();
        let permission = if permission_granted {
            LocationPermission::Granted
        } else {
            LocationPermission::Denied
        };
        let location = Location {
            cache_file,
            permission,
        };

        let gateway = match geocoding {
            Some(raw::Geocoding {
                gateway: Some(raw::GeocodingGateway::Opencage),
                opencage,
            }) => {
                let raw::OpenCage { api_key } =
                    opencage.ok_or_else(|| anyhow!("Missing OpenCage configuration"))?;
                Some(GeocodingGateway::OpenCage { api_key })
            }
            _ => None,
        };
        let geocoding = Geocoding { gateway };

        Ok(Self {
            location,
            geocoding,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(LocationPermission::Granted, cfg.location.permission);
        assert_eq!(PathBuf::from("tapmap-location.json"), cfg.location.cache_file);
        assert!(cfg.geocoding.gateway.is_none());
    }

    #[test]
    fn config_with_opencage_gateway() {
        let raw: raw::Config = toml::from_str(
            r#"
            [location]
            cache-file = "positions.json"
            permission-granted = false

            [geocoding]
            gateway = "opencage"

            [geocoding.opencage]
            api-key = "secret"
            "#,
        )
        .unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert_eq!(LocationPermission::Denied, cfg.location.permission);
        assert_eq!(PathBuf::from("positions.json"), cfg.location.cache_file);
        assert!(matches!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::OpenCage { ref api_key }) if api_key == "secret"
        ));
    }

    #[test]
    fn env_api_key_selects_the_opencage_gateway() {
        env::set_var(ENV_NAME_OPENCAGE_API_KEY, "from-env");
        let cfg = Config::try_load_from_file_or_default(Some("no-such-tapmap.toml")).unwrap();
        env::remove_var(ENV_NAME_OPENCAGE_API_KEY);
        assert!(matches!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::OpenCage { ref api_key }) if api_key == "from-env"
        ));
    }

    #[test]
    fn opencage_gateway_requires_an_api_key() {
        let raw: raw::Config = toml::from_str(
            r#"
            [geocoding]
            gateway = "opencage"
            "#,
        )
        .unwrap();
        assert!(Config::try_from(raw).is_err());
    }
}
