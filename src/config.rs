//! Service configuration from environment variables.

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::error::MatchError;
use crate::google::{GoogleConfig, GoogleDirectionsClient};
use crate::matcher::MatchConfig;
use crate::osrm::{OsrmClient, OsrmConfig};
use crate::straight_line::StraightLineProvider;
use crate::traits::{ProviderKind, RouteProvider};

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
    Match(MatchError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => write!(f, "invalid {}: {:?}", key, value),
            ConfigError::Match(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<MatchError> for ConfigError {
    fn from(err: MatchError) -> Self {
        ConfigError::Match(err)
    }
}

impl FromStr for ProviderKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "osrm" => Ok(ProviderKind::Osrm),
            "google" => Ok(ProviderKind::Google),
            "straight-line" | "straight_line" => Ok(ProviderKind::StraightLine),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub osrm: OsrmConfig,
    /// Present when `kind` is `Google`.
    pub google: Option<GoogleConfig>,
}

impl ProviderConfig {
    /// Builds the configured provider.
    ///
    /// HTTP providers own a blocking reqwest client, so call this outside of
    /// an async context.
    pub fn build(&self) -> Result<Box<dyn RouteProvider>, MatchError> {
        match self.kind {
            ProviderKind::Osrm => Ok(Box::new(OsrmClient::new(self.osrm.clone())?)),
            ProviderKind::Google => {
                let google = self.google.clone().ok_or_else(|| {
                    MatchError::RouteFetchFailed("Google provider is not configured".to_string())
                })?;
                Ok(Box::new(GoogleDirectionsClient::new(google)?))
            }
            ProviderKind::StraightLine => Ok(Box::new(StraightLineProvider)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub provider: ProviderConfig,
    pub matching: MatchConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for unset
    /// keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_or(&lookup, "BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?;
        let kind = parse_or(&lookup, "ROUTE_PROVIDER", ProviderKind::Osrm)?;
        let timeout_secs = parse_or(&lookup, "PROVIDER_TIMEOUT_SECS", 10u64)?;
        // A zero timeout fails every request.
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "PROVIDER_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
            });
        }

        let defaults = OsrmConfig::default();
        let osrm = OsrmConfig {
            base_url: lookup("OSRM_BASE_URL").unwrap_or(defaults.base_url),
            profile: lookup("OSRM_PROFILE").unwrap_or(defaults.profile),
            timeout_secs,
        };

        let google = match lookup("GOOGLE_MAPS_API_KEY") {
            Some(api_key) => {
                let mut google = GoogleConfig::new(api_key);
                if let Some(base_url) = lookup("GOOGLE_DIRECTIONS_BASE_URL") {
                    google.base_url = base_url;
                }
                google.timeout_secs = timeout_secs;
                Some(google)
            }
            None if kind == ProviderKind::Google => {
                return Err(ConfigError::Missing("GOOGLE_MAPS_API_KEY"));
            }
            None => None,
        };

        let defaults = MatchConfig::default();
        let matching = MatchConfig {
            resample_interval_m: parse_or(
                &lookup,
                "RESAMPLE_INTERVAL_M",
                defaults.resample_interval_m,
            )?,
            proximity_radius_m: parse_or(&lookup, "PROXIMITY_RADIUS_M", defaults.proximity_radius_m)?,
            suitability_threshold_pct: parse_or(
                &lookup,
                "SUITABILITY_THRESHOLD_PCT",
                defaults.suitability_threshold_pct,
            )?,
        };
        matching.validate()?;

        Ok(Self {
            bind_addr,
            provider: ProviderConfig { kind, osrm, google },
            matching,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => {
            let parsed = value.trim().parse();
            parsed.map_err(|_| ConfigError::Invalid { key, value })
        }
        None => Ok(default),
    }
}
