// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. Credentials for
//! the places API may also be supplied through the environment, which takes
//! precedence over the file.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "hoodmap";

const ENV_CLIENT_ID: &str = "HOODMAP_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "HOODMAP_CLIENT_SECRET";
const ENV_PLACES_ENDPOINT: &str = "HOODMAP_PLACES_ENDPOINT";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub places: PlacesConfig,
    pub map: MapConfig,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            places: PlacesConfig::default(),
            map: MapConfig::default(),
            log: LogConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PlacesConfig {
    pub endpoint: String,
    pub client_id: String,
    pub client_secret: String,
    pub api_version: String,
    pub timeout_secs: Option<u64>,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.foursquare.com/v2/venues/".to_string(),
            client_id: String::new(),
            client_secret: String::new(),
            api_version: "20170801".to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
    pub detail_zoom: u8,
    pub center_delay_ms: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        // Colombo
        Self {
            center_lat: 6.9092478,
            center_lng: 79.856681,
            zoom: 8,
            detail_zoom: 16,
            center_delay_ms: 500,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub directory: String,
    pub file_name: String,
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            file_name: "hoodmap.log".to_string(),
            filter: "hoodmap=info".to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    let mut config: AppConfig = confy::load(CONFIG_NAME, None).unwrap_or_default();
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    config
}

fn apply_env_overrides(config: &mut AppConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(client_id) = var(ENV_CLIENT_ID) {
        config.places.client_id = client_id;
    }
    if let Some(client_secret) = var(ENV_CLIENT_SECRET) {
        config.places.client_secret = client_secret;
    }
    if let Some(endpoint) = var(ENV_PLACES_ENDPOINT) {
        config.places.endpoint = endpoint;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_overrides_credentials() {
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, |key| match key {
            ENV_CLIENT_ID => Some("id-from-env".to_string()),
            ENV_CLIENT_SECRET => Some("secret-from-env".to_string()),
            _ => None,
        });

        assert_eq!(config.places.client_id, "id-from-env");
        assert_eq!(config.places.client_secret, "secret-from-env");
        assert_eq!(config.places.endpoint, PlacesConfig::default().endpoint);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let config: AppConfig = serde_json::from_str(r#"{"map": {"zoom": 10}}"#).unwrap();

        assert_eq!(config.map.zoom, 10);
        assert_eq!(config.map.detail_zoom, 16);
        assert_eq!(config.places.api_version, "20170801");
        assert_eq!(config.log.file_name, "hoodmap.log");
    }
}
