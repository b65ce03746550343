//! Application Config
//!
//! Endpoints and map settings, fixed at build time.
//! Override the endpoints with `ECOLETA_API_URL` / `ECOLETA_IBGE_URL`
//! when running `trunk build`.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::{Coordinate, DEFAULT_POSITION};

const DEFAULT_API_URL: &str = "http://localhost:3333";
const DEFAULT_IBGE_URL: &str = "https://servicodados.ibge.gov.br/api/v1";
const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Ecoleta backend (items, points)
    pub api_base_url: String,
    /// IBGE localidades API
    pub ibge_base_url: String,
    pub tile_url: String,
    pub tile_attribution: String,
    pub map_zoom: f64,
    pub default_position: Coordinate,
    /// Records kept by the in-memory logger
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_IBGE_URL)
    }
}

impl AppConfig {
    pub fn new(api_base_url: &str, ibge_base_url: &str) -> Self {
        Self {
            api_base_url: trim_base(api_base_url),
            ibge_base_url: trim_base(ibge_base_url),
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: TILE_ATTRIBUTION.to_string(),
            map_zoom: 15.0,
            default_position: DEFAULT_POSITION,
            log_capacity: 200,
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            option_env!("ECOLETA_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("ECOLETA_IBGE_URL").unwrap_or(DEFAULT_IBGE_URL),
        )
    }

    pub fn items_url(&self) -> String {
        format!("{}/items", self.api_base_url)
    }

    pub fn points_url(&self) -> String {
        format!("{}/points", self.api_base_url)
    }

    pub fn ufs_url(&self) -> String {
        format!("{}/localidades/estados", self.ibge_base_url)
    }

    pub fn cities_url(&self, uf: &str) -> String {
        format!(
            "{}/localidades/estados/{}/municipios",
            self.ibge_base_url,
            utf8_percent_encode(uf, NON_ALPHANUMERIC)
        )
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = AppConfig::default();
        assert_eq!(config.items_url(), "http://localhost:3333/items");
        assert_eq!(config.points_url(), "http://localhost:3333/points");
        assert_eq!(
            config.ufs_url(),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados"
        );
        assert_eq!(
            config.cities_url("SP"),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados/SP/municipios"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::new("https://api.example.org/", "https://ibge.example.org//");
        assert_eq!(config.items_url(), "https://api.example.org/items");
        assert_eq!(config.ufs_url(), "https://ibge.example.org/localidades/estados");
    }

    #[test]
    fn test_city_segment_encoded() {
        let config = AppConfig::default();
        assert!(config.cities_url("S/P").ends_with("/estados/S%2FP/municipios"));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.map_zoom, 15.0);
        assert_eq!(config.default_position, DEFAULT_POSITION);
    }
}
