//! IBGE Endpoints
//!
//! Brazilian states (UF) and their municipalities.

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::models::{IbgeCity, IbgeUf};
use super::get_json;

/// UF abbreviations in the order IBGE returns them
pub async fn list_ufs(config: &AppConfig) -> Result<Vec<String>, FetchError> {
    let ufs: Vec<IbgeUf> = get_json(&config.ufs_url()).await?;
    Ok(uf_codes(ufs))
}

/// City names of one UF
pub async fn list_cities(config: &AppConfig, uf: &str) -> Result<Vec<String>, FetchError> {
    let cities: Vec<IbgeCity> = get_json(&config.cities_url(uf)).await?;
    Ok(city_names(cities))
}

pub fn uf_codes(ufs: Vec<IbgeUf>) -> Vec<String> {
    ufs.into_iter().map(|uf| uf.sigla).collect()
}

pub fn city_names(cities: Vec<IbgeCity>) -> Vec<String> {
    cities.into_iter().map(|city| city.nome).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uf_codes_keep_order() {
        let ufs = vec![
            IbgeUf { sigla: "RO".to_string() },
            IbgeUf { sigla: "AC".to_string() },
            IbgeUf { sigla: "SP".to_string() },
        ];
        assert_eq!(uf_codes(ufs), vec!["RO", "AC", "SP"]);
    }

    #[test]
    fn test_city_names() {
        let json = r#"[{"id":3509502,"nome":"Campinas"},{"id":3550308,"nome":"São Paulo"}]"#;
        let cities: Vec<IbgeCity> = serde_json::from_str(json).unwrap();
        assert_eq!(city_names(cities), vec!["Campinas", "São Paulo"]);
    }
}
