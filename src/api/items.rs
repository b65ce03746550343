//! Item Endpoints

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::models::SelectableItem;
use super::get_json;

pub async fn list_items(config: &AppConfig) -> Result<Vec<SelectableItem>, FetchError> {
    get_json(&config.items_url()).await
}
