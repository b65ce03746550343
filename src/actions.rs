//! Page Actions
//!
//! Async work started by the page: reference data on mount, the
//! dependent city lookup and the point submission. Each one applies its
//! result through the store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browser;
use crate::config::AppConfig;
use crate::store::{store_set_items, store_set_ufs, AfterSubmit, PointStore};

pub const SUCCESS_MESSAGE: &str = "Ponto de coleta criado com Sucesso!";

/// Items, UFs and device position, all independent of each other.
/// Failures leave the matching list empty.
pub fn load_reference_data(store: PointStore, config: AppConfig) {
    let items_config = config.clone();
    spawn_local(async move {
        match api::list_items(&items_config).await {
            Ok(items) => {
                log::info!("[Items] Loaded {} items", items.len());
                store_set_items(&store, items);
            }
            Err(e) => log::warn!("[Items] Failed to load items: {}", e),
        }
    });

    spawn_local(async move {
        match api::list_ufs(&config).await {
            Ok(ufs) => {
                log::info!("[IBGE] Loaded {} UFs", ufs.len());
                store_set_ufs(&store, ufs);
            }
            Err(e) => log::warn!("[IBGE] Failed to load UFs: {}", e),
        }
    });

    browser::request_current_position(move |position| {
        log::info!("[Geo] Using device position {:?}", position);
        store.write().apply_geolocation(position);
    });
}

/// Apply a UF choice and fetch its cities when needed
pub fn change_uf(store: PointStore, config: AppConfig, uf: String) {
    let Some(request) = store.write().select_uf(&uf) else {
        return;
    };
    log::debug!("[IBGE] Loading cities for {} (token {})", request.uf, request.token);

    spawn_local(async move {
        match api::list_cities(&config, &request.uf).await {
            Ok(cities) => {
                let count = cities.len();
                if store.write().apply_cities(request.token, cities) {
                    log::info!("[IBGE] Loaded {} cities for {}", count, request.uf);
                } else {
                    log::debug!("[IBGE] Dropped stale cities for {}", request.uf);
                }
            }
            Err(e) => log::warn!("[IBGE] Failed to load cities for {}: {}", request.uf, e),
        }
    });
}

/// POST the current form. Ignored while a submission is in flight.
pub fn submit_point(store: PointStore, config: AppConfig) {
    let Some(submission) = store.write().begin_submit() else {
        log::debug!("[Points] Submission already in flight");
        return;
    };

    spawn_local(async move {
        let result = api::create_point(&config, &submission).await;
        match &result {
            Ok(()) => log::info!("[Points] Created point {:?}", submission.field("name")),
            Err(e) => log::error!("[Points] Failed to create point: {}", e),
        }

        if store.write().finish_submit(result) == AfterSubmit::NavigateHome {
            browser::alert(SUCCESS_MESSAGE);
            browser::navigate_home();
        }
    });
}
