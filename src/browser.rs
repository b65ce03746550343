//! Browser Helpers
//!
//! Geolocation, blocking alerts and navigation.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Coordinate;

/// Root route of the application
pub const HOME_ROUTE: &str = "/";

/// Ask for the device position once. `on_position` is only called on
/// success; denial and missing support are logged and otherwise ignored.
pub fn request_current_position<F>(on_position: F)
where
    F: FnOnce(Coordinate) + 'static,
{
    let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok()) else {
        log::debug!("[Geo] geolocation not available, keeping default position");
        return;
    };

    let success = Closure::once_into_js(move |position: JsValue| {
        match coordinate_from_position(&position) {
            Some(coordinate) => on_position(coordinate),
            None => log::debug!("[Geo] position without coordinates"),
        }
    });
    let failure = Closure::once_into_js(|err: JsValue| {
        log::debug!("[Geo] position unavailable: {:?}", err);
    });

    if let Err(e) = geolocation.get_current_position_with_error_callback(
        success.unchecked_ref(),
        Some(failure.unchecked_ref()),
    ) {
        log::debug!("[Geo] getCurrentPosition rejected: {:?}", e);
    }
}

/// Read `position.coords.{latitude,longitude}`
fn coordinate_from_position(position: &JsValue) -> Option<Coordinate> {
    let coords = js_sys::Reflect::get(position, &"coords".into()).ok()?;
    let latitude = js_sys::Reflect::get(&coords, &"latitude".into()).ok()?.as_f64()?;
    let longitude = js_sys::Reflect::get(&coords, &"longitude".into()).ok()?.as_f64()?;
    Some(Coordinate::new(latitude, longitude))
}

/// Blocking `window.alert`
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("[Nav] alert failed: {:?}", e);
        }
    }
}

pub fn navigate_home() {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().set_href(HOME_ROUTE) {
        log::error!("[Nav] failed to navigate home: {:?}", e);
    }
}
