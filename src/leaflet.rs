//! Leaflet FFI
//!
//! Bindings to the global `L` object loaded from index.html.
//! Only the calls the point map needs.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::Coordinate;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn create_map(element: &web_sys::HtmlElement) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method)]
    pub fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function) -> LeafletMap;

    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap) -> LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = TileLayer)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Marker)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(lat_lng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    pub fn set_lat_lng(this: &Marker, lat_lng: &JsValue) -> Marker;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions<'a> {
    pub attribution: &'a str,
    pub max_zoom: u8,
}

/// `[lat, lng]` array accepted wherever Leaflet expects a LatLng
pub fn lat_lng(coordinate: Coordinate) -> JsValue {
    js_sys::Array::of2(&coordinate.latitude.into(), &coordinate.longitude.into()).into()
}

/// Read `event.latlng` from a Leaflet mouse event
pub fn event_lat_lng(event: &JsValue) -> Option<Coordinate> {
    let lat_lng = js_sys::Reflect::get(event, &"latlng".into()).ok()?;
    let lat = js_sys::Reflect::get(&lat_lng, &"lat".into()).ok()?.as_f64()?;
    let lng = js_sys::Reflect::get(&lat_lng, &"lng".into()).ok()?.as_f64()?;
    Some(Coordinate::new(lat, lng))
}
