//! Point Map Component
//!
//! Leaflet map with a single marker. Clicks are reported as coordinates;
//! the parent decides where the marker goes.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::leaflet::{self, LeafletMap, Marker, TileLayerOptions};
use crate::models::Coordinate;

/// Live Leaflet objects, created once the container is mounted
struct MapHandle {
    map: LeafletMap,
    marker: Marker,
    _on_click: Closure<dyn FnMut(JsValue)>,
}

#[component]
pub fn PointMap(
    /// Map centre; the view follows it
    #[prop(into)] center: Signal<Coordinate>,
    /// Marker position
    #[prop(into)] marker: Signal<Coordinate>,
    #[prop(into)] on_click: Callback<Coordinate>,
    zoom: f64,
    #[prop(into)] tile_url: String,
    #[prop(into)] attribution: String,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let handle = StoredValue::new_local(None::<MapHandle>);
    let (ready, set_ready) = signal(false);

    // Build the map once the div exists
    Effect::new(move |_| {
        let Some(element) = container.get() else { return };
        if handle.with_value(|h| h.is_some()) {
            return;
        }

        let map = leaflet::create_map(&element);
        map.set_view(&leaflet::lat_lng(center.get_untracked()), zoom);

        let options = TileLayerOptions { attribution: &attribution, max_zoom: 19 };
        match serde_wasm_bindgen::to_value(&options) {
            Ok(options) => {
                leaflet::tile_layer(&tile_url, &options).add_to(&map);
            }
            Err(e) => log::error!("[Map] Invalid tile options: {}", e),
        }

        let pin = leaflet::marker(&leaflet::lat_lng(marker.get_untracked())).add_to(&map);

        let on_map_click = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            if let Some(position) = leaflet::event_lat_lng(&event) {
                on_click.run(position);
            }
        });
        map.on("click", on_map_click.as_ref().unchecked_ref());

        handle.set_value(Some(MapHandle {
            map,
            marker: pin,
            _on_click: on_map_click,
        }));
        set_ready.set(true);
    });

    Effect::new(move |_| {
        let position = center.get();
        if !ready.get() {
            return;
        }
        handle.with_value(|h| {
            if let Some(h) = h {
                h.map.set_view(&leaflet::lat_lng(position), zoom);
            }
        });
    });

    Effect::new(move |_| {
        let position = marker.get();
        if !ready.get() {
            return;
        }
        handle.with_value(|h| {
            if let Some(h) = h {
                h.marker.set_lat_lng(&leaflet::lat_lng(position));
            }
        });
    });

    on_cleanup(move || {
        handle.try_update_value(|h| {
            if let Some(h) = h.take() {
                h.map.remove();
            }
        });
    });

    view! { <div class="point-map" node_ref=container></div> }
}
