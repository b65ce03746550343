//! Address Select Component
//!
//! UF and city dropdowns. Changing the UF reloads the city list.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::models::NO_SELECTION;
use crate::store::{store_select_city, use_point_store, CreatePointStateStoreFields};

#[component]
pub fn AddressSelect() -> impl IntoView {
    let store = use_point_store();
    let ctx = use_app_context();

    let on_uf_change = move |ev: web_sys::Event| {
        actions::change_uf(store, ctx.config(), event_target_value(&ev));
    };

    let on_city_change = move |ev: web_sys::Event| {
        store_select_city(&store, &event_target_value(&ev));
    };

    view! {
        <div class="field-group">
            <div class="field">
                <label for="uf">"Estado (UF)"</label>
                <select
                    name="uf"
                    id="uf"
                    prop:value=move || store.selected_uf().get()
                    on:change=on_uf_change
                >
                    <option value=NO_SELECTION>"Selecione uma UF"</option>
                    <For
                        each=move || store.ufs().get()
                        key=|uf| uf.clone()
                        children=move |uf| {
                            let label = uf.clone();
                            view! { <option value=uf>{label}</option> }
                        }
                    />
                </select>
            </div>
            <div class="field">
                <label for="city">"Cidade"</label>
                <select
                    name="city"
                    id="city"
                    prop:value=move || store.selected_city().get()
                    on:change=on_city_change
                >
                    <option value=NO_SELECTION>"Selecione uma Cidade"</option>
                    <For
                        each=move || store.cities().get()
                        key=|city| city.clone()
                        children=move |city| {
                            let label = city.clone();
                            view! { <option value=city>{label}</option> }
                        }
                    />
                </select>
            </div>
        </div>
    }
}
