//! Ecoleta Create Point Page
//!
//! Form for registering a collection point: entity data, map position,
//! UF/city, collected items and an image.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::actions;
use crate::browser::HOME_ROUTE;
use crate::components::{AddressSelect, FileDropzone, ItemsGrid, PointMap};
use crate::config::AppConfig;
use crate::context::{use_app_context, AppContext};
use crate::models::{Coordinate, UploadedFile};
use crate::store::{
    map_positions, store_map_click, store_set_field, store_set_file, use_point_store,
    CreatePointState, CreatePointStateStoreFields,
};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(CreatePointState::new(config.default_position));

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(config));

    view! { <CreatePoint /> }
}

#[component]
fn CreatePoint() -> impl IntoView {
    let store = use_point_store();
    let ctx = use_app_context();
    let config = ctx.config();

    // Reference data on mount
    Effect::new(move |_| {
        actions::load_reference_data(store, ctx.config());
    });

    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let name = input.name();
        if !store_set_field(&store, &name, input.value()) {
            log::debug!("[Form] Ignoring unknown field {}", name);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions::submit_point(store, ctx.config());
    };

    let on_map_click = Callback::new(move |position: Coordinate| {
        store_map_click(&store, position);
    });

    let on_file_uploaded = Callback::new(move |file: UploadedFile| {
        store_set_file(&store, file);
    });

    let (center, marker) = map_positions(store);

    let is_submitting = move || store.submit_status().get().is_submitting();
    let submit_error = move || store.submit_status().get().error_message().map(str::to_string);

    view! {
        <div id="page-create-point">
            <header>
                <img src="assets/logo.svg" alt="Ecoleta" />
                <a href=HOME_ROUTE>
                    <span class="back-arrow">"←"</span>
                    "Voltar para Home"
                </a>
            </header>

            <form on:submit=on_submit>
                <h1>"Cadastro do ponto de coleta"</h1>

                <FileDropzone on_file_uploaded=on_file_uploaded />

                <fieldset>
                    <legend>
                        <h2>"Dados"</h2>
                    </legend>

                    <div class="field">
                        <label for="name">"Nome da entidade"</label>
                        <input type="text" name="name" id="name" on:input=on_input />
                    </div>

                    <div class="field-group">
                        <div class="field">
                            <label for="email">"E-mail"</label>
                            <input type="text" name="email" id="email" on:input=on_input />
                        </div>
                        <div class="field">
                            <label for="whatssap">"Whatssap"</label>
                            <input type="text" name="whatssap" id="whatssap" on:input=on_input />
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Endereço"</h2>
                        <span>"Selecione o endereço no mapa"</span>
                    </legend>

                    <PointMap
                        center=center
                        marker=marker
                        on_click=on_map_click
                        zoom=config.map_zoom
                        tile_url=config.tile_url.clone()
                        attribution=config.tile_attribution.clone()
                    />

                    <AddressSelect />
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Itens de Coleta"</h2>
                        <span>"Selecione um ou mais itens abaixo"</span>
                    </legend>

                    <ItemsGrid />
                </fieldset>

                {move || submit_error().map(|message| view! {
                    <p class="submit-error">"Não foi possível cadastrar o ponto: " {message}</p>
                })}

                <button type="submit" disabled=is_submitting>
                    {move || if is_submitting() { "Enviando..." } else { "Cadastrar ponto de coleta" }}
                </button>
            </form>
        </div>
    }
}
