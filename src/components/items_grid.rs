//! Items Grid Component
//!
//! Collectable categories; clicking one toggles it.

use leptos::prelude::*;

use crate::store::{store_toggle_item, use_point_store, CreatePointStateStoreFields};

#[component]
pub fn ItemsGrid() -> impl IntoView {
    let store = use_point_store();

    view! {
        <ul class="items-grid">
            <For
                each=move || store.items().get()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    let is_selected = move || store.selected_items().get().contains(&id);
                    view! {
                        <li
                            class=move || if is_selected() { "selected" } else { "" }
                            on:click=move |_| store_toggle_item(&store, id)
                        >
                            <img src=item.image_url.clone() alt=item.title.clone() />
                            <span>{item.title.clone()}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
