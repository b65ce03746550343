//! File Dropzone Component
//!
//! Image picker accepting a dropped file or a file dialog choice.
//! Shows a preview of the chosen image.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_filedrop::{
    create_file_drop_signals, format_size, make_on_dragleave, make_on_dragover, make_on_drop,
    make_on_input_change, read_file, revoke_preview,
};

use crate::models::UploadedFile;

/// Drop zone reporting the chosen image through `on_file_uploaded`.
/// Nothing is reported when the user picks no file.
#[component]
pub fn FileDropzone(#[prop(into)] on_file_uploaded: Callback<UploadedFile>) -> impl IntoView {
    let zone = create_file_drop_signals();
    let (preview_url, set_preview_url) = signal(None::<String>);
    let (caption, set_caption) = signal(String::new());

    let on_file = move |file: web_sys::File| {
        spawn_local(async move {
            match read_file(file).await {
                Ok(dropped) => {
                    log::info!("[Dropzone] Picked {} ({} bytes)", dropped.name, dropped.bytes.len());
                    if let Some(old) = preview_url.get_untracked() {
                        revoke_preview(&old);
                    }
                    set_caption.set(format!("{} ({})", dropped.name, format_size(dropped.bytes.len())));
                    set_preview_url.set(dropped.preview_url.clone());
                    on_file_uploaded.run(dropped.into());
                }
                Err(e) => log::warn!("[Dropzone] {}", e),
            }
        });
    };

    view! {
        <div
            class=move || if zone.is_over_read.get() { "dropzone active" } else { "dropzone" }
            on:dragover=make_on_dragover(zone)
            on:dragleave=make_on_dragleave(zone)
            on:drop=make_on_drop(zone, on_file)
        >
            <input
                type="file"
                id="image"
                accept="image/*"
                on:change=make_on_input_change(on_file)
            />
            {move || match preview_url.get() {
                Some(url) => view! {
                    <figure class="dropzone-preview">
                        <img src=url alt="Imagem do ponto" />
                        <figcaption>{move || caption.get()}</figcaption>
                    </figure>
                }.into_any(),
                None => view! {
                    <label for="image">
                        <span class="dropzone-icon">"⬆"</span>
                        "Imagem do estabelecimento"
                    </label>
                }.into_any(),
            }}
        </div>
    }
}
