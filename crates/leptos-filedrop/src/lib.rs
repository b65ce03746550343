//! Leptos FileDrop Utilities
//!
//! Drag-and-drop and file-input helpers for Leptos.
//! Handlers only pick the first file; reading it into memory is left to
//! the caller through [`read_file`].

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Content type used when the browser reports none
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A file chosen by the user, fully read into memory
#[derive(Clone, Debug, PartialEq)]
pub struct DroppedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    /// Object URL for an `<img>` preview (revoke with [`revoke_preview`])
    pub preview_url: Option<String>,
}

/// Drop zone state signals
#[derive(Clone, Copy)]
pub struct FileDropSignals {
    /// A drag carrying data is currently over the zone
    pub is_over_read: ReadSignal<bool>,
    pub is_over_write: WriteSignal<bool>,
}

pub fn create_file_drop_signals() -> FileDropSignals {
    let (is_over_read, is_over_write) = signal(false);
    FileDropSignals {
        is_over_read,
        is_over_write,
    }
}

/// Create dragover handler. Prevents default so the browser allows a drop.
pub fn make_on_dragover(zone: FileDropSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if !zone.is_over_read.get_untracked() {
            zone.is_over_write.set(true);
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(zone: FileDropSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        zone.is_over_write.set(false);
    }
}

/// Create drop handler. Calls `on_file` with the first dropped file, if any.
pub fn make_on_drop<F>(zone: FileDropSignals, on_file: F) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    F: Fn(web_sys::File) + Copy + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        zone.is_over_write.set(false);

        let files = ev.data_transfer().and_then(|dt| dt.files());
        if let Some(file) = first_file(files) {
            on_file(file);
        }
    }
}

/// Create change handler for an `<input type="file">`
pub fn make_on_input_change<F>(on_file: F) -> impl Fn(web_sys::Event) + Copy + 'static
where
    F: Fn(web_sys::File) + Copy + 'static,
{
    move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = first_file(input.files()) {
            on_file(file);
        }
    }
}

/// First file of a (possibly missing) file list
pub fn first_file(files: Option<web_sys::FileList>) -> Option<web_sys::File> {
    files.and_then(|list| list.get(0))
}

/// Read a browser file into memory and create a preview URL for it
pub async fn read_file(file: web_sys::File) -> Result<DroppedFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("failed to read {}: {:?}", file.name(), e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let preview_url = web_sys::Url::create_object_url_with_blob(&file).ok();

    Ok(DroppedFile {
        name: file.name(),
        content_type: content_type_or_default(&file.type_()),
        bytes,
        preview_url,
    })
}

/// Release an object URL created by [`read_file`]
pub fn revoke_preview(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

pub fn content_type_or_default(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        FALLBACK_CONTENT_TYPE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Human readable file size
pub fn format_size(size: usize) -> String {
    if size < 1024 {
        format!("{} B", size)
    } else if size < 1024 * 1024 {
        format!("{:.1} KB", size as f64 / 1024.0)
    } else {
        format!("{:.1} MB", size as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_fallback() {
        assert_eq!(content_type_or_default(""), FALLBACK_CONTENT_TYPE);
        assert_eq!(content_type_or_default("  "), FALLBACK_CONTENT_TYPE);
        assert_eq!(content_type_or_default("image/png"), "image/png");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024 + 512 * 1024), "3.5 MB");
    }
}
