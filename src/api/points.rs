//! Point Endpoints
//!
//! Multipart creation of a collection point.

use gloo_net::http::Request;
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::models::{PointSubmission, UploadedFile};

/// POST the point. Only the status is looked at; the body is ignored.
pub async fn create_point(config: &AppConfig, submission: &PointSubmission) -> Result<(), FetchError> {
    let url = config.points_url();
    let form = to_form_data(submission)?;

    // No explicit Content-Type: the browser adds the multipart boundary
    let response = Request::post(&url)
        .body(form)
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            url,
        });
    }
    Ok(())
}

fn to_form_data(submission: &PointSubmission) -> Result<FormData, FetchError> {
    let form = FormData::new().map_err(FetchError::browser)?;
    for (name, value) in &submission.fields {
        form.append_with_str(name, value).map_err(FetchError::browser)?;
    }
    if let Some(image) = &submission.image {
        let blob = to_blob(image)?;
        form.append_with_blob_and_filename("image", &blob, &image.name)
            .map_err(FetchError::browser)?;
    }
    Ok(form)
}

fn to_blob(file: &UploadedFile) -> Result<Blob, FetchError> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&file.content_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(FetchError::browser)
}
