//! HTTP service for the segmentation backend.
//!
//! [`HttpSegmenter`] posts the picked image as multipart form data and
//! returns the raw response bytes. [`submit_selected`] drives one whole
//! submit cycle against a [`ViewState`] signal.

use async_trait::async_trait;
use gloo_net::http::Request;
use leptos::*;
use web_sys::{File, FormData};

use crate::config::{IMAGE_FIELD, SEGMENT_ENDPOINT};
use crate::services::object_url::DisplayFactory;
use crate::state::ViewState;
use crate::types::{AppError, AppResult, PickedFile, SegmentError};

/// Something that turns an image into its segmented counterpart.
#[async_trait(?Send)]
pub trait Segmenter<F> {
    /// Upload `file` and return the segmented image bytes.
    async fn segment(&self, file: &F) -> Result<Vec<u8>, SegmentError>;
}

/// Segmenter talking to the HTTP backend.
#[derive(Clone, Debug)]
pub struct HttpSegmenter {
    endpoint: String,
}

impl Default for HttpSegmenter {
    fn default() -> Self {
        Self::new(SEGMENT_ENDPOINT)
    }
}

impl HttpSegmenter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl Segmenter<File> for HttpSegmenter {
    async fn segment(&self, file: &File) -> Result<Vec<u8>, SegmentError> {
        let form_data = FormData::new()
            .map_err(|e| SegmentError::Request(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())
            .map_err(|e| SegmentError::Request(format!("Failed to append file: {:?}", e)))?;

        // The browser sets `multipart/form-data; boundary=...` from the body.
        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| SegmentError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SegmentError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(SegmentError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .binary()
            .await
            .map_err(|e| SegmentError::Body(e.to_string()))
    }
}

/// Run one submit cycle for the currently selected file.
///
/// Rejections (nothing selected, request in flight) leave the state as it
/// was and are returned to the caller. Otherwise exactly one call is made
/// to `segmenter` and the state ends up either showing both images or the
/// segmentation error, with loading reset in both cases.
pub async fn submit_selected<F, S, D>(
    state: RwSignal<ViewState<F, D::Ref>>,
    segmenter: &S,
    display: &D,
) -> AppResult<()>
where
    F: PickedFile + 'static,
    S: Segmenter<F> + ?Sized,
    D: DisplayFactory<F>,
    D::Ref: 'static,
{
    let file = state
        .try_update(|s| s.begin_submit())
        .unwrap_or(Err(AppError::NoFileSelected))?;

    log::info!("📤 Uploading {} ({})", file.name(), file.media_type());

    let outcome = match segmenter.segment(&file).await {
        Ok(bytes) => {
            log::info!("✅ Segmentation returned {} bytes", bytes.len());
            display.original(&file).and_then(|original| {
                display
                    .segmented(&bytes)
                    .map(|segmented| (original, segmented))
            })
        }
        Err(e) => Err(e),
    };

    match outcome {
        Ok((original, segmented)) => {
            state.try_update(|s| s.finish_success(original, segmented));
            Ok(())
        }
        Err(cause) => {
            log::error!("❌ Error during segmentation: {}", cause);
            state.try_update(|s| s.finish_failure(cause.clone()));
            Err(AppError::Segmentation(cause))
        }
    }
}
