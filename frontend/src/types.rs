//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - what the upload widget needs from a picked file
//! - **Error Types** - user-facing outcomes and their diagnostic causes

use thiserror::Error;

use crate::config::{
    IMAGE_MEDIA_PREFIX, MSG_BUSY, MSG_INVALID_IMAGE, MSG_NO_FILE, MSG_SEGMENTATION_FAILED,
};

// =============================================================================
// File Types
// =============================================================================

/// A file handed over by the file picker.
///
/// Implemented for [`web_sys::File`] in the browser and by in-memory
/// fakes in tests, so the state machine never touches the DOM.
pub trait PickedFile: Clone {
    /// File name as reported by the picker.
    fn name(&self) -> String;

    /// Declared media type, e.g. `image/png`. Empty when unknown.
    fn media_type(&self) -> String;

    /// Whether the declared media type marks this file as an image.
    fn is_image(&self) -> bool {
        self.media_type().starts_with(IMAGE_MEDIA_PREFIX)
    }
}

impl PickedFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn media_type(&self) -> String {
        self.type_()
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Why a segmentation round trip failed.
///
/// Only ever written to the developer console; the user sees
/// [`AppError::Segmentation`]'s fixed message instead.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SegmentError {
    /// The multipart form or the request could not be built.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// The request never got an HTTP answer.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("Server error ({status}): {status_text}")]
    Status { status: u16, status_text: String },

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// A display reference could not be created for an image.
    #[error("Failed to create display reference: {0}")]
    Display(String),
}

/// Frontend application errors.
///
/// The `Display` text of each variant is exactly what the user is shown.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// The picked file is missing or not an image.
    #[error("{}", MSG_INVALID_IMAGE)]
    InvalidImage,

    /// Submit was triggered with nothing selected.
    #[error("{}", MSG_NO_FILE)]
    NoFileSelected,

    /// Submit was triggered while a request is still in flight.
    #[error("{}", MSG_BUSY)]
    Busy,

    /// The segmentation round trip failed.
    #[error("{}", MSG_SEGMENTATION_FAILED)]
    Segmentation(#[source] SegmentError),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
