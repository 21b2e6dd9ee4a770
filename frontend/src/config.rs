//! Application configuration.
//!
//! Centralized configuration for the Road Segmentation frontend.
//! Everything here is a compile-time constant: the page has no
//! environment, no config file and no persisted settings.

/// Segmentation backend endpoint.
///
/// Accepts a multipart POST and answers with the segmented image bytes.
pub const SEGMENT_ENDPOINT: &str = "http://localhost:5000/segment";

/// Multipart field carrying the uploaded image.
pub const IMAGE_FIELD: &str = "image";

/// Media type prefix a selected file must carry.
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// Media type assumed for the backend's response body.
pub const SEGMENTED_MEDIA_TYPE: &str = "image/jpeg";

/// Page heading.
pub const APP_TITLE: &str = "Road Segmentation";

// =============================================================================
// User-facing messages
// =============================================================================

/// Shown inline when the picker yields something that is not an image.
pub const MSG_INVALID_IMAGE: &str = "Please upload a valid image file.";

/// Shown as a blocking alert when submitting without a file.
pub const MSG_NO_FILE: &str = "Please select an image!";

/// Shown inline when the segmentation round trip fails for any reason.
pub const MSG_SEGMENTATION_FAILED: &str =
    "An error occurred during segmentation. Please try again.";

/// Never shown to the user; the submit button is disabled in that state.
pub const MSG_BUSY: &str = "A segmentation request is already in progress.";

// =============================================================================
// Behaviour
// =============================================================================

/// What happens to the displayed images when a submission fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Release and hide the previous result so only the error is visible.
    ClearImages,
    /// Keep the previous result on screen next to the error.
    RetainImages,
}

/// Policy applied by the upload widget.
pub const FAILURE_POLICY: FailurePolicy = FailurePolicy::ClearImages;
