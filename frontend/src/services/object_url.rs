//! Browser display references for image data.
//!
//! An [`ObjectUrl`] is a `blob:` URL that an `<img>` can point at without
//! uploading the bytes anywhere. The URL is revoked when the value is
//! dropped, so replacing or clearing it in the view state frees the blob.

use js_sys::{Array, Uint8Array};
use web_sys::{Blob, BlobPropertyBag, File, Url};

use crate::config::SEGMENTED_MEDIA_TYPE;
use crate::types::SegmentError;

/// Creates display references for the two images of a comparison.
pub trait DisplayFactory<F> {
    type Ref;

    /// Reference to the file the user uploaded.
    fn original(&self, file: &F) -> Result<Self::Ref, SegmentError>;

    /// Reference to the bytes returned by the backend.
    fn segmented(&self, bytes: &[u8]) -> Result<Self::Ref, SegmentError>;
}

/// Owned `blob:` URL, revoked on drop.
#[derive(Debug, PartialEq, Eq)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Create a URL for an existing blob (a picked [`File`] is a blob).
    pub fn from_blob(blob: &Blob) -> Result<Self, SegmentError> {
        let url = Url::create_object_url_with_blob(blob)
            .map_err(|e| SegmentError::Display(format!("{:?}", e)))?;
        Ok(Self { url })
    }

    /// Copy `bytes` into a new blob of the given media type.
    pub fn from_bytes(bytes: &[u8], media_type: &str) -> Result<Self, SegmentError> {
        let parts = Array::of1(&Uint8Array::from(bytes));
        let options = BlobPropertyBag::new();
        options.set_type(media_type);

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| SegmentError::Display(format!("Failed to create Blob: {:?}", e)))?;
        Self::from_blob(&blob)
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl AsRef<str> for ObjectUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.url) {
            log::warn!("Failed to revoke {}: {:?}", self.url, e);
        } else {
            log::debug!("🧹 Revoked {}", self.url);
        }
    }
}

/// [`DisplayFactory`] backed by browser object URLs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectUrls;

impl DisplayFactory<File> for ObjectUrls {
    type Ref = ObjectUrl;

    fn original(&self, file: &File) -> Result<ObjectUrl, SegmentError> {
        ObjectUrl::from_blob(file)
    }

    fn segmented(&self, bytes: &[u8]) -> Result<ObjectUrl, SegmentError> {
        ObjectUrl::from_bytes(bytes, SEGMENTED_MEDIA_TYPE)
    }
}
