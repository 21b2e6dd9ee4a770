//! Backend communication and browser resources.
//!
//! # Services
//!
//! - [`segment`] - image upload to the segmentation backend
//! - [`object_url`] - `blob:` URLs used to display images

pub mod segment;
pub mod object_url;

pub use segment::*;
pub use object_url::*;
