//! UI Components for the Road Segmentation page.
//!
//! # Layout Components
//! - [`Hero`] - Page title
//!
//! # Feature Components
//! - [`UploadWidget`] - Image picker, submit button, error text and results
//! - [`ImageComparison`] - Original and segmented images side by side

mod hero;
mod upload;
mod comparison;

pub use hero::*;
pub use upload::*;
pub use comparison::*;
