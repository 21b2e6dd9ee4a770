//! View state of the upload widget.
//!
//! All fields change together through one method per event, so the
//! invariants below hold after every transition:
//!
//! - `loading` is only true between [`ViewState::begin_submit`] and
//!   [`ViewState::finish_success`] / [`ViewState::finish_failure`].
//! - the original and segmented images are set together or not at all.
//! - a successful submission clears the error.
//!
//! `U` is the display reference type. Replacing or clearing an image
//! drops the previous reference, which is how browser object URLs get
//! revoked (see [`crate::services::ObjectUrl`]).

use crate::config::FailurePolicy;
use crate::types::{AppError, AppResult, PickedFile, SegmentError};

#[derive(Debug, PartialEq)]
pub struct ViewState<F, U> {
    selected: Option<F>,
    images: Option<(U, U)>,
    loading: bool,
    error: Option<AppError>,
    policy: FailurePolicy,
}

impl<F, U> Default for ViewState<F, U> {
    fn default() -> Self {
        Self::new(crate::config::FAILURE_POLICY)
    }
}

impl<F, U> ViewState<F, U> {
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            selected: None,
            images: None,
            loading: false,
            error: None,
            policy,
        }
    }

    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    /// User-facing error text, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Original and segmented references, only when both are present.
    pub fn comparison(&self) -> Option<(&U, &U)> {
        self.images.as_ref().map(|(original, segmented)| (original, segmented))
    }

    /// The submit control is enabled only with a file and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading && self.selected.is_some()
    }

    /// Submission succeeded: show both images and clear the error.
    pub fn finish_success(&mut self, original: U, segmented: U) {
        // Release the previous pair before storing the new one.
        self.images.take();
        self.images = Some((original, segmented));
        self.error = None;
        self.loading = false;
    }

    /// Submission failed: show the segmentation error.
    pub fn finish_failure(&mut self, cause: SegmentError) {
        if self.policy == FailurePolicy::ClearImages {
            self.images.take();
        }
        self.error = Some(AppError::Segmentation(cause));
        self.loading = false;
    }

    /// Drop every display reference. Called on teardown.
    pub fn release_images(&mut self) {
        self.images.take();
    }
}

impl<F: PickedFile, U> ViewState<F, U> {
    /// File picker changed.
    ///
    /// A missing or non-image file sets the invalid-file error and keeps
    /// whatever was selected before.
    pub fn select_file(&mut self, file: Option<F>) -> AppResult<()> {
        match file {
            Some(file) if file.is_image() => {
                self.selected = Some(file);
                self.error = None;
                Ok(())
            }
            _ => {
                self.error = Some(AppError::InvalidImage);
                Err(AppError::InvalidImage)
            }
        }
    }

    /// Submit requested.
    ///
    /// Rejections leave the state untouched. On success the widget is
    /// loading and the caller owns a handle to the file to upload.
    pub fn begin_submit(&mut self) -> AppResult<F> {
        let file = self.selected.clone().ok_or(AppError::NoFileSelected)?;
        if self.loading {
            return Err(AppError::Busy);
        }
        self.loading = true;
        Ok(file)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// In-memory stand-in for a browser file.
    #[derive(Clone, Debug, PartialEq)]
    pub struct FakeFile {
        pub name: String,
        pub media_type: String,
    }

    impl FakeFile {
        pub fn new(name: &str, media_type: &str) -> Self {
            Self {
                name: name.to_string(),
                media_type: media_type.to_string(),
            }
        }
    }

    impl PickedFile for FakeFile {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn media_type(&self) -> String {
            self.media_type.clone()
        }
    }

    /// Display reference that counts how many times it was released.
    #[derive(Debug)]
    pub struct CountedRef {
        pub url: String,
        released: Rc<Cell<usize>>,
    }

    impl CountedRef {
        pub fn new(url: &str, released: &Rc<Cell<usize>>) -> Self {
            Self {
                url: url.to_string(),
                released: Rc::clone(released),
            }
        }
    }

    impl PartialEq for CountedRef {
        fn eq(&self, other: &Self) -> bool {
            self.url == other.url
        }
    }

    impl Drop for CountedRef {
        fn drop(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    type State = ViewState<FakeFile, CountedRef>;

    fn png() -> FakeFile {
        FakeFile::new("photo.png", "image/png")
    }

    fn server_error() -> SegmentError {
        SegmentError::Status {
            status: 500,
            status_text: "INTERNAL SERVER ERROR".into(),
        }
    }

    #[test]
    fn test_select_valid_image_clears_error() {
        let mut state = State::default();
        let _ = state.select_file(Some(FakeFile::new("notes.txt", "text/plain")));
        assert!(state.error_message().is_some());

        assert!(state.select_file(Some(png())).is_ok());
        assert_eq!(state.selected(), Some(&png()));
        assert_eq!(state.error_message(), None);
        assert!(state.can_submit());
    }

    #[test]
    fn test_select_non_image_keeps_previous_file() {
        let mut state = State::default();
        state.select_file(Some(png())).unwrap();

        let result = state.select_file(Some(FakeFile::new("notes.txt", "text/plain")));
        assert_eq!(result, Err(AppError::InvalidImage));
        assert_eq!(state.selected(), Some(&png()));
        assert_eq!(
            state.error_message().as_deref(),
            Some("Please upload a valid image file.")
        );
    }

    #[test]
    fn test_select_nothing_or_untyped_is_invalid() {
        let mut state = State::default();
        assert_eq!(state.select_file(None), Err(AppError::InvalidImage));
        assert_eq!(
            state.select_file(Some(FakeFile::new("blob", ""))),
            Err(AppError::InvalidImage)
        );
        assert!(state.selected().is_none());
        assert!(!state.can_submit());
    }

    #[test]
    fn test_select_same_file_twice_is_idempotent() {
        let mut once = State::default();
        once.select_file(Some(png())).unwrap();

        let mut twice = State::default();
        twice.select_file(Some(png())).unwrap();
        twice.select_file(Some(png())).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_begin_submit_without_file_changes_nothing() {
        let mut state = State::default();
        let _ = state.select_file(Some(FakeFile::new("notes.txt", "text/plain")));

        assert_eq!(state.begin_submit(), Err(AppError::NoFileSelected));
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some(&AppError::InvalidImage));
    }

    #[test]
    fn test_begin_submit_while_loading_is_rejected() {
        let mut state = State::default();
        state.select_file(Some(png())).unwrap();

        assert_eq!(state.begin_submit(), Ok(png()));
        assert!(state.is_loading());
        assert!(!state.can_submit());
        assert_eq!(state.begin_submit(), Err(AppError::Busy));
        assert!(state.is_loading());
    }

    #[test]
    fn test_success_shows_comparison() {
        let released = Rc::new(Cell::new(0));
        let mut state = State::default();
        state.select_file(Some(png())).unwrap();
        state.begin_submit().unwrap();

        state.finish_success(
            CountedRef::new("blob:original", &released),
            CountedRef::new("blob:segmented", &released),
        );

        let (original, segmented) = state.comparison().unwrap();
        assert_eq!(original.url, "blob:original");
        assert_eq!(segmented.url, "blob:segmented");
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert!(state.can_submit());
        assert_eq!(released.get(), 0);
    }

    #[test]
    fn test_success_releases_previous_images() {
        let released = Rc::new(Cell::new(0));
        let mut state = State::default();
        state.select_file(Some(png())).unwrap();

        for round in 0..3 {
            state.begin_submit().unwrap();
            state.finish_success(
                CountedRef::new(&format!("blob:o{round}"), &released),
                CountedRef::new(&format!("blob:s{round}"), &released),
            );
        }

        assert_eq!(released.get(), 4);
        state.release_images();
        assert_eq!(released.get(), 6);
        assert!(state.comparison().is_none());
    }

    #[test]
    fn test_failure_clears_images_by_default() {
        let released = Rc::new(Cell::new(0));
        let mut state = State::new(FailurePolicy::ClearImages);
        state.select_file(Some(png())).unwrap();
        state.begin_submit().unwrap();
        state.finish_success(
            CountedRef::new("blob:o", &released),
            CountedRef::new("blob:s", &released),
        );

        state.begin_submit().unwrap();
        state.finish_failure(server_error());

        assert!(state.comparison().is_none());
        assert_eq!(released.get(), 2);
        assert!(!state.is_loading());
        assert_eq!(
            state.error_message().as_deref(),
            Some("An error occurred during segmentation. Please try again.")
        );
    }

    #[test]
    fn test_failure_can_retain_images() {
        let released = Rc::new(Cell::new(0));
        let mut state = State::new(FailurePolicy::RetainImages);
        state.select_file(Some(png())).unwrap();
        state.begin_submit().unwrap();
        state.finish_success(
            CountedRef::new("blob:o", &released),
            CountedRef::new("blob:s", &released),
        );

        state.begin_submit().unwrap();
        state.finish_failure(SegmentError::Transport("offline".into()));

        assert!(state.comparison().is_some());
        assert_eq!(released.get(), 0);
        assert!(state.error().is_some());

        state.begin_submit().unwrap();
        state.finish_success(
            CountedRef::new("blob:o2", &released),
            CountedRef::new("blob:s2", &released),
        );
        assert!(state.error().is_none());
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn test_dropping_state_releases_images() {
        let released = Rc::new(Cell::new(0));
        {
            let mut state = State::default();
            state.finish_success(
                CountedRef::new("blob:o", &released),
                CountedRef::new("blob:s", &released),
            );
        }
        assert_eq!(released.get(), 2);
    }
}
