//! Image upload component.
//!
//! Handles file selection, submission to the segmentation backend and
//! display of the result or error. All state lives in one [`ViewState`]
//! signal and every event goes through a single transition on it.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};

use crate::services::{submit_selected, HttpSegmenter, ObjectUrl, ObjectUrls};
use crate::state::ViewState;
use crate::types::{AppError, PickedFile};
use crate::components::ImageComparison;

#[component]
pub fn UploadWidget() -> impl IntoView {
    let state = create_rw_signal(ViewState::<File, ObjectUrl>::default());

    // Revoke whatever is still displayed when the widget goes away.
    on_cleanup(move || {
        state.try_update(|s| s.release_images());
    });

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        let label = file
            .as_ref()
            .map(|f| format!("{} ({})", f.name(), f.media_type()))
            .unwrap_or_else(|| "nothing".to_string());

        state.update(|s| match s.select_file(file) {
            Ok(()) => log::info!("🖼️ Selected {}", label),
            Err(e) => log::warn!("⚠️ Rejected {}: {}", label, e),
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        spawn_local(async move {
            let segmenter = HttpSegmenter::default();
            match submit_selected(state, &segmenter, &ObjectUrls).await {
                Ok(()) => {}
                Err(AppError::NoFileSelected) => {
                    if let Err(e) = window().alert_with_message(&AppError::NoFileSelected.to_string()) {
                        log::error!("Failed to show alert: {:?}", e);
                    }
                }
                Err(AppError::Busy) => log::warn!("⏳ Submit ignored, request already in flight"),
                // Already shown inline and logged.
                Err(_) => {}
            }
        });
    };

    let is_loading = move || state.with(|s| s.is_loading());

    view! {
        <form class="upload-form" on:submit=on_submit>
            <input
                type="file"
                accept="image/*"
                on:change=on_file_change
            />
            <button
                type="submit"
                disabled=move || state.with(|s| !s.can_submit())
            >
                {move || if is_loading() { "Processing..." } else { "Segment Road" }}
            </button>
        </form>

        <Show
            when=move || state.with(|s| s.error().is_some())
            fallback=|| view! { }
        >
            <p class="error-message">
                {move || state.with(|s| s.error_message().unwrap_or_default())}
            </p>
        </Show>

        {move || {
            state
                .with(|s| {
                    s.comparison()
                        .map(|(original, segmented)| (original.as_str().to_owned(), segmented.as_str().to_owned()))
                })
                .map(|(original, segmented)| {
                    view! { <ImageComparison original=original segmented=segmented/> }
                })
        }}
    }
}
