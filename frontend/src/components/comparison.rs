//! Side-by-side display of the uploaded and segmented images.

use leptos::*;

#[component]
pub fn ImageComparison(
    /// URL of the image the user uploaded
    #[prop(into)]
    original: String,
    /// URL of the image returned by the backend
    #[prop(into)]
    segmented: String,
) -> impl IntoView {
    view! {
        <div class="image-container">
            <div class="image-box">
                <h3>"Original Image"</h3>
                <img src=original alt="Original"/>
            </div>
            <div class="image-box">
                <h3>"Segmented Image"</h3>
                <img src=segmented alt="Segmented"/>
            </div>
        </div>
    }
}
