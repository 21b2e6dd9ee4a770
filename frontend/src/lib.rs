//! Road Segmentation - Frontend Rust/Leptos Application
//!
//! A WebAssembly page that uploads an image to the segmentation backend
//! and shows the original and segmented images side by side.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title)                                            │
//! │  └── UploadWidget                                            │
//! │      ├── file picker + submit button                        │
//! │      ├── error message (when set)                           │
//! │      └── ImageComparison (when both images are present)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoint, messages and failure policy
//! - [`types`] - Picked file abstraction and error types
//! - [`state`] - The upload widget's view state machine
//! - [`components`] - UI components (Hero, UploadWidget, ImageComparison)
//! - [`services`] - Backend communication and object URLs

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, PickedFile, SegmentError};

// State
pub use state::ViewState;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
///
/// Called by the `roadseg-frontend` binary under trunk, and exported for
/// JavaScript hosts loading the `cdylib` directly.
#[wasm_bindgen]
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Road Segmentation - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="App">
            <Hero/>
            <UploadWidget/>
        </div>
    }
}
