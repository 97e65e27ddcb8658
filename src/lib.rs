//! Folio Engine - portfolio site logic in WASM
//!
//! Two independent pieces:
//! - the contact endpoint (validate a submission, forward it as one email)
//! - the pendant animation (Verlet strap + draggable ID card + strap mesh)
//!
//! Architecture:
//! - core/          - Logging and math helpers
//! - domain/        - Plain data and settings documents
//! - systems/       - Contact pipeline and pendant physics
//! - simulation/    - Per-frame pendant orchestration
//! - site/          - Scroll spy, nav and theme state
//! - api/           - Browser adapters (wasm32 only)

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod site;
#[cfg(target_arch = "wasm32")]
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::log::info(&format!("folio-engine {} initialized", version()));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
#[cfg(target_arch = "wasm32")]
pub use api::{ContactClient, ContactEndpoint};
pub use domain::{ContactMessage, MailSettings, PendantSettings};
pub use simulation::{FrameStats, Pendant, PendantRig};
pub use site::SiteState;
pub use systems::contact::handle_submission;
