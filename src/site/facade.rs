use wasm_bindgen::prelude::*;

use super::scroll_spy::Section;
use super::state::AppState;

#[cfg(target_arch = "wasm32")]
type PlatformStore = super::state::LocalStorageStore;
#[cfg(not(target_arch = "wasm32"))]
type PlatformStore = super::state::MemoryStore;

/// JS handle to the page state.
#[wasm_bindgen]
pub struct SiteState {
    state: AppState<PlatformStore>,
}

#[wasm_bindgen]
impl SiteState {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SiteState {
        Self { state: AppState::new(PlatformStore::default()) }
    }

    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> String {
        self.state.theme().as_str().to_string()
    }

    /// Flip and persist the theme, returning the new one.
    pub fn toggle_theme(&mut self) -> String {
        self.state.toggle_theme().as_str().to_string()
    }

    pub fn navigate(&mut self, target: &str) -> bool {
        self.state.navigate(target)
    }

    #[wasm_bindgen(getter)]
    pub fn active_nav(&self) -> Option<String> {
        self.state.active_nav().map(str::to_string)
    }

    /// `ids[i]` sits at `tops[i]` (document order).
    pub fn on_scroll(&mut self, ids: Vec<String>, tops: Vec<f64>, scroll_y: f64) -> Option<String> {
        let sections: Vec<Section> = ids
            .into_iter()
            .zip(tops)
            .map(|(id, top)| Section { id, top })
            .collect();
        self.state.sync_scroll(&sections, scroll_y).map(str::to_string)
    }
}

impl Default for SiteState {
    fn default() -> Self {
        Self::new()
    }
}
