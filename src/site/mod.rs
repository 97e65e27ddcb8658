//! Page state outside the two engines: scroll spy, nav and theme.

mod facade;
mod scroll_spy;
mod state;

pub use facade::SiteState;
pub use scroll_spy::{active_section, Section, NAV_SECTIONS, SCROLL_SPY_OFFSET};
#[cfg(target_arch = "wasm32")]
pub use state::LocalStorageStore;
pub use state::{AppState, MemoryStore, Theme, ThemeStore, THEME_KEY};
