use serde::{Deserialize, Serialize};

use super::scroll_spy::{active_section, Section, NAV_SECTIONS};

/// Storage key for the persisted theme.
pub const THEME_KEY: &str = "folio-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Where the chosen theme survives page reloads.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme);
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    theme: Option<Theme>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(theme: Theme) -> Self {
        Self { theme: Some(theme) }
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<Theme> {
        self.theme
    }

    fn save(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }
}

/// Browser `localStorage`. Storage failures (private mode, quota) are logged
/// and otherwise ignored.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl ThemeStore for LocalStorageStore {
    fn load(&self) -> Option<Theme> {
        let raw = Self::storage()?.get_item(THEME_KEY).ok()??;
        Theme::parse(&raw)
    }

    fn save(&mut self, theme: Theme) {
        let saved = Self::storage().map(|s| s.set_item(THEME_KEY, theme.as_str()));
        if !matches!(saved, Some(Ok(()))) {
            crate::core::log::warn("theme: localStorage unavailable, not persisted");
        }
    }
}

/// Page-level state. The theme has exactly one writer: [`AppState::toggle_theme`].
#[derive(Debug)]
pub struct AppState<S: ThemeStore> {
    theme: Theme,
    active_nav: Option<String>,
    store: S,
}

impl<S: ThemeStore> AppState<S> {
    pub fn new(store: S) -> Self {
        let theme = store.load().unwrap_or_default();
        Self { theme, active_nav: None, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn active_nav(&self) -> Option<&str> {
        self.active_nav.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.save(self.theme);
        self.theme
    }

    /// Mark a nav link active. Accepts `"about"` or `"#about"`; unknown
    /// targets are ignored.
    pub fn navigate(&mut self, target: &str) -> bool {
        let id = target.trim_start_matches('#');
        if !NAV_SECTIONS.contains(&id) {
            return false;
        }
        self.active_nav = Some(id.to_string());
        true
    }

    /// Scroll spy: the nav follows the section in view. Returns the active id.
    pub fn sync_scroll(&mut self, sections: &[Section], scroll_y: f64) -> Option<&str> {
        self.active_nav = active_section(sections, scroll_y).map(str::to_string);
        self.active_nav.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults_to_light_and_loads_saved() {
        assert_eq!(AppState::new(MemoryStore::new()).theme(), Theme::Light);
        assert_eq!(AppState::new(MemoryStore::with(Theme::Dark)).theme(), Theme::Dark);
    }

    #[test]
    fn toggle_persists() {
        let mut state = AppState::new(MemoryStore::new());
        assert_eq!(state.toggle_theme(), Theme::Dark);
        assert_eq!(state.store().load(), Some(Theme::Dark));
        assert_eq!(state.toggle_theme(), Theme::Light);
        assert_eq!(state.store().load(), Some(Theme::Light));
    }

    #[test]
    fn theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(Theme::parse(" light "), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn navigate_accepts_known_links() {
        let mut state = AppState::new(MemoryStore::new());
        assert!(state.navigate("#contact"));
        assert_eq!(state.active_nav(), Some("contact"));
        assert!(!state.navigate("#nowhere"));
        assert_eq!(state.active_nav(), Some("contact"));
    }

    #[test]
    fn scrolling_overrides_clicked_link() {
        let mut state = AppState::new(MemoryStore::new());
        state.navigate("projects");
        let sections = [Section::new("home", 0.0), Section::new("about", 900.0)];
        assert_eq!(state.sync_scroll(&sections, 850.0), Some("about"));
        assert_eq!(state.active_nav(), Some("about"));
    }
}
