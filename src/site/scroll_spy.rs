/// A section counts as current once the page has scrolled to within this many
/// pixels of its top.
pub const SCROLL_SPY_OFFSET: f64 = 100.0;

/// Nav link targets in page order.
pub const NAV_SECTIONS: [&str; 6] = ["home", "about", "skills", "tools", "contact", "projects"];

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    /// Offset of the section top from the document top, in CSS pixels.
    pub top: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Id of the section the page is currently on: the last one, in document
/// order, whose top (less the offset) has been scrolled past.
pub fn active_section(sections: &[Section], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - SCROLL_SPY_OFFSET)
        .last()
        .map(|s| s.id.as_str())
}
