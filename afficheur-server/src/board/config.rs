//! Display variants and their page sizes.

/// Physical display variant of a board.
///
/// The variant only decides how many lines fit on screen; it is a display
/// parameter, not a business rule, and callers may override the page size
/// per request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayVariant {
    /// Fixed full-screen board, no scrolling.
    Normal,
    /// Scrolling board showing a longer list.
    Defilement,
    /// Default hall display.
    #[default]
    Standard,
}

impl DisplayVariant {
    /// Parse the `type` query parameter used by the display pages.
    ///
    /// Unrecognized or absent values fall back to the standard variant.
    pub fn parse(s: Option<&str>) -> Self {
        match s {
            Some("normal") => DisplayVariant::Normal,
            Some("defilement") => DisplayVariant::Defilement,
            _ => DisplayVariant::Standard,
        }
    }

    /// Lines shown per page for this variant.
    pub fn lines_per_page(&self) -> usize {
        match self {
            DisplayVariant::Normal => 9,
            DisplayVariant::Defilement => 20,
            DisplayVariant::Standard => 10,
        }
    }
}
