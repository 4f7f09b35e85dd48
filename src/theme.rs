//! Static style configuration for the page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub font_family: &'static str,
    pub background: &'static str,
    pub text_color: &'static str,
    pub subtitle_color: &'static str,
    pub accent_color: &'static str,
    pub title_size: &'static str,
    pub title_weight: &'static str,
    pub subtitle_size: &'static str,
    pub gap: &'static str,
}

impl Theme {
    /// Gruvbox dark.
    pub const DEFAULT: Theme = Theme {
        font_family: "'Inter', 'Noto Sans TC', system-ui, sans-serif",
        background: "#282828",
        text_color: "#ebdbb2",
        subtitle_color: "#a89984",
        accent_color: "#fe8019",
        title_size: "3rem",
        title_weight: "900",
        subtitle_size: "1.1rem",
        gap: "12px",
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}
