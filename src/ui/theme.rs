use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for each kind of thing rutez prints
#[derive(Debug, Clone)]
pub struct Theme {
    /// Command banners and listing titles
    pub title: Style,
    /// A sinset the lemma resolved to
    pub concept: Style,
    /// Sinset ids in listings
    pub id: Style,
    /// Raw relation labels (ВЫШЕ, ЧАСТЬ, ...)
    pub label: Style,
    pub error: Style,
    pub warn: Style,
    /// Secondary text: info keys, empty markers, timings
    pub muted: Style,
}

impl Theme {
    /// Colored unless stdout is not a terminal or `NO_COLOR`/`CLICOLOR=0` is set
    pub fn detect() -> Self {
        Self::with_colors(console::colors_enabled())
    }

    pub fn with_colors(enabled: bool) -> Self {
        if !enabled {
            return Self::plain();
        }
        Self {
            title: Style::new().cyan().bold(),
            concept: Style::new().green().bold(),
            id: Style::new().bright_black(),
            label: Style::new().yellow(),
            error: Style::new().red().bold(),
            warn: Style::new().yellow().bold(),
            muted: Style::new().white().dimmed(),
        }
    }

    pub fn plain() -> Self {
        Self {
            title: Style::new(),
            concept: Style::new(),
            id: Style::new(),
            label: Style::new(),
            error: Style::new(),
            warn: Style::new(),
            muted: Style::new(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use owo_colors::OwoColorize;

    #[test]
    fn test_plain_theme_adds_no_escapes() {
        let plain = Theme::with_colors(false);
        assert_eq!("ЖИВОЕ".style(plain.concept).to_string(), "ЖИВОЕ");
        assert_eq!("ВЫШЕ".style(plain.label).to_string(), "ВЫШЕ");
    }

    #[test]
    fn test_colored_error_is_styled() {
        let colored = Theme::with_colors(true);
        let rendered = "boom".style(colored.error).to_string();
        assert_ne!(rendered, "boom");
        assert_eq!(console::strip_ansi_codes(&rendered), "boom");
    }
}
