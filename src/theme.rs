// Theme system for the kiosk
//
// Provides color themes switchable at runtime with 't'. Each theme defines
// colors for the card states (idle / first-time / duplicate), the chrome,
// and the logs overlay.

use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Sorbet,
    Midnight,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Sorbet,
            ThemeKind::Midnight,
        ]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get the previous theme in the cycle
    pub fn prev(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + themes.len() - 1) % themes.len()]
    }

    /// Resolve a configured theme name; unknown names fall back to Dark.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "sorbet" => ThemeKind::Sorbet,
            "midnight" => ThemeKind::Midnight,
            _ => ThemeKind::Dark,
        }
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Sorbet => "Sorbet",
            ThemeKind::Midnight => "Midnight",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Sorbet => Theme::sorbet(),
            ThemeKind::Midnight => Theme::midnight(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,

    // Title bar
    pub title: Color,
    pub tagline: Color,

    // Card states
    pub idle: Color,
    pub success: Color,
    pub duplicate: Color,
    pub subtitle: Color,

    // Chrome
    pub status_bar: Color,
    pub highlight: Color,
    pub dim: Color,

    // Log levels (logs overlay)
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(18, 18, 24),
            fg: Color::Rgb(220, 220, 220),
            border: Color::Rgb(80, 80, 100),
            title: Color::Rgb(130, 170, 255),
            tagline: Color::Rgb(110, 110, 130),
            idle: Color::Rgb(130, 170, 255),
            success: Color::Rgb(120, 220, 130),
            duplicate: Color::Rgb(255, 150, 90),
            subtitle: Color::Rgb(160, 160, 175),
            status_bar: Color::Rgb(140, 140, 160),
            highlight: Color::Rgb(200, 160, 255),
            dim: Color::Rgb(90, 90, 105),
            log_error: Color::Rgb(255, 100, 100),
            log_warn: Color::Rgb(255, 200, 100),
            log_info: Color::Rgb(120, 200, 255),
            log_debug: Color::Rgb(150, 150, 150),
            log_trace: Color::Rgb(110, 110, 110),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(248, 248, 245),
            fg: Color::Rgb(40, 40, 45),
            border: Color::Rgb(180, 180, 190),
            title: Color::Rgb(40, 90, 200),
            tagline: Color::Rgb(150, 150, 160),
            idle: Color::Rgb(40, 90, 200),
            success: Color::Rgb(30, 140, 60),
            duplicate: Color::Rgb(200, 90, 30),
            subtitle: Color::Rgb(110, 110, 120),
            status_bar: Color::Rgb(120, 120, 130),
            highlight: Color::Rgb(130, 70, 200),
            dim: Color::Rgb(170, 170, 180),
            log_error: Color::Rgb(190, 40, 40),
            log_warn: Color::Rgb(180, 130, 20),
            log_info: Color::Rgb(30, 110, 190),
            log_debug: Color::Rgb(120, 120, 120),
            log_trace: Color::Rgb(150, 150, 150),
        }
    }

    /// Pastel palette for ice-cream socials
    pub fn sorbet() -> Self {
        Self {
            bg: Color::Rgb(34, 24, 38),
            fg: Color::Rgb(240, 225, 235),
            border: Color::Rgb(120, 85, 125),
            title: Color::Rgb(255, 170, 200),
            tagline: Color::Rgb(150, 120, 150),
            idle: Color::Rgb(255, 170, 200),
            success: Color::Rgb(165, 230, 170),
            duplicate: Color::Rgb(255, 190, 120),
            subtitle: Color::Rgb(190, 165, 190),
            status_bar: Color::Rgb(170, 140, 170),
            highlight: Color::Rgb(255, 205, 160),
            dim: Color::Rgb(110, 85, 115),
            log_error: Color::Rgb(255, 120, 140),
            log_warn: Color::Rgb(255, 200, 130),
            log_info: Color::Rgb(170, 200, 255),
            log_debug: Color::Rgb(160, 140, 160),
            log_trace: Color::Rgb(130, 110, 130),
        }
    }

    pub fn midnight() -> Self {
        Self {
            bg: Color::Rgb(10, 14, 26),
            fg: Color::Rgb(200, 210, 230),
            border: Color::Rgb(50, 65, 100),
            title: Color::Rgb(100, 190, 255),
            tagline: Color::Rgb(80, 95, 130),
            idle: Color::Rgb(100, 190, 255),
            success: Color::Rgb(90, 210, 170),
            duplicate: Color::Rgb(250, 140, 120),
            subtitle: Color::Rgb(130, 145, 175),
            status_bar: Color::Rgb(110, 125, 160),
            highlight: Color::Rgb(150, 140, 255),
            dim: Color::Rgb(60, 75, 105),
            log_error: Color::Rgb(250, 110, 110),
            log_warn: Color::Rgb(240, 190, 110),
            log_info: Color::Rgb(110, 190, 250),
            log_debug: Color::Rgb(130, 140, 160),
            log_trace: Color::Rgb(100, 110, 130),
        }
    }

    // Helper methods for creating styles

    /// Base style with theme foreground
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Border style
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Title style
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Status bar style
    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_bar)
    }

    /// Muted style for hints and separators
    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_theme_and_wraps() {
        let mut kind = ThemeKind::Dark;
        let mut seen = Vec::new();
        for _ in 0..ThemeKind::all().len() {
            seen.push(kind);
            kind = kind.next();
        }
        assert_eq!(seen, ThemeKind::all());
        assert_eq!(kind, ThemeKind::Dark);
    }

    #[test]
    fn from_name_is_case_insensitive_with_dark_fallback() {
        assert_eq!(ThemeKind::from_name("sorbet"), ThemeKind::Sorbet);
        assert_eq!(ThemeKind::from_name("MIDNIGHT"), ThemeKind::Midnight);
        assert_eq!(ThemeKind::from_name("Light"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name("no-such-theme"), ThemeKind::Dark);
    }
}
