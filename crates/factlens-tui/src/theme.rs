//! Colour palettes and style helpers for the factlens TUI.
//!
//! One `Palette` per (mode, style) pair. The dark palettes share their
//! neutrals and differ only in accent; the light ones invert the neutrals.

use factlens_core::banner::BannerTone;
use factlens_core::prefs::{Preferences, ThemeMode, ThemeStyle};
use factlens_core::render::{Rgb, Tone};
use factlens_core::toast::ToastKind;
use factlens_core::api::WordCategory;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg: Color,
    pub primary: Color,
    pub secondary: Color,
    pub muted: Color,
    pub separator: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub field_bg: Color,
    pub field_fg: Color,
    pub danger: Color,
    pub caution: Color,
    pub good: Color,
    pub info: Color,
}

const DARK: Palette = Palette {
    bg: Color::Rgb(18, 18, 18),
    primary: Color::Rgb(210, 210, 225),
    secondary: Color::Rgb(115, 115, 138),
    muted: Color::Rgb(72, 72, 88),
    separator: Color::Rgb(40, 40, 52),
    accent: Color::Rgb(120, 100, 200),
    border: Color::Rgb(40, 40, 52),
    border_focused: Color::Rgb(120, 100, 200),
    field_bg: Color::Rgb(20, 20, 32),
    field_fg: Color::Rgb(255, 200, 80),
    danger: Color::Rgb(255, 95, 95),
    caution: Color::Rgb(255, 184, 80),
    good: Color::Rgb(80, 200, 120),
    info: Color::Rgb(80, 160, 220),
};

const LIGHT: Palette = Palette {
    bg: Color::Rgb(246, 246, 250),
    primary: Color::Rgb(30, 30, 40),
    secondary: Color::Rgb(88, 88, 110),
    muted: Color::Rgb(150, 150, 165),
    separator: Color::Rgb(215, 215, 225),
    accent: Color::Rgb(99, 72, 190),
    border: Color::Rgb(200, 200, 212),
    border_focused: Color::Rgb(99, 72, 190),
    field_bg: Color::Rgb(232, 232, 240),
    field_fg: Color::Rgb(40, 40, 60),
    danger: Color::Rgb(200, 40, 40),
    caution: Color::Rgb(190, 120, 0),
    good: Color::Rgb(30, 140, 70),
    info: Color::Rgb(30, 110, 180),
};

/// Accent for a style; `Default` keeps the base palette's purple.
fn style_accent(style: ThemeStyle, mode: ThemeMode) -> Option<Color> {
    let dark = mode == ThemeMode::Dark;
    match style {
        ThemeStyle::Default => None,
        ThemeStyle::Ocean => Some(if dark {
            Color::Rgb(64, 170, 230)
        } else {
            Color::Rgb(14, 116, 170)
        }),
        ThemeStyle::Forest => Some(if dark {
            Color::Rgb(96, 190, 110)
        } else {
            Color::Rgb(34, 120, 60)
        }),
        ThemeStyle::Sunset => Some(if dark {
            Color::Rgb(245, 130, 80)
        } else {
            Color::Rgb(196, 84, 30)
        }),
    }
}

impl Palette {
    pub fn new(mode: ThemeMode, style: ThemeStyle) -> Self {
        let mut palette = match mode {
            ThemeMode::Dark => DARK,
            ThemeMode::Light => LIGHT,
        };
        if let Some(accent) = style_accent(style, mode) {
            palette.accent = accent;
            palette.border_focused = accent;
        }
        palette
    }

    pub fn from_prefs(prefs: &Preferences) -> Self {
        Self::new(prefs.theme, prefs.theme_style)
    }

    // ── Semantic lookups ──────────────────────────────────────────────────────

    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Danger => self.danger,
            Tone::Caution => self.caution,
            Tone::Good => self.good,
            Tone::Muted => self.secondary,
        }
    }

    pub fn banner(&self, tone: BannerTone) -> Color {
        match tone {
            BannerTone::Warning => self.danger,
            BannerTone::Social => self.caution,
            BannerTone::Ok => self.good,
            BannerTone::Caution => self.caution,
        }
    }

    pub fn toast(&self, kind: ToastKind) -> Color {
        match kind {
            ToastKind::Error => self.danger,
            ToastKind::Success => self.good,
        }
    }

    pub fn word(&self, category: WordCategory) -> Style {
        match category {
            WordCategory::Suspicious => Style::default()
                .fg(self.danger)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            WordCategory::Trusted => Style::default().fg(self.good).add_modifier(Modifier::BOLD),
            WordCategory::Other => self.style_default(),
        }
    }

    // ── Predefined styles ─────────────────────────────────────────────────────

    pub fn style_default(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn style_secondary(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    pub fn style_muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn style_accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn style_focused_border(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn style_unfocused_border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn style_field(&self) -> Style {
        Style::default().fg(self.field_fg).bg(self.field_bg)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ThemeMode::Dark, ThemeStyle::Default)
    }
}

/// Server-supplied colour, falling back to the semantic tone.
pub fn rgb_or(rgb: Option<Rgb>, fallback: Color) -> Color {
    match rgb {
        Some(Rgb(r, g, b)) => Color::Rgb(r, g, b),
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_change_accent_only() {
        let base = Palette::new(ThemeMode::Dark, ThemeStyle::Default);
        let ocean = Palette::new(ThemeMode::Dark, ThemeStyle::Ocean);
        assert_ne!(base.accent, ocean.accent);
        assert_eq!(ocean.accent, ocean.border_focused);
        assert_eq!(base.bg, ocean.bg);
        assert_eq!(base.danger, ocean.danger);
    }

    #[test]
    fn light_mode_inverts_neutrals() {
        let dark = Palette::new(ThemeMode::Dark, ThemeStyle::Forest);
        let light = Palette::new(ThemeMode::Light, ThemeStyle::Forest);
        assert_ne!(dark.bg, light.bg);
        assert_ne!(dark.primary, light.primary);
    }

    #[test]
    fn server_colour_wins_when_parsed() {
        let p = Palette::default();
        assert_eq!(rgb_or(Some(Rgb(1, 2, 3)), p.good), Color::Rgb(1, 2, 3));
        assert_eq!(rgb_or(None, p.good), p.good);
    }
}
