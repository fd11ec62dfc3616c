//! Phosphor theme system for HABIT.SYS.
//!
//! Six primary-color variants over a shared near-black background, cycled
//! in a fixed order. Everything on screen is the primary color at one of a
//! few intensities, which is what gives the UI its single-tube-monitor look.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Theme variants, in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    Green,
    Blue,
    Yellow,
    Red,
    Pink,
    Purple,
}

impl Default for ThemeVariant {
    fn default() -> Self {
        Self::Green
    }
}

impl ThemeVariant {
    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Pink => "pink",
            Self::Purple => "purple",
        }
    }

    /// The full-intensity primary color of this variant.
    pub fn primary(self) -> Color {
        match self {
            Self::Green => Color::Rgb(51, 255, 102),
            Self::Blue => Color::Rgb(51, 204, 255),
            Self::Yellow => Color::Rgb(255, 204, 51),
            Self::Red => Color::Rgb(255, 85, 85),
            Self::Pink => Color::Rgb(255, 102, 204),
            Self::Purple => Color::Rgb(187, 136, 255),
        }
    }

    /// Every variant, in cycling order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// The variant after this one, wrapping around.
    pub fn next(self) -> Self {
        let variants = Self::all();
        let index = variants.iter().position(|v| *v == self).unwrap_or(0);
        variants[(index + 1) % variants.len()]
    }
}

/// Color palette derived from a variant.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub background: Color,
    pub panel: Color,
    pub primary: Color,
    pub dim: Color,
    pub faint: Color,
    pub error: Color,
}

/// UI element types for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Normal text content
    Text,
    /// Titles and headers
    Title,
    /// Borders and frames
    Border,
    /// Highlighted/selected items
    Highlight,
    /// De-emphasized text (secondary labels, placeholders)
    Dim,
    /// Barely-there text (hints, separators)
    Faint,
    /// Error lines in the terminal history
    Error,
    /// Background fill
    Background,
    /// Panel fill (terminal pane, modal)
    Panel,
}

#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        let primary = variant.primary();
        let colors = ColorPalette {
            background: Color::Rgb(17, 17, 17), // #111111
            panel: Color::Rgb(10, 10, 10),      // #0a0a0a
            primary,
            dim: scale(primary, 0.6),
            faint: scale(primary, 0.35),
            error: Color::Rgb(248, 113, 113),
        };
        Self { variant, colors }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn colors(&self) -> &ColorPalette {
        &self.colors
    }

    /// Advance to the next variant in cycling order.
    pub fn cycle(&mut self) {
        *self = Self::new(self.variant.next());
    }

    pub fn ratatui_style(&self, element: Element) -> Style {
        match element {
            Element::Text => Style::default()
                .fg(self.colors.primary)
                .bg(self.colors.background),

            Element::Title => Style::default()
                .fg(self.colors.primary)
                .bg(self.colors.background)
                .add_modifier(Modifier::BOLD),

            Element::Border => Style::default()
                .fg(self.colors.faint)
                .bg(self.colors.background),

            Element::Highlight => Style::default()
                .fg(self.colors.background)
                .bg(self.colors.primary)
                .add_modifier(Modifier::BOLD),

            Element::Dim => Style::default()
                .fg(self.colors.dim)
                .bg(self.colors.background),

            Element::Faint => Style::default()
                .fg(self.colors.faint)
                .bg(self.colors.background),

            Element::Error => Style::default()
                .fg(self.colors.error)
                .bg(self.colors.panel),

            Element::Background => Style::default()
                .fg(self.colors.primary)
                .bg(self.colors.background),

            Element::Panel => Style::default()
                .fg(self.colors.dim)
                .bg(self.colors.panel),
        }
    }

    pub fn text_style(&self) -> Style {
        self.ratatui_style(Element::Text)
    }

    pub fn title_style(&self) -> Style {
        self.ratatui_style(Element::Title)
    }

    pub fn border_style(&self) -> Style {
        self.ratatui_style(Element::Border)
    }

    pub fn highlight_style(&self) -> Style {
        self.ratatui_style(Element::Highlight)
    }

    pub fn dim_style(&self) -> Style {
        self.ratatui_style(Element::Dim)
    }
}

fn scale(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (f32::from(r) * factor) as u8,
            (f32::from(g) * factor) as u8,
            (f32::from(b) * factor) as u8,
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_walks_all_variants_and_wraps() {
        let mut theme = Theme::default();
        let mut seen = vec![theme.variant()];
        for _ in 0..5 {
            theme.cycle();
            seen.push(theme.variant());
        }
        assert_eq!(
            seen,
            vec![
                ThemeVariant::Green,
                ThemeVariant::Blue,
                ThemeVariant::Yellow,
                ThemeVariant::Red,
                ThemeVariant::Pink,
                ThemeVariant::Purple,
            ]
        );
        theme.cycle();
        assert_eq!(theme.variant(), ThemeVariant::Green);
    }

    #[test]
    fn variants_serialize_by_name() {
        let json = serde_json::to_string(&ThemeVariant::Pink).unwrap();
        assert_eq!(json, "\"pink\"");
        let back: ThemeVariant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ThemeVariant::Pink);
    }

    #[test]
    fn dim_is_darker_than_primary() {
        let theme = Theme::new(ThemeVariant::Green);
        let (Color::Rgb(_, pg, _), Color::Rgb(_, dg, _)) =
            (theme.colors().primary, theme.colors().dim)
        else {
            panic!("palette colors should be rgb");
        };
        assert!(dg < pg);
    }
}
