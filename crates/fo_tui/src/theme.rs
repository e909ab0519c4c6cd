//! Terminal color theme.
//!
//! Maps the core palette's fixed tones onto RGB terminal colors and provides
//! the small set of chrome styles shared by every panel.

use fo_core::Tone;
use ratatui::style::{Color, Modifier, Style};

// Palette tones (same hex values the core contract documents)
pub const GOOD: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STRONG: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const NEUTRAL: Color = Color::Rgb(0xa3, 0xa3, 0xa3);
pub const CAUTION: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const BAD: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const MUTED: Color = Color::Rgb(0x73, 0x73, 0x73);

// Chrome
pub const ACCENT: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Good => GOOD,
        Tone::Strong => STRONG,
        Tone::Neutral => NEUTRAL,
        Tone::Caution => CAUTION,
        Tone::Bad => BAD,
        Tone::Muted => MUTED,
    }
}

pub fn tone_style(tone: Tone) -> Style {
    Style::default().fg(tone_color(tone))
}

pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn header_style() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Horizontal bar for inline magnitude display.
pub fn gauge_bar(pct: f64, width: usize) -> String {
    let pct = pct.clamp(0.0, 100.0);
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tone_has_a_color() {
        for tone in [
            Tone::Good,
            Tone::Strong,
            Tone::Neutral,
            Tone::Caution,
            Tone::Bad,
            Tone::Muted,
        ] {
            assert_ne!(tone_color(tone), Color::Reset);
        }
    }

    #[test]
    fn gauge_bar_clamps() {
        assert_eq!(gauge_bar(0.0, 4), "░░░░");
        assert_eq!(gauge_bar(100.0, 4), "████");
        assert_eq!(gauge_bar(250.0, 4), "████");
        assert_eq!(gauge_bar(-10.0, 4), "░░░░");
    }
}
