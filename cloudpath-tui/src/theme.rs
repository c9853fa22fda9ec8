//! Style tokens for the walkthrough viewer.
//!
//! Neon accents on a dark terminal. Use-case colors come from the core
//! palette so the card, icon tile and progress dots all agree with the
//! catalog's color tags.

use ratatui::style::{Color, Modifier, Style};

use cloudpath_core::{ColorTag, LocationBucket};

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn text_secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Terminal color of a use-case color tag.
pub fn tag_color(tag: ColorTag) -> Color {
    rgb(tag.palette().accent)
}

/// Outline of the step card.
pub fn tag_border(t: ColorTag) -> Style {
    Style::default().fg(rgb(t.palette().border))
}

/// Step card title.
pub fn tag_text(t: ColorTag) -> Style {
    Style::default()
        .fg(rgb(t.palette().text))
        .add_modifier(Modifier::BOLD)
}

/// "Step n of N" badge: deep text on the pale tint.
pub fn tag_badge(t: ColorTag) -> Style {
    let palette = t.palette();
    Style::default()
        .bg(rgb(palette.light))
        .fg(rgb(palette.text))
        .add_modifier(Modifier::BOLD)
}

pub fn tag(tag: ColorTag) -> Style {
    Style::default().fg(tag_color(tag))
}

pub fn tag_bold(t: ColorTag) -> Style {
    tag(t).add_modifier(Modifier::BOLD)
}

/// Solid tile behind the step icon.
pub fn tag_tile(t: ColorTag) -> Style {
    Style::default()
        .bg(tag_color(t))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Location badge: orange for client-side steps, green for server-side.
pub fn location_badge(bucket: LocationBucket) -> Style {
    match bucket {
        LocationBucket::ClientFrontend => warning(),
        LocationBucket::Server => positive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_colors_follow_palette() {
        assert_eq!(tag_color(ColorTag::Purple), Color::Rgb(168, 85, 247));
        assert_eq!(tag_color(ColorTag::Blue), Color::Rgb(59, 130, 246));
        assert_eq!(tag_color(ColorTag::Green), Color::Rgb(34, 197, 94));
    }

    #[test]
    fn card_shades_follow_palette() {
        assert_eq!(tag_border(ColorTag::Blue).fg, Some(Color::Rgb(191, 219, 254)));
        assert_eq!(tag_text(ColorTag::Green).fg, Some(Color::Rgb(22, 163, 74)));
        let badge = tag_badge(ColorTag::Purple);
        assert_eq!(badge.bg, Some(Color::Rgb(250, 245, 255)));
        assert_eq!(badge.fg, Some(Color::Rgb(147, 51, 234)));
    }

    #[test]
    fn badge_colors() {
        assert_eq!(location_badge(LocationBucket::ClientFrontend).fg, Some(WARNING));
        assert_eq!(location_badge(LocationBucket::Server).fg, Some(POSITIVE));
    }

    #[test]
    fn active_panel_is_highlighted() {
        assert_eq!(panel_border(true), accent());
        assert_eq!(panel_border(false), muted());
    }
}
