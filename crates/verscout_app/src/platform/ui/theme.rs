use ratatui::style::Color;
use verscout_core::DisplayPreference;

/// Colors for one display mode.
///
/// The palette is derived from the single preference value on every render,
/// so exactly one mode is ever applied; there is no marker to add or remove.
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
    pub notice: Color,
}

pub fn palette(preference: DisplayPreference) -> Palette {
    match preference {
        DisplayPreference::Light => Palette {
            background: Color::White,
            foreground: Color::Black,
            accent: Color::Blue,
            muted: Color::DarkGray,
            error: Color::Red,
            notice: Color::Yellow,
        },
        DisplayPreference::Dark => Palette {
            background: Color::Black,
            foreground: Color::Gray,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            error: Color::LightRed,
            notice: Color::LightYellow,
        },
    }
}
