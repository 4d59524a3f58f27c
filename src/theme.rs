//! Dark and light visual presets

use ratatui::style::Color;

/// Visual preset applied to the whole screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Colors the view draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub button_background: Color,
    pub button_foreground: Color,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Resolve the preset into concrete colors
    pub const fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Rgb(0x2e, 0x3f, 0x4f),
                foreground: Color::Rgb(0xff, 0xff, 0xff),
                button_background: Color::Rgb(0x4e, 0x5d, 0x6c),
                button_foreground: Color::Rgb(0xff, 0xff, 0xff),
            },
            Theme::Light => Palette {
                background: Color::Rgb(0xff, 0xff, 0xff),
                foreground: Color::Rgb(0x00, 0x00, 0x00),
                button_background: Color::Rgb(0xff, 0xff, 0xff),
                button_foreground: Color::Rgb(0x00, 0x00, 0x00),
            },
        }
    }
}
