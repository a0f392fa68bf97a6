use ratatui::style::Color;

/// Colors shared by the strip's pages and the host widgets
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds: page body, popups, status bar
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    pub fg0: Color,
    /// Tab bar frame
    pub grey0: Color,
    /// Hints, chevrons and card footers
    pub grey1: Color,

    /// Page titles and the selected tab
    pub yellow: Color,
    /// Card borders
    pub blue: Color,

    pub selection: Color,
    /// Help popup border
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            yellow: Color::Rgb(0xd8, 0xa6, 0x57),
            blue: Color::Rgb(0x7d, 0xae, 0xa3),
            selection: Color::Rgb(0x50, 0x49, 0x45),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
        }
    }
}
