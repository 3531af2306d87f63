use ratatui::style::Color;

// Accent colors
pub const ACCENT: Color = Color::Rgb(124, 175, 194);          // #7CAFC2
pub const ACCENT_SOFT: Color = Color::Rgb(161, 193, 129);     // #A1C181
pub const REMOVE: Color = Color::Rgb(232, 131, 136);          // #E88388

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);      // #FFFFFF
pub const BORDER: Color = Color::Rgb(85, 85, 85);             // #555555
pub const CHIP_BG: Color = Color::Rgb(58, 58, 58);            // #3A3A3A
pub const HIGHLIGHT_BG: Color = Color::Rgb(48, 80, 96);       // #305060
pub const SELECTED_BG: Color = Color::Rgb(124, 175, 194);     // #7CAFC2
pub const LIST_BG: Color = Color::Black;
