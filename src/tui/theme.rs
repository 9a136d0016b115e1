use ratatui::style::Color;

// Accent colors
pub const ACCENT_BLUE: Color = Color::Rgb(59, 130, 246);      // #3B82F6
pub const ACCENT_LIGHT_BLUE: Color = Color::Rgb(124, 175, 194); // #7CAFC2
pub const ACCENT_MINT: Color = Color::Rgb(161, 193, 129);      // #A1C181

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);         // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);       // #FFFFFF
pub const CONTROL_DISABLED: Color = Color::Rgb(68, 68, 68);    // #444444
pub const CELL_FOCUS: Color = Color::Rgb(219, 171, 121);       // #DBAB79
