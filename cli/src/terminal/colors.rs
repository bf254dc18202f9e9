use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

/// Header colour per results column: rank, location, min, avg, max, mdev.
pub const COLUMN_HEADERS: [Color; 6] = [
    Color::Cyan,
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Red,
    Color::Cyan,
];
