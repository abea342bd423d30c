//! Color palette for the DesignDeck theme.

use ratatui::style::Color;

// --- Background layers ---
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Stat card accents ---
pub const STAT_TOTAL: Color = Color::Cyan;
pub const STAT_RECENT: Color = Color::Green;
pub const STAT_MICROSERVICES: Color = Color::Magenta;
pub const STAT_MONOLITH: Color = Color::Yellow;

// --- Diagram view ---
pub const DIAGRAM_BOX: Color = Color::Cyan;
pub const DIAGRAM_EDGE: Color = Color::Gray;
