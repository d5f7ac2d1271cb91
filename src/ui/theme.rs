use crossterm::style::Color;

/// Design tokens for the nannymiles CLI.
///
/// Five semantic colors only; every icon is sourced from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const ROUND_TRIP: &str = "⇄";
    pub const ONE_WAY: &str = "→";

    // Command identifiers (used in headers).
    pub const TRIP: &str = "🚗";
    pub const SUMMARY: &str = "📅";
    pub const TOTALS: &str = "Σ";
    pub const SERVER: &str = "📡";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const ROUND_TRIP: &str = "<->";
    pub const ONE_WAY: &str = "->";

    pub const TRIP: &str = "[TRIP]";
    pub const SUMMARY: &str = "[WEEK]";
    pub const TOTALS: &str = "[TOTAL]";
    pub const SERVER: &str = "[SERVE]";
}
