use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    RoundTrip,
    OneWay,
    Trip,
    Summary,
    Totals,
    Server,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{icons as u, icons_ascii as a};

        let (unicode, ascii) = match self {
            Icon::Success => (u::SUCCESS, a::SUCCESS),
            Icon::Error => (u::ERROR, a::ERROR),
            Icon::Warning => (u::WARNING, a::WARNING),
            Icon::Arrow => (u::ARROW, a::ARROW),
            Icon::RoundTrip => (u::ROUND_TRIP, a::ROUND_TRIP),
            Icon::OneWay => (u::ONE_WAY, a::ONE_WAY),
            Icon::Trip => (u::TRIP, a::TRIP),
            Icon::Summary => (u::SUMMARY, a::SUMMARY),
            Icon::Totals => (u::TOTALS, a::TOTALS),
            Icon::Server => (u::SERVER, a::SERVER),
        };
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow | Icon::RoundTrip | Icon::OneWay => theme::colors::DIM,
            Icon::Trip
            | Icon::Summary
            | Icon::Totals
            | Icon::Server => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
