//! Plain-text renderings of ledger data.

pub mod records;
pub mod reports;

use crate::ui::primitives::text::ColoredText;

pub fn money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

pub fn miles(distance: f64) -> String {
    format!("{:.1} mi", distance)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Right,
}

/// Fixed-width columns with a dimmed header row.
pub(crate) fn table(columns: &[(&str, Align)], rows: &[Vec<String>], color: bool) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|(h, _)| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(columns)
            .zip(&widths)
            .map(|((cell, (_, align)), &width)| match align {
                Align::Left => format!("{:<width$}", cell),
                Align::Right => format!("{:>width$}", cell),
            })
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let header = line(columns.iter().map(|(h, _)| *h).collect());
    let mut out = format!("{}\n", ColoredText::dim(header).render(color));
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}
