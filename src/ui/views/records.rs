use nannymiles::domain::entities::{Expense, Trip, TripTemplate};
use nannymiles::domain::value_objects::TripType;

use super::{miles, money, table, Align};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::UiContext;

fn route(origin: &str, destination: &str, trip_type: TripType, ui: &UiContext) -> String {
    let arrow = match trip_type {
        TripType::Round => Icon::RoundTrip,
        TripType::Single => Icon::OneWay,
    };
    format!("{} {} {}", origin, arrow.render(ui.unicode), destination)
}

fn empty(what: &str, ui: &UiContext) -> String {
    format!("{}\n", ColoredText::dim(format!("No {what} recorded yet.")).render(ui.color))
}

pub fn trips(trips: &[Trip], ui: &UiContext) -> String {
    if trips.is_empty() {
        return empty("trips", ui);
    }
    let rows: Vec<Vec<String>> = trips
        .iter()
        .enumerate()
        .map(|(i, t)| {
            vec![
                i.to_string(),
                t.id.short(),
                t.date.clone(),
                route(&t.origin, &t.destination, t.trip_type, ui),
                t.trip_type.to_string(),
                miles(t.effective_miles()),
            ]
        })
        .collect();
    table(
        &[
            ("#", Align::Right),
            ("ID", Align::Left),
            ("Date", Align::Left),
            ("Route", Align::Left),
            ("Type", Align::Left),
            ("Miles", Align::Right),
        ],
        &rows,
        ui.color,
    )
}

pub fn expenses(expenses: &[Expense], ui: &UiContext) -> String {
    if expenses.is_empty() {
        return empty("expenses", ui);
    }
    let rows: Vec<Vec<String>> = expenses
        .iter()
        .enumerate()
        .map(|(i, e)| {
            vec![
                i.to_string(),
                e.id.short(),
                e.date.clone(),
                e.description.clone(),
                money(e.amount),
            ]
        })
        .collect();
    table(
        &[
            ("#", Align::Right),
            ("ID", Align::Left),
            ("Date", Align::Left),
            ("Description", Align::Left),
            ("Amount", Align::Right),
        ],
        &rows,
        ui.color,
    )
}

pub fn templates(templates: &[TripTemplate], ui: &UiContext) -> String {
    if templates.is_empty() {
        return empty("trip templates", ui);
    }
    let rows: Vec<Vec<String>> = templates
        .iter()
        .enumerate()
        .map(|(i, t)| {
            vec![
                i.to_string(),
                t.id.short(),
                t.name.clone(),
                route(&t.origin, &t.destination, t.trip_type, ui),
                t.notes.clone().unwrap_or_default(),
            ]
        })
        .collect();
    table(
        &[
            ("#", Align::Right),
            ("ID", Align::Left),
            ("Name", Align::Left),
            ("Route", Align::Left),
            ("Notes", Align::Left),
        ],
        &rows,
        ui.color,
    )
}

/// One-line confirmation after a write, e.g. `✓ Added trip 1f0c2a9b`.
pub fn saved(action: &str, kind: &str, id: impl std::fmt::Display, detail: &str, ui: &UiContext) -> String {
    format!(
        "{} {} {} {}  {}\n",
        Icon::Success.colored(ui.color, ui.unicode),
        action,
        kind,
        ColoredText::info(id.to_string()).render(ui.color),
        detail
    )
}

pub fn trip_detail(trip: &Trip, ui: &UiContext) -> String {
    format!(
        "{}  {}  {}",
        trip.date,
        route(&trip.origin, &trip.destination, trip.trip_type, ui),
        miles(trip.effective_miles())
    )
}

pub fn expense_detail(expense: &Expense) -> String {
    format!(
        "{}  {}  {}",
        expense.date,
        expense.description,
        money(expense.amount)
    )
}

pub fn template_detail(template: &TripTemplate, ui: &UiContext) -> String {
    format!(
        "{}  {}",
        template.name,
        route(&template.origin, &template.destination, template.trip_type, ui)
    )
}
