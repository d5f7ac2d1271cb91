//! Menu-driven mode
//!
//! Loops over a main menu until the user quits. Ledger errors (bad input,
//! missing records) are shown and the menu comes back; prompt failures such
//! as a closed terminal end the session.

use anyhow::Result;
use dialoguer::{Confirm, FuzzySelect, Input, Select};
use nannymiles::domain::value_objects::parse_record_date;
use nannymiles::{Expense, LedgerResult, LedgerUseCase, RecordRef, Trip, TripType};

use super::today;
use crate::ui::error::format_error;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::{records, reports};
use crate::ui::UiContext;

const MENU: &[&str] = &[
    "Log a trip",
    "Log a trip from a template",
    "Add an expense",
    "This week's summary",
    "All weekly summaries",
    "Totals",
    "List trips",
    "List expenses",
    "Delete a trip",
    "Quit",
];

pub fn run(ledger: &LedgerUseCase, ui: &UiContext) -> Result<()> {
    println!(
        "{} nannymiles  {}\n",
        Icon::Trip.colored(ui.color, ui.unicode),
        ColoredText::dim(ledger.location().display().to_string()).render(ui.color)
    );

    loop {
        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(MENU)
            .default(0)
            .interact()?;

        let outcome = match selection {
            0 => log_trip(ledger, ui)?,
            1 => log_trip_from_template(ledger, ui)?,
            2 => add_expense(ledger, ui)?,
            3 => show_week(ledger, ui, &today()),
            4 => ledger
                .weekly_summaries()
                .map(|s| print!("{}", reports::weekly_summaries(&s, ui))),
            5 => ledger
                .totals()
                .map(|t| print!("{}", reports::totals(&t, ui))),
            6 => ledger
                .trips()
                .map(|t| print!("{}", records::trips(&t, ui))),
            7 => ledger
                .expenses()
                .map(|e| print!("{}", records::expenses(&e, ui))),
            8 => delete_trip(ledger, ui)?,
            _ => return Ok(()),
        };

        if let Err(err) = outcome {
            eprint!("{}", format_error(&anyhow::Error::from(err), ui));
        }
        println!();
    }
}

fn log_trip(ledger: &LedgerUseCase, ui: &UiContext) -> Result<LedgerResult<()>> {
    let date = prompt_date()?;
    let origin = prompt_text("From")?;
    let destination = prompt_text("To")?;
    let miles = prompt_positive("Miles (one way)")?;
    let round = Confirm::new()
        .with_prompt("Round trip?")
        .default(false)
        .interact()?;
    let trip_type = if round {
        TripType::Round
    } else {
        TripType::Single
    };

    Ok(ledger
        .add_trip(Trip::new(date, origin, destination, miles, trip_type))
        .map(|trip| print_trip("Added", &trip, ui)))
}

fn log_trip_from_template(ledger: &LedgerUseCase, ui: &UiContext) -> Result<LedgerResult<()>> {
    let templates = match ledger.trip_templates() {
        Ok(templates) => templates,
        Err(err) => return Ok(Err(err)),
    };
    if templates.is_empty() {
        println!(
            "{}",
            ColoredText::dim("No templates yet. Add one with `nannymiles template add`.")
                .render(ui.color)
        );
        return Ok(Ok(()));
    }

    let labels: Vec<String> = templates
        .iter()
        .map(|t| format!("{} ({} to {}, {})", t.name, t.origin, t.destination, t.trip_type))
        .collect();
    let choice = FuzzySelect::new()
        .with_prompt("Template")
        .items(&labels)
        .default(0)
        .interact()?;

    let date = prompt_date()?;
    let miles = prompt_positive("Miles (one way)")?;
    let reference = templates[choice].id.to_string();

    Ok(ledger
        .add_trip_from_template(&reference, &date, miles)
        .map(|trip| print_trip("Added", &trip, ui)))
}

fn add_expense(ledger: &LedgerUseCase, ui: &UiContext) -> Result<LedgerResult<()>> {
    let date = prompt_date()?;
    let amount = prompt_positive("Amount ($)")?;
    let description = prompt_text("Description")?;

    Ok(ledger
        .add_expense(Expense::new(date, amount, description))
        .map(|expense| {
            print!(
                "{}",
                records::saved(
                    "Added",
                    "expense",
                    expense.id.short(),
                    &records::expense_detail(&expense),
                    ui
                )
            )
        }))
}

fn show_week(ledger: &LedgerUseCase, ui: &UiContext, date: &str) -> LedgerResult<()> {
    match ledger.summary_for_week(date)? {
        Some(summary) => print!("{}", reports::weekly_summary(&summary, ui)),
        None => println!(
            "{}",
            ColoredText::dim("Nothing recorded this week.").render(ui.color)
        ),
    }
    Ok(())
}

fn delete_trip(ledger: &LedgerUseCase, ui: &UiContext) -> Result<LedgerResult<()>> {
    let trips = match ledger.trips() {
        Ok(trips) => trips,
        Err(err) => return Ok(Err(err)),
    };
    if trips.is_empty() {
        println!("{}", ColoredText::dim("No trips recorded.").render(ui.color));
        return Ok(Ok(()));
    }

    let labels: Vec<String> = trips
        .iter()
        .map(|t| {
            format!(
                "{}  {} to {}  {:.1} mi ({})",
                t.date, t.origin, t.destination, t.miles, t.trip_type
            )
        })
        .collect();
    let choice = Select::new()
        .with_prompt("Trip to delete")
        .items(&labels)
        .default(0)
        .interact()?;

    let confirmed = Confirm::new()
        .with_prompt(format!("Delete {}?", labels[choice]))
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(Ok(()));
    }

    Ok(ledger
        .delete_trip(RecordRef::Id(trips[choice].id))
        .map(|trip| print_trip("Deleted", &trip, ui)))
}

fn print_trip(action: &str, trip: &Trip, ui: &UiContext) {
    print!(
        "{}",
        records::saved(action, "trip", trip.id.short(), &records::trip_detail(trip, ui), ui)
    );
}

fn prompt_date() -> Result<String> {
    let date = Input::<String>::new()
        .with_prompt("Date (YYYY-MM-DD)")
        .default(today())
        .validate_with(|input: &String| -> Result<(), String> {
            parse_record_date(input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(date)
}

fn prompt_text(prompt: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &'static str> {
            if input.trim().is_empty() {
                Err("required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn prompt_positive(prompt: &str) -> Result<f64> {
    let value = Input::<f64>::new()
        .with_prompt(prompt)
        .validate_with(|input: &f64| -> Result<(), &'static str> {
            if input.is_finite() && *input > 0.0 {
                Ok(())
            } else {
                Err("must be greater than zero")
            }
        })
        .interact_text()?;
    Ok(value)
}
