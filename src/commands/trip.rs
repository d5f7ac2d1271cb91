use anyhow::Result;
use nannymiles::server::Indexed;
use nannymiles::{LedgerError, LedgerUseCase, RecordRef, Trip};

use super::{parse_ref, today};
use crate::cli::{TripAddArgs, TripCommand, TripEditArgs};
use crate::ui::json::emit;
use crate::ui::views::records;
use crate::ui::UiContext;

pub fn run(action: TripCommand, ledger: &LedgerUseCase, ui: &UiContext) -> Result<()> {
    match action {
        TripCommand::Add(args) => add(args, ledger, ui),
        TripCommand::Edit(args) => edit(args, ledger, ui),
        TripCommand::Delete(arg) => delete(&arg.reference, ledger, ui),
        TripCommand::List => list(ledger, ui),
    }
}

fn add(args: TripAddArgs, ledger: &LedgerUseCase, ui: &UiContext) -> Result<()> {
    let date = args.date.unwrap_or_else(today);
    let stored = match args.template {
        Some(template) => ledger.add_trip_from_template(&template, &date, args.miles)?,
        None => ledger.add_trip(Trip::new(
            date,
            args.origin.unwrap_or_default(),
            args.destination.unwrap_or_default(),
            args.miles,
            args.trip_type.unwrap_or_default(),
        ))?,
    };
    show_saved("Added", &stored, ui)
}

fn edit(args: TripEditArgs, ledger: &LedgerUseCase, ui: &UiContext) -> Result<()> {
    let reference = parse_ref(&args.reference)?;
    let data = ledger.snapshot()?;
    let index = data.resolve_trip(reference).map_err(LedgerError::from)?;

    let mut trip = data.trips()[index].clone();
    if let Some(date) = args.date {
        trip.date = date;
    }
    if let Some(origin) = args.origin {
        trip.origin = origin;
    }
    if let Some(destination) = args.destination {
        trip.destination = destination;
    }
    if let Some(miles) = args.miles {
        trip.miles = miles;
    }
    if let Some(trip_type) = args.trip_type {
        trip.trip_type = trip_type;
    }

    let stored = ledger.edit_trip(RecordRef::Id(trip.id), trip)?;
    show_saved("Updated", &stored, ui)
}

fn delete(reference: &str, ledger: &LedgerUseCase, ui: &UiContext) -> Result<()> {
    let removed = ledger.delete_trip(parse_ref(reference)?)?;
    show_saved("Deleted", &removed, ui)
}

fn list(ledger: &LedgerUseCase, ui: &UiContext) -> Result<()> {
    let trips = ledger.trips()?;
    if ui.json {
        emit(&Indexed::enumerate(trips))?;
    } else {
        print!("{}", records::trips(&trips, ui));
    }
    Ok(())
}

fn show_saved(action: &str, trip: &Trip, ui: &UiContext) -> Result<()> {
    if ui.json {
        emit(trip)?;
    } else {
        print!(
            "{}",
            records::saved(action, "trip", trip.id.short(), &records::trip_detail(trip, ui), ui)
        );
    }
    Ok(())
}
