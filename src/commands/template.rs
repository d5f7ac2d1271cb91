use anyhow::Result;
use nannymiles::server::Indexed;
use nannymiles::{LedgerError, LedgerUseCase, RecordRef, TripTemplate};

use super::parse_ref;
use crate::cli::{TemplateAddArgs, TemplateCommand, TemplateEditArgs};
use crate::ui::json::emit;
use crate::ui::views::records;
use crate::ui::UiContext;

pub fn run(action: TemplateCommand, ledger: &LedgerUseCase, ui: &UiContext) -> Result<()> {
    match action {
        TemplateCommand::Add(args) => add(args, ledger, ui),
        TemplateCommand::Edit(args) => edit(args, ledger, ui),
        TemplateCommand::Delete(arg) => {
            let removed = ledger.delete_trip_template(parse_ref(&arg.reference)?)?;
            show_saved("Deleted", &removed, ui)
        }
        TemplateCommand::List => {
            let templates = ledger.trip_templates()?;
            if ui.json {
                emit(&Indexed::enumerate(templates))?;
            } else {
                print!("{}", records::templates(&templates, ui));
            }
            Ok(())
        }
    }
}

fn add(args: TemplateAddArgs, ledger: &LedgerUseCase, ui: &UiContext) -> Result<()> {
    let mut template = TripTemplate::new(args.name, args.origin, args.destination, args.trip_type);
    if let Some(notes) = args.notes.filter(|n| !n.trim().is_empty()) {
        template = template.with_notes(notes);
    }
    let stored = ledger.add_trip_template(template)?;
    show_saved("Added", &stored, ui)
}

fn edit(args: TemplateEditArgs, ledger: &LedgerUseCase, ui: &UiContext) -> Result<()> {
    let reference = parse_ref(&args.reference)?;
    let data = ledger.snapshot()?;
    let index = data
        .resolve_trip_template(reference)
        .map_err(LedgerError::from)?;

    let mut template = data.trip_templates()[index].clone();
    if let Some(name) = args.name {
        template.name = name;
    }
    if let Some(origin) = args.origin {
        template.origin = origin;
    }
    if let Some(destination) = args.destination {
        template.destination = destination;
    }
    if let Some(trip_type) = args.trip_type {
        template.trip_type = trip_type;
    }
    if let Some(notes) = args.notes {
        template.notes = Some(notes).filter(|n| !n.trim().is_empty());
    }

    let stored = ledger.edit_trip_template(RecordRef::Id(template.id), template)?;
    show_saved("Updated", &stored, ui)
}

fn show_saved(action: &str, template: &TripTemplate, ui: &UiContext) -> Result<()> {
    if ui.json {
        emit(template)?;
    } else {
        print!(
            "{}",
            records::saved(
                action,
                "template",
                template.id.short(),
                &records::template_detail(template, ui),
                ui
            )
        );
    }
    Ok(())
}
