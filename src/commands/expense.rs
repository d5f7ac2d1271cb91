use anyhow::Result;
use nannymiles::server::Indexed;
use nannymiles::{Expense, LedgerError, LedgerUseCase, RecordRef};

use super::{parse_ref, today};
use crate::cli::{ExpenseAddArgs, ExpenseCommand, ExpenseEditArgs};
use crate::ui::json::emit;
use crate::ui::views::records;
use crate::ui::UiContext;

pub fn run(action: ExpenseCommand, ledger: &LedgerUseCase, ui: &UiContext) -> Result<()> {
    match action {
        ExpenseCommand::Add(args) => add(args, ledger, ui),
        ExpenseCommand::Edit(args) => edit(args, ledger, ui),
        ExpenseCommand::Delete(arg) => {
            let removed = ledger.delete_expense(parse_ref(&arg.reference)?)?;
            show_saved("Deleted", &removed, ui)
        }
        ExpenseCommand::List => {
            let expenses = ledger.expenses()?;
            if ui.json {
                emit(&Indexed::enumerate(expenses))?;
            } else {
                print!("{}", records::expenses(&expenses, ui));
            }
            Ok(())
        }
    }
}

fn add(args: ExpenseAddArgs, ledger: &LedgerUseCase, ui: &UiContext) -> Result<()> {
    let expense = Expense::new(
        args.date.unwrap_or_else(today),
        args.amount,
        args.description,
    );
    let stored = ledger.add_expense(expense)?;
    show_saved("Added", &stored, ui)
}

fn edit(args: ExpenseEditArgs, ledger: &LedgerUseCase, ui: &UiContext) -> Result<()> {
    let reference = parse_ref(&args.reference)?;
    let data = ledger.snapshot()?;
    let index = data.resolve_expense(reference).map_err(LedgerError::from)?;

    let mut expense = data.expenses()[index].clone();
    if let Some(date) = args.date {
        expense.date = date;
    }
    if let Some(amount) = args.amount {
        expense.amount = amount;
    }
    if let Some(description) = args.description {
        expense.description = description;
    }

    let stored = ledger.edit_expense(RecordRef::Id(expense.id), expense)?;
    show_saved("Updated", &stored, ui)
}

fn show_saved(action: &str, expense: &Expense, ui: &UiContext) -> Result<()> {
    if ui.json {
        emit(expense)?;
    } else {
        print!(
            "{}",
            records::saved(
                action,
                "expense",
                expense.id.short(),
                &records::expense_detail(expense),
                ui
            )
        );
    }
    Ok(())
}
