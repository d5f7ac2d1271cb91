use anyhow::Result;
use nannymiles::LedgerUseCase;
use serde_json::json;

use crate::ui::json::emit;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::reports;
use crate::ui::UiContext;

/// All weekly summaries, or only the week containing `week`.
pub fn summary(week: Option<String>, ledger: &LedgerUseCase, ui: &UiContext) -> Result<()> {
    let Some(date) = week else {
        let summaries = ledger.weekly_summaries()?;
        if ui.json {
            emit(&summaries)?;
        } else {
            print!("{}", reports::weekly_summaries(&summaries, ui));
        }
        return Ok(());
    };

    let found = ledger.summary_for_week(&date)?;
    if ui.json {
        emit(&found)?;
        return Ok(());
    }
    match found {
        Some(summary) => print!("{}", reports::weekly_summary(&summary, ui)),
        None => println!(
            "{}",
            ColoredText::dim(format!("Nothing recorded in the week of {date}.")).render(ui.color)
        ),
    }
    Ok(())
}

pub fn totals(ledger: &LedgerUseCase, ui: &UiContext) -> Result<()> {
    let totals = ledger.totals()?;
    if ui.json {
        emit(&totals)?;
    } else {
        print!("{}", reports::totals(&totals, ui));
    }
    Ok(())
}

pub fn recalculate(ledger: &LedgerUseCase, ui: &UiContext) -> Result<()> {
    let weeks = ledger.recalculate()?;
    if ui.json {
        emit(&json!({ "weeks": weeks, "rate_per_mile": ledger.rate_per_mile() }))?;
    } else {
        println!(
            "{} Recalculated {} week(s) at ${:.2}/mi",
            Icon::Success.colored(ui.color, ui.unicode),
            weeks,
            ledger.rate_per_mile()
        );
    }
    Ok(())
}
