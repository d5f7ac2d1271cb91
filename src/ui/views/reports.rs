use nannymiles::domain::entities::WeeklySummary;
use nannymiles::domain::services::Totals;

use super::{miles, money};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::UiContext;

pub fn weekly_summaries(summaries: &[WeeklySummary], ui: &UiContext) -> String {
    if summaries.is_empty() {
        return format!(
            "{}\n",
            ColoredText::dim("No trips or expenses recorded yet.").render(ui.color)
        );
    }
    summaries
        .iter()
        .map(|s| weekly_summary(s, ui))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn weekly_summary(summary: &WeeklySummary, ui: &UiContext) -> String {
    let title = format!(
        "Week of {} to {}",
        summary.week_start.format("%Y-%m-%d"),
        summary.week_end.format("%Y-%m-%d")
    );
    let mut out = format!(
        "{} {}\n",
        Icon::Summary.colored(ui.color, ui.unicode),
        ColoredText::info(title).bold().render(ui.color)
    );

    let arrow = Icon::Arrow.render(ui.unicode);
    for trip in &summary.trips {
        out.push_str(&format!(
            "  {arrow} {}  {} to {}  {}\n",
            trip.date,
            trip.origin,
            trip.destination,
            miles(trip.effective_miles())
        ));
    }
    for expense in &summary.expenses {
        out.push_str(&format!(
            "  {arrow} {}  {}  {}\n",
            expense.date,
            expense.description,
            money(expense.amount)
        ));
    }

    out.push_str(&format!(
        "  Miles {}   Mileage {}   Expenses {}   {}\n",
        miles(summary.total_miles),
        money(summary.total_amount),
        money(summary.total_expenses),
        ColoredText::success(format!("Owed {}", money(summary.total_owed())))
            .bold()
            .render(ui.color)
    ));
    out
}

pub fn totals(totals: &Totals, ui: &UiContext) -> String {
    let rows = [
        ("Trips", totals.trip_count.to_string()),
        ("Miles", miles(totals.total_miles)),
        (
            "Mileage",
            format!(
                "{} at {}/mi",
                money(totals.reimbursement),
                money(totals.rate_per_mile)
            ),
        ),
        ("Expenses", format!("{} ({})", money(totals.total_expenses), totals.expense_count)),
    ];

    let mut out = format!(
        "{} {}\n",
        Icon::Totals.colored(ui.color, ui.unicode),
        ColoredText::info("Totals").bold().render(ui.color)
    );
    for (label, value) in rows {
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::dim(format!("{label:<9}")).render(ui.color),
            value
        ));
    }
    out.push_str(&format!(
        "  {} {}\n",
        ColoredText::dim(format!("{:<9}", "Owed")).render(ui.color),
        ColoredText::success(money(totals.total_owed()))
            .bold()
            .render(ui.color)
    ));
    out
}
