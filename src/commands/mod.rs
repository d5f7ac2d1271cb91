//! Subcommand implementations. Each one writes text or, with `--json`,
//! a single JSON document to stdout.

pub mod expense;
pub mod interactive;
pub mod report;
pub mod serve;
pub mod template;
pub mod trip;

use nannymiles::domain::value_objects::format_record_date;
use nannymiles::{LedgerError, RecordRef};

/// Today's date in the ledger's date format.
pub(crate) fn today() -> String {
    format_record_date(chrono::Local::now().date_naive())
}

pub(crate) fn parse_ref(raw: &str) -> Result<RecordRef, LedgerError> {
    Ok(raw.parse::<RecordRef>()?)
}
