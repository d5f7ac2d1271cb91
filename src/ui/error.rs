use nannymiles::config::ConfigError;
use nannymiles::domain::entities::MutationError;
use nannymiles::domain::ports::StorageError;
use nannymiles::LedgerError;

use crate::ui::blocks::ErrorBlock;
use crate::ui::UiContext;

/// Render a command failure for stderr (or stdout JSON in `--json` mode).
pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    if ui.json {
        return format!("{}\n", serde_json::json!({ "error": format!("{err:#}") }));
    }

    let block = match err.downcast_ref::<LedgerError>() {
        Some(ledger) => ledger_block(ledger),
        None => match err.downcast_ref::<ConfigError>() {
            Some(config) => config_block(config),
            None => ErrorBlock::new(format!("{err:#}")),
        },
    };
    block.render(ui.color, ui.unicode)
}

fn ledger_block(err: &LedgerError) -> ErrorBlock {
    match err {
        LedgerError::Mutation(MutationError::IndexOutOfRange { collection, .. }) => {
            ErrorBlock::new(err.to_string()).with_fix(format!(
                "run `nannymiles {} list` to see current positions",
                cli_noun(collection)
            ))
        }
        LedgerError::Mutation(MutationError::NotFound { collection, .. }) => {
            ErrorBlock::new(err.to_string()).with_fix(format!(
                "run `nannymiles {} list` to see stored records",
                cli_noun(collection)
            ))
        }
        LedgerError::UnknownTemplate { .. } => ErrorBlock::new(err.to_string())
            .with_fix("run `nannymiles template list` to see saved templates"),
        LedgerError::Storage(StorageError::Deserialization { path, message }) => {
            ErrorBlock::new(format!("data file corrupted\n{message}"))
                .with_file(path)
                .with_fix("repair the JSON or restore a backup; nothing was changed")
        }
        LedgerError::Storage(StorageError::Io { path, message }) => {
            ErrorBlock::new(format!("cannot access data file\n{message}")).with_file(path)
        }
        LedgerError::Config(config) => config_block(config),
        other => ErrorBlock::new(other.to_string()),
    }
}

fn config_block(err: &ConfigError) -> ErrorBlock {
    match err {
        ConfigError::Read { path, message } | ConfigError::Parse { path, message } => {
            ErrorBlock::new(format!("invalid configuration\n{message}")).with_file(path)
        }
        other => ErrorBlock::new(other.to_string()),
    }
}

fn cli_noun(collection: &str) -> &'static str {
    match collection {
        "expense" => "expense",
        "trip template" => "template",
        _ => "trip",
    }
}
