//! nannymiles CLI
//!
//! Usage: nannymiles [OPTIONS] [COMMAND]
//!
//! Commands:
//!   trip         Log, change or list trips
//!   expense      Log, change or list reimbursable expenses
//!   template     Manage reusable trip templates
//!   summary      Show weekly summaries
//!   totals       Show overall miles, reimbursement and expenses
//!   recalculate  Rebuild the stored weekly summaries
//!   serve        Serve the REST API
//!   interactive  Menu-driven mode (also the default on a terminal)

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use nannymiles::config::{self, ConfigWarning};
use nannymiles::{Config, JsonStorageRepository, LedgerUseCase};
use tracing::level_filters::LevelFilter;
use tracing::debug;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use ui::blocks::WarningBlock;
use ui::error::format_error;
use ui::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose);
    init_tracing(ui.verbose);

    match run(cli, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let rendered = format_error(&err, &ui);
            if ui.json {
                print!("{rendered}");
            } else {
                eprint!("{rendered}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(cli: Cli, ui: &UiContext) -> Result<()> {
    let config = load_config(&cli, ui)?;
    let repository = JsonStorageRepository::with_path(config.data_file());
    debug!(path = %repository.path().display(), rate = config.rate_per_mile(), "opening ledger");
    let ledger = LedgerUseCase::new(Arc::new(repository), config.rate_per_mile());

    let Some(command) = cli.command else {
        if ui.interactive {
            return commands::interactive::run(&ledger, ui);
        }
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Trip { action } => commands::trip::run(action, &ledger, ui),
        Commands::Expense { action } => commands::expense::run(action, &ledger, ui),
        Commands::Template { action } => commands::template::run(action, &ledger, ui),
        Commands::Summary { week } => commands::report::summary(week, &ledger, ui),
        Commands::Totals => commands::report::totals(&ledger, ui),
        Commands::Recalculate => commands::report::recalculate(&ledger, ui),
        Commands::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            commands::serve::run(config.server_addr(), ledger, ui)
        }
        Commands::Interactive => commands::interactive::run(&ledger, ui),
    }
}

/// Config file and environment, then the global CLI flags on top.
fn load_config(cli: &Cli, ui: &UiContext) -> Result<Config> {
    let (mut config, warnings) = config::load_or_default(cli.config.as_deref())?;
    if !warnings.is_empty() && !ui.json {
        eprint!("{}", render_warnings(&warnings, ui));
    }

    if let Some(path) = &cli.data_file {
        config.storage.path = Some(path.clone());
    }
    if let Some(rate) = cli.rate {
        config.reimbursement.rate_per_mile = rate;
    }
    config.validate()?;
    Ok(config)
}

fn render_warnings(warnings: &[ConfigWarning], ui: &UiContext) -> String {
    let mut block = WarningBlock::new("Config warnings");
    for warning in warnings {
        block.add_line(warning.to_string());
    }
    block.render(ui.color, ui.unicode)
}
