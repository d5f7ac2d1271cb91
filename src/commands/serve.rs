use std::sync::Arc;

use anyhow::{Context, Result};
use nannymiles::{server, LedgerUseCase};

use crate::ui::blocks::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::UiContext;

/// Run the REST API until Ctrl-C.
pub fn run(addr: String, ledger: LedgerUseCase, ui: &UiContext) -> Result<()> {
    if !ui.json {
        let header = CommandHeader::new(Icon::Server, "nannymiles serve")
            .item("Listening", format!("http://{addr}"))
            .item("Data", ledger.location().display().to_string())
            .item("Rate", format!("${:.2}/mi", ledger.rate_per_mile()));
        print!("{}", header.render(ui.color, ui.unicode));
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime
        .block_on(server::serve(&addr, Arc::new(ledger)))
        .with_context(|| format!("server on {addr} failed"))
}
