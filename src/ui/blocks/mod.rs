pub mod error;
pub mod header;
pub mod warning;

pub use error::ErrorBlock;
pub use header::CommandHeader;
pub use warning::WarningBlock;
