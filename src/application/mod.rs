//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `LedgerUseCase` - Locked load/mutate/save cycles and reports over the ledger

pub mod ledger;

pub use ledger::LedgerUseCase;
