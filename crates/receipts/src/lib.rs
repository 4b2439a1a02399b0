//! Receipt adapters for the sales ledger.
//!
//! Implements the delivery side of the [`boutique_ledger::ReceiptDispatcher`]
//! port: composing the human-readable receipt for a sale, building the
//! `mailto:` link the hosting shell hands to a mail client, and an in-memory
//! dispatcher for tests and dev.

pub mod dispatcher;
pub mod receipt;

pub use dispatcher::{CapturingReceiptDispatcher, MailtoReceiptDispatcher};
pub use receipt::Receipt;
