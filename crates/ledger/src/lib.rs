//! Sales ledger domain module.
//!
//! This crate owns the append-only record of completed sales and the compound
//! sale transaction: validate, decrement catalog stock, append the sale, hand
//! the receipt to the dispatcher. Sales snapshot the product name and unit
//! price at sale time, so history stays accurate when the catalog changes.

pub mod dispatch;
pub mod ledger;
pub mod sale;

pub use dispatch::ReceiptDispatcher;
pub use ledger::Ledger;
pub use sale::{Sale, SaleRequest};
