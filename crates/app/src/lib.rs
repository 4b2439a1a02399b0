//! Application facade for the boutique inventory and sales core.
//!
//! Wires one [`boutique_catalog::Catalog`], one [`boutique_ledger::Ledger`],
//! and a receipt channel behind a single [`Boutique`] service. A presentation
//! layer drives the facade and renders whatever it returns; all transient UI
//! state stays on that side.

pub mod config;
pub mod service;

pub use config::AppConfig;
pub use service::{Boutique, Dashboard};
