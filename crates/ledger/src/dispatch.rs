//! Receipt delivery port.

use crate::sale::Sale;

/// Sink for customer receipts.
///
/// The ledger calls this exactly once per recorded sale and once per explicit
/// resend. Fire-and-forget: delivery success or failure is never reported
/// back, and implementations must not mutate ledger or catalog state.
pub trait ReceiptDispatcher: Send + Sync + 'static {
    fn dispatch(&self, sale: &Sale);
}
