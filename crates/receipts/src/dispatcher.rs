use std::sync::Mutex;

use boutique_ledger::{ReceiptDispatcher, Sale};

use crate::receipt::Receipt;

/// Dispatcher that hands receipts to the environment as `mailto:` links.
///
/// The core never observes delivery: this adapter composes the message,
/// builds the link, and emits it for the hosting shell to open in the
/// operator's mail client.
#[derive(Debug, Clone)]
pub struct MailtoReceiptDispatcher {
    store_name: String,
}

impl MailtoReceiptDispatcher {
    pub fn new(store_name: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
        }
    }
}

impl ReceiptDispatcher for MailtoReceiptDispatcher {
    fn dispatch(&self, sale: &Sale) {
        let receipt = Receipt::for_sale(sale, &self.store_name);
        tracing::info!(
            sale_id = %sale.id(),
            to = %receipt.to,
            link = %receipt.mailto_link(),
            "receipt ready",
        );
    }
}

/// In-memory dispatcher for tests/dev: keeps every composed receipt.
#[derive(Debug)]
pub struct CapturingReceiptDispatcher {
    store_name: String,
    inner: Mutex<Vec<Receipt>>,
}

impl CapturingReceiptDispatcher {
    pub fn new(store_name: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
            inner: Mutex::new(Vec::new()),
        }
    }

    /// Every receipt dispatched so far, oldest first.
    pub fn sent(&self) -> Vec<Receipt> {
        self.inner.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

impl ReceiptDispatcher for CapturingReceiptDispatcher {
    fn dispatch(&self, sale: &Sale) {
        let receipt = Receipt::for_sale(sale, &self.store_name);
        self.inner.lock().unwrap().push(receipt);
    }
}
