use chrono::Utc;
use serde::{Deserialize, Serialize};

use boutique_catalog::Catalog;
use boutique_core::{DomainError, DomainResult, Money, SaleId};

use crate::dispatch::ReceiptDispatcher;
use crate::sale::{Sale, SaleRequest};

/// Append-only record of completed sales.
///
/// Sales are stored in the order they were recorded and are never mutated or
/// removed. The ledger coordinates the compound sale transaction against the
/// catalog; in the single-threaded execution model every operation runs to
/// completion, so validating before the first mutation makes the transaction
/// all-or-nothing without locks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    sales: Vec<Sale>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sale: validate, decrement catalog stock, append, dispatch
    /// the receipt.
    ///
    /// On any failure neither the catalog quantity nor the ledger changes.
    pub fn record_sale(
        &mut self,
        catalog: &mut Catalog,
        request: SaleRequest,
        receipts: &dyn ReceiptDispatcher,
    ) -> DomainResult<&Sale> {
        let product = catalog
            .get(request.product_id)
            .ok_or(DomainError::NotFound)?;
        if request.quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        if request.quantity > product.quantity() {
            return Err(DomainError::insufficient_stock(
                request.quantity,
                product.quantity(),
            ));
        }
        if request.customer_email.trim().is_empty() {
            return Err(DomainError::validation("customer email is required"));
        }

        // Snapshot the product before it changes under the decrement.
        let product_name = product.name().to_string();
        let price = product.price();

        // Every check above passed, so the decrement cannot fail from here.
        catalog.decrement_stock(request.product_id, request.quantity)?;

        let idx = self.sales.len();
        self.sales
            .push(Sale::new(request, product_name, price, Utc::now()));
        let sale = &self.sales[idx];
        receipts.dispatch(sale);
        Ok(sale)
    }

    /// Re-dispatch the receipt for an existing sale. Performs no mutation.
    pub fn resend(
        &self,
        sale_id: SaleId,
        receipts: &dyn ReceiptDispatcher,
    ) -> DomainResult<&Sale> {
        let sale = self.get(sale_id).ok_or(DomainError::NotFound)?;
        receipts.dispatch(sale);
        Ok(sale)
    }

    pub fn get(&self, sale_id: SaleId) -> Option<&Sale> {
        self.sales.iter().find(|s| s.id() == sale_id)
    }

    /// All sales, most recent first.
    pub fn recent(&self) -> impl Iterator<Item = &Sale> {
        self.sales.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }

    /// Σ sale totals over the whole ledger.
    pub fn total_sales(&self) -> Money {
        self.sales.iter().map(Sale::total).sum()
    }
}
