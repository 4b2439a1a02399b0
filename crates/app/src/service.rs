use std::sync::Arc;

use serde::{Deserialize, Serialize};

use boutique_catalog::{Catalog, Product, ProductDraft, ProductQuery};
use boutique_core::{DomainResult, Money, ProductId, SaleId};
use boutique_ledger::{Ledger, ReceiptDispatcher, Sale, SaleRequest};
use boutique_receipts::MailtoReceiptDispatcher;

use crate::config::AppConfig;

/// Derived store-level aggregates, recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub product_count: usize,
    pub total_inventory_value: Money,
    pub total_sales: Money,
    pub low_stock_count: usize,
}

/// Application facade: one catalog, one ledger, one receipt channel.
///
/// Operations run synchronously to completion; the borrow rules keep the
/// catalog/ledger pair consistent without any locking.
pub struct Boutique {
    config: AppConfig,
    catalog: Catalog,
    ledger: Ledger,
    receipts: Arc<dyn ReceiptDispatcher>,
}

impl Boutique {
    pub fn new(config: AppConfig, receipts: Arc<dyn ReceiptDispatcher>) -> Self {
        Self {
            config,
            catalog: Catalog::new(),
            ledger: Ledger::new(),
            receipts,
        }
    }

    /// Build a boutique wired to the mailto receipt channel.
    pub fn with_mailto_receipts(config: AppConfig) -> Self {
        let receipts = Arc::new(MailtoReceiptDispatcher::new(config.store_name.clone()));
        Self::new(config, receipts)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn add_product(&mut self, draft: ProductDraft) -> DomainResult<&Product> {
        let product = self.catalog.create(draft)?;
        tracing::info!(product_id = %product.id(), name = product.name(), "product created");
        Ok(product)
    }

    pub fn update_product(
        &mut self,
        id: ProductId,
        draft: ProductDraft,
    ) -> DomainResult<&Product> {
        let product = self.catalog.update(id, draft)?;
        tracing::info!(product_id = %id, "product updated");
        Ok(product)
    }

    pub fn remove_product(&mut self, id: ProductId) -> DomainResult<Product> {
        let product = self.catalog.delete(id)?;
        tracing::info!(product_id = %id, name = product.name(), "product deleted");
        Ok(product)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    pub fn products(&self, query: &ProductQuery) -> Vec<&Product> {
        self.catalog.search(query)
    }

    pub fn record_sale(&mut self, request: SaleRequest) -> DomainResult<&Sale> {
        let sale = self
            .ledger
            .record_sale(&mut self.catalog, request, self.receipts.as_ref())?;
        tracing::info!(
            sale_id = %sale.id(),
            product_id = %sale.product_id(),
            quantity = sale.quantity(),
            total = %sale.total(),
            "sale recorded",
        );
        Ok(sale)
    }

    pub fn resend_receipt(&self, sale_id: SaleId) -> DomainResult<&Sale> {
        let sale = self.ledger.resend(sale_id, self.receipts.as_ref())?;
        tracing::info!(sale_id = %sale_id, "receipt resent");
        Ok(sale)
    }

    pub fn recent_sales(&self) -> Vec<&Sale> {
        self.ledger.recent().collect()
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            product_count: self.catalog.len(),
            total_inventory_value: self.catalog.total_inventory_value(),
            total_sales: self.ledger.total_sales(),
            low_stock_count: self.catalog.low_stock_count(),
        }
    }
}
