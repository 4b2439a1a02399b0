use chrono::Utc;
use serde::{Deserialize, Serialize};

use boutique_core::{DomainError, DomainResult, Money, ProductId};

use crate::product::{Product, ProductDraft};

/// Filter criteria for catalog searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Case-insensitive substring matched against name or SKU. Empty
    /// matches everything.
    pub term: String,
    /// Restrict to products below the low-stock threshold.
    pub low_stock_only: bool,
}

impl ProductQuery {
    /// Match everything.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matching(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            low_stock_only: false,
        }
    }

    pub fn low_stock() -> Self {
        Self {
            term: String::new(),
            low_stock_only: true,
        }
    }
}

/// In-memory product catalog.
///
/// Owns the full product set in insertion order. Every mutation goes through
/// the methods here, so `quantity >= 0` holds at all times. Aggregates are
/// recomputed on demand rather than cached; at this scale a linear scan is
/// cheaper than invalidation bookkeeping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft and add it as a new product.
    ///
    /// Assigns a fresh time-ordered id and the creation timestamp.
    pub fn create(&mut self, draft: ProductDraft) -> DomainResult<&Product> {
        draft.validate()?;
        let idx = self.products.len();
        self.products
            .push(Product::from_draft(ProductId::new(), draft, Utc::now()));
        Ok(&self.products[idx])
    }

    /// Replace all mutable fields of an existing product.
    pub fn update(&mut self, id: ProductId, draft: ProductDraft) -> DomainResult<&Product> {
        draft.validate()?;
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(DomainError::NotFound)?;
        product.replace(draft);
        Ok(product)
    }

    /// Remove a product, returning it.
    ///
    /// Historical sales keep their own snapshot of the product, so deletion
    /// is lossless for the ledger.
    pub fn delete(&mut self, id: ProductId) -> DomainResult<Product> {
        let idx = self
            .products
            .iter()
            .position(|p| p.id() == id)
            .ok_or(DomainError::NotFound)?;
        Ok(self.products.remove(idx))
    }

    /// Subtract `amount` units from a product's stock, returning the new
    /// quantity.
    pub fn decrement_stock(&mut self, id: ProductId, amount: u32) -> DomainResult<u32> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(DomainError::NotFound)?;
        product.take_stock(amount)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Filter products in insertion order. Pure; no side effects.
    pub fn search(&self, query: &ProductQuery) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.matches(&query.term))
            .filter(|p| !query.low_stock_only || p.is_low_stock())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Σ price × quantity over the whole catalog.
    pub fn total_inventory_value(&self) -> Money {
        self.products.iter().map(Product::stock_value).sum()
    }

    /// Count of products below the low-stock threshold.
    pub fn low_stock_count(&self) -> usize {
        self.products.iter().filter(|p| p.is_low_stock()).count()
    }
}
