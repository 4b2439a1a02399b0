use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use boutique_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// Products with stock below this count are treated as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Products with stock below this count get the stronger "almost gone"
/// emphasis. Display-only; not a distinct stored state.
pub const CRITICAL_STOCK_THRESHOLD: u32 = 5;

/// Display classification of a product's remaining stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    Normal,
    Low,
    Critical,
}

/// Mutable product fields as submitted by a caller.
///
/// The same draft shape serves `create` and `update`: an update replaces
/// every field here and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    /// Unit price in the smallest currency unit.
    pub price: Money,
    pub quantity: u32,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    /// Opaque base64 image payload; never interpreted by the core.
    pub image: Option<String>,
}

impl ProductDraft {
    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(())
    }
}

/// Entity: a catalog product with its current stock level.
///
/// Fields are private; state changes only happen through [`crate::Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    quantity: u32,
    sku: Option<String>,
    category: Option<String>,
    description: Option<String>,
    image: Option<String>,
    created_at: DateTime<Utc>,
}

impl Product {
    pub(crate) fn from_draft(id: ProductId, draft: ProductDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            quantity: draft.quantity,
            sku: draft.sku,
            category: draft.category,
            description: draft.description,
            image: draft.image,
            created_at,
        }
    }

    /// Replace every mutable field; `id` and `created_at` are preserved.
    pub(crate) fn replace(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.price = draft.price;
        self.quantity = draft.quantity;
        self.sku = draft.sku;
        self.category = draft.category;
        self.description = draft.description;
        self.image = draft.image;
    }

    /// Subtract sold units from stock.
    ///
    /// Invariant: quantity never goes below zero; the subtraction only
    /// happens after both checks pass.
    pub(crate) fn take_stock(&mut self, amount: u32) -> DomainResult<u32> {
        if amount == 0 {
            return Err(DomainError::validation("amount must be positive"));
        }
        if amount > self.quantity {
            return Err(DomainError::insufficient_stock(amount, self.quantity));
        }
        self.quantity -= amount;
        Ok(self.quantity)
    }

    /// Case-insensitive substring match against name or SKU.
    pub(crate) fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .sku
                .as_deref()
                .is_some_and(|sku| sku.to_lowercase().contains(&needle))
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Value of the remaining stock at the current unit price.
    pub fn stock_value(&self) -> Money {
        self.price.times(self.quantity)
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }

    pub fn stock_level(&self) -> StockLevel {
        if self.quantity < CRITICAL_STOCK_THRESHOLD {
            StockLevel::Critical
        } else if self.quantity < LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::Normal
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
