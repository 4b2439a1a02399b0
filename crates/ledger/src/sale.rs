use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use boutique_core::{Entity, Money, ProductId, SaleId};

/// Input for recording a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRequest {
    pub product_id: ProductId,
    pub quantity: u32,
    pub customer_name: Option<String>,
    pub customer_email: String,
    pub notes: Option<String>,
}

/// Immutable record of a completed sale.
///
/// Holds a denormalized snapshot of the product name and unit price taken at
/// the moment of sale; the `product_id` is a weak reference and the product
/// may be edited or deleted afterwards without touching this record. There
/// are no mutators: once appended to the ledger, a sale is a fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    id: SaleId,
    product_id: ProductId,
    product_name: String,
    quantity: u32,
    price: Money,
    total: Money,
    customer_name: Option<String>,
    customer_email: String,
    notes: Option<String>,
    date: DateTime<Utc>,
}

impl Sale {
    pub(crate) fn new(
        request: SaleRequest,
        product_name: String,
        price: Money,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: SaleId::new(),
            product_id: request.product_id,
            product_name,
            quantity: request.quantity,
            price,
            total: price.times(request.quantity),
            // Blank optional fields are treated as absent.
            customer_name: request.customer_name.filter(|n| !n.trim().is_empty()),
            customer_email: request.customer_email,
            notes: request.notes.filter(|n| !n.trim().is_empty()),
            date,
        }
    }

    pub fn id(&self) -> SaleId {
        self.id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Product name as it was at the time of sale.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price at the time of sale.
    pub fn price(&self) -> Money {
        self.price
    }

    /// `price × quantity`, fixed at the time of sale.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl Entity for Sale {
    type Id = SaleId;

    fn id(&self) -> SaleId {
        self.id
    }
}
