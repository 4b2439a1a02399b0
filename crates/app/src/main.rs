use boutique_app::{AppConfig, Boutique};
use boutique_catalog::{ProductDraft, ProductQuery};
use boutique_core::Money;
use boutique_ledger::SaleRequest;

fn main() -> anyhow::Result<()> {
    boutique_observability::init();

    let config = AppConfig::from_env();
    tracing::info!(store = %config.store_name, "boutique starting");

    let mut store = Boutique::with_mailto_receipts(config);

    let scarf = store
        .add_product(ProductDraft {
            name: "Silk Scarf".to_string(),
            price: Money::from_dollars(45, 0),
            quantity: 3,
            sku: Some("SCARF-001".to_string()),
            category: Some("Accessories".to_string()),
            ..ProductDraft::default()
        })?
        .id();

    store.add_product(ProductDraft {
        name: "Leather Tote".to_string(),
        price: Money::from_dollars(180, 0),
        quantity: 12,
        sku: Some("TOTE-014".to_string()),
        category: Some("Bags".to_string()),
        ..ProductDraft::default()
    })?;

    let sale_id = store
        .record_sale(SaleRequest {
            product_id: scarf,
            quantity: 2,
            customer_name: Some("Jane".to_string()),
            customer_email: "jane@example.com".to_string(),
            notes: Some("Gift wrap please".to_string()),
        })?
        .id();
    store.resend_receipt(sale_id)?;

    let low_stock = store.products(&ProductQuery::low_stock());
    tracing::info!(count = low_stock.len(), "low stock products");

    let dashboard = store.dashboard();
    tracing::info!(dashboard = %serde_json::to_string(&dashboard)?, "dashboard");

    Ok(())
}
