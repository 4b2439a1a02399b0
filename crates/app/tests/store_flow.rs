//! Black-box tests driving the full stack: facade → ledger → catalog →
//! receipt channel.

use std::sync::Arc;

use boutique_app::{AppConfig, Boutique};
use boutique_catalog::{ProductDraft, ProductQuery};
use boutique_core::{DomainError, Money};
use boutique_ledger::SaleRequest;
use boutique_receipts::CapturingReceiptDispatcher;

fn test_store() -> (Boutique, Arc<CapturingReceiptDispatcher>) {
    let receipts = Arc::new(CapturingReceiptDispatcher::new("Test Boutique"));
    let store = Boutique::new(AppConfig::default(), receipts.clone());
    (store, receipts)
}

fn scarf_draft() -> ProductDraft {
    ProductDraft {
        name: "Silk Scarf".to_string(),
        price: Money::from_dollars(45, 0),
        quantity: 3,
        sku: Some("SCARF-001".to_string()),
        ..ProductDraft::default()
    }
}

#[test]
fn first_product_shows_up_in_the_dashboard() {
    let (mut store, _receipts) = test_store();
    store.add_product(scarf_draft()).unwrap();

    let dashboard = store.dashboard();
    assert_eq!(dashboard.product_count, 1);
    assert_eq!(dashboard.total_inventory_value, Money::from_dollars(135, 0));
    assert_eq!(dashboard.total_sales, Money::ZERO);
}

#[test]
fn completed_sale_updates_stock_ledger_and_receipts() {
    let (mut store, receipts) = test_store();
    let product_id = store.add_product(scarf_draft()).unwrap().id();

    let sale_id = store
        .record_sale(SaleRequest {
            product_id,
            quantity: 2,
            customer_name: Some("Jane".to_string()),
            customer_email: "jane@x.com".to_string(),
            notes: None,
        })
        .unwrap()
        .id();

    assert_eq!(store.product(product_id).unwrap().quantity(), 1);

    let sales = store.recent_sales();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].id(), sale_id);
    assert_eq!(sales[0].total(), Money::from_dollars(90, 0));

    let sent = receipts.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "jane@x.com");
    assert!(sent[0].subject.contains("Test Boutique"));

    let dashboard = store.dashboard();
    assert_eq!(dashboard.total_sales, Money::from_dollars(90, 0));
    assert_eq!(dashboard.total_inventory_value, Money::from_dollars(45, 0));
}

#[test]
fn oversell_is_rejected_and_leaves_everything_untouched() {
    let (mut store, receipts) = test_store();
    let product_id = store.add_product(scarf_draft()).unwrap().id();

    let err = store
        .record_sale(SaleRequest {
            product_id,
            quantity: 5,
            customer_name: None,
            customer_email: "a@b.com".to_string(),
            notes: None,
        })
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::InsufficientStock {
            requested: 5,
            available: 3
        }
    );
    assert_eq!(store.product(product_id).unwrap().quantity(), 3);
    assert!(store.recent_sales().is_empty());
    assert_eq!(receipts.count(), 0);
}

#[test]
fn low_stock_filter_returns_only_the_scarce_product() {
    let (mut store, _receipts) = test_store();
    let scarce = store.add_product(scarf_draft()).unwrap().id();
    store
        .add_product(ProductDraft {
            name: "Leather Tote".to_string(),
            price: Money::from_dollars(180, 0),
            quantity: 50,
            ..ProductDraft::default()
        })
        .unwrap();

    let results = store.products(&ProductQuery::low_stock());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), scarce);
}

#[test]
fn resend_repeats_delivery_without_touching_state() {
    let (mut store, receipts) = test_store();
    let product_id = store.add_product(scarf_draft()).unwrap().id();
    let sale_id = store
        .record_sale(SaleRequest {
            product_id,
            quantity: 1,
            customer_name: Some("Jane".to_string()),
            customer_email: "jane@x.com".to_string(),
            notes: None,
        })
        .unwrap()
        .id();
    let before = store.dashboard();

    store.resend_receipt(sale_id).unwrap();
    store.resend_receipt(sale_id).unwrap();

    assert_eq!(receipts.count(), 3);
    assert_eq!(store.dashboard(), before);
    assert_eq!(store.recent_sales().len(), 1);
}

#[test]
fn sales_history_survives_product_deletion() {
    let (mut store, _receipts) = test_store();
    let product_id = store.add_product(scarf_draft()).unwrap().id();
    store
        .record_sale(SaleRequest {
            product_id,
            quantity: 1,
            customer_name: None,
            customer_email: "a@b.com".to_string(),
            notes: None,
        })
        .unwrap();

    store.remove_product(product_id).unwrap();

    let sales = store.recent_sales();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].product_name(), "Silk Scarf");
    assert_eq!(sales[0].price(), Money::from_dollars(45, 0));
    assert_eq!(store.dashboard().product_count, 0);
}

#[test]
fn removing_an_unknown_product_reports_not_found() {
    let (mut store, _receipts) = test_store();
    let product_id = store.add_product(scarf_draft()).unwrap().id();
    store.remove_product(product_id).unwrap();

    assert_eq!(
        store.remove_product(product_id).unwrap_err(),
        DomainError::NotFound
    );
}
