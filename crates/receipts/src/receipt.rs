use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use boutique_ledger::Sale;

/// A composed customer receipt, ready for a mail client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Receipt {
    /// Compose the receipt message for a completed sale.
    pub fn for_sale(sale: &Sale, store_name: &str) -> Self {
        let greeting = sale.customer_name().unwrap_or("Valued Customer");
        let date = sale.date().format("%-m/%-d/%Y");

        let mut body = format!("Dear {greeting},\n\nThank you for your purchase!\n\n");
        body.push_str(&format!(
            "ORDER DETAILS:\nOrder Number: {}\nDate: {date}\n\n",
            sale.id()
        ));
        body.push_str(&format!(
            "ITEMS:\n- {} x {}\n  Price: {} each\n\n",
            sale.product_name(),
            sale.quantity(),
            sale.price()
        ));
        body.push_str(&format!("TOTAL: {}\n\n", sale.total()));
        if let Some(notes) = sale.notes() {
            body.push_str(&format!("Notes: {notes}\n\n"));
        }
        body.push_str(&format!(
            "Thank you for shopping with us!\n\nBest regards,\n{store_name} Team"
        ));

        Self {
            to: sale.customer_email().to_string(),
            subject: format!("Receipt from {store_name} - Order #{}", sale.id()),
            body,
        }
    }

    /// Build a `mailto:` link with percent-encoded subject and body.
    pub fn mailto_link(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            utf8_percent_encode(&self.subject, NON_ALPHANUMERIC),
            utf8_percent_encode(&self.body, NON_ALPHANUMERIC),
        )
    }
}
