//! Order snapshots.
//!
//! An order copies what the customer saw at checkout: product names, prices
//! and quantities, without any link back to the catalog. Deleting or
//! repricing a product later does not change past orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::types::{Customer, Price};

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl OrderLine {
    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.times(self.quantity)
    }
}

/// A submitted order. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub items: Vec<OrderLine>,
    pub customer: Customer,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Creation time.
    pub date: DateTime<Utc>,
}

impl Order {
    /// Snapshot a cart for a customer at the given time.
    ///
    /// The total is computed from the cart at this moment.
    #[must_use]
    pub fn from_cart(cart: &Cart, customer: Customer, date: DateTime<Utc>) -> Self {
        let items = cart
            .iter()
            .map(|item| OrderLine {
                name: item.product.name.clone(),
                price: item.product.price,
                quantity: item.quantity(),
            })
            .collect();

        Self {
            items,
            customer,
            total: cart.total(),
            date,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::catalog::default_catalog;

    fn customer() -> Customer {
        Customer {
            name: "Anna".to_string(),
            phone: "+7 999 123-45-67".to_string(),
            address: "Tverskaya 1".to_string(),
        }
    }

    #[test]
    fn test_from_cart_snapshots_lines_and_total() {
        let catalog = default_catalog();
        let cart = Cart::new()
            .add(&catalog[0])
            .add(&catalog[1])
            .add(&catalog[1]);
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let order = Order::from_cart(&cart, customer(), date);

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[1].name, "Clay bowl");
        assert_eq!(order.items[1].quantity, 2);
        assert_eq!(order.total, Decimal::from(6100));
        assert_eq!(order.date, date);
    }

    #[test]
    fn test_persisted_layout() {
        let catalog = default_catalog();
        let cart = Cart::new().add(&catalog[2]);
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let order = Order::from_cart(&cart, customer(), date);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["customer"]["name"], "Anna");
        assert_eq!(json["items"][0]["quantity"], 1);
        assert_eq!(json["total"].as_f64(), Some(1500.0));
        assert_eq!(json["date"], "2024-06-01T12:00:00Z");
    }

    #[test]
    fn test_reads_records_with_extra_item_fields() {
        let json = r#"{
            "items": [{"id": 1, "name": "Terracotta vase", "price": 2500,
                       "category": "vases", "image": "x.jpg",
                       "description": "d", "quantity": 2}],
            "customer": {"name": "Ivan", "phone": "123", "address": "Main st"},
            "total": 5000,
            "date": "2024-05-20T08:30:00.000Z"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.items[0].line_total(), Decimal::from(5000));
        assert_eq!(order.total, Decimal::from(5000));
    }
}
