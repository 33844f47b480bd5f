//! Order log repository.

use super::{
    KeyValueStore, StorageError, keys, read_collection, read_raw_records, write_collection,
};
use crate::order::Order;

/// Repository for the append-only order log.
pub struct OrderRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// All orders, oldest first. Missing or malformed data reads as empty.
    #[must_use]
    pub fn list(&self) -> Vec<Order> {
        read_collection(self.store, keys::ORDERS)
    }

    /// Append an order to the log.
    ///
    /// Reads the current log, appends, and writes the whole log back.
    /// Stored records are carried over verbatim, including ones [`list`]
    /// cannot interpret, so appending never drops an earlier order.
    ///
    /// [`list`]: OrderRepository::list
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if a log exists but is not a
    /// JSON array; it is left untouched. Returns `StorageError` if the log
    /// cannot be read or written.
    pub fn append(&self, order: &Order) -> Result<(), StorageError> {
        let mut records = read_raw_records(self.store, keys::ORDERS)
            .inspect_err(|e| tracing::error!(error = %e, "Order log unreadable, not overwriting"))?
            .unwrap_or_default();
        records.push(serde_json::to_value(order)?);
        write_collection(self.store, keys::ORDERS, &records)?;
        tracing::debug!(count = records.len(), "Order log written");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::cart::Cart;
    use crate::catalog::default_catalog;
    use crate::storage::MemoryStore;
    use crate::types::Customer;

    fn order(hour: u32) -> Order {
        let catalog = default_catalog();
        let cart = Cart::new().add(&catalog[0]);
        let customer = Customer {
            name: "Anna".to_string(),
            phone: "123".to_string(),
            address: "Main st".to_string(),
        };
        let date = Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap();
        Order::from_cart(&cart, customer, date)
    }

    #[test]
    fn test_append_keeps_chronological_order() {
        let store = MemoryStore::new();
        let repo = OrderRepository::new(&store);

        repo.append(&order(9)).unwrap();
        repo.append(&order(10)).unwrap();
        repo.append(&order(11)).unwrap();

        let hours: Vec<_> = repo
            .list()
            .iter()
            .map(|o| o.date.format("%H").to_string())
            .collect();
        assert_eq!(hours, vec!["09", "10", "11"]);
    }

    #[test]
    fn test_append_keeps_records_it_cannot_read() {
        let store = MemoryStore::new();
        let repo = OrderRepository::new(&store);
        repo.append(&order(9)).unwrap();

        let mut records: Vec<serde_json::Value> =
            serde_json::from_str(&store.get(keys::ORDERS).unwrap().unwrap()).unwrap();
        let mut nan_priced = records[0].clone();
        nan_priced["items"][0]["price"] = serde_json::Value::Null;
        records.push(nan_priced);
        store
            .set(keys::ORDERS, &serde_json::to_string(&records).unwrap())
            .unwrap();
        assert_eq!(repo.list().len(), 1);

        repo.append(&order(10)).unwrap();

        let stored: Vec<serde_json::Value> =
            serde_json::from_str(&store.get(keys::ORDERS).unwrap().unwrap()).unwrap();
        assert_eq!(stored.len(), 3);
        assert!(stored[1]["items"][0]["price"].is_null());
        assert_eq!(repo.list().len(), 2);
    }

    #[test]
    fn test_append_refuses_to_overwrite_unparseable_log() {
        let store = MemoryStore::new();
        store.set(keys::ORDERS, "{not json").unwrap();
        let repo = OrderRepository::new(&store);

        assert!(matches!(
            repo.append(&order(9)),
            Err(StorageError::Serialization(_))
        ));
        assert_eq!(store.get(keys::ORDERS).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_malformed_log_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(keys::ORDERS, "[{\"broken\": true}]").unwrap();

        let repo = OrderRepository::new(&store);
        assert!(repo.list().is_empty());
    }
}
