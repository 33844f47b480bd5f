//! Shopping cart.
//!
//! The cart is a value: every mutation returns a new [`Cart`] and leaves the
//! receiver untouched. Entries live in an [`im::Vector`], so the old and new
//! carts share structure and cloning is cheap.
//!
//! None of the operations fail. Unknown ids and quantities below one are
//! ignored, leaving the cart as it was.

use im::Vector;
use rust_decimal::Decimal;

use crate::catalog::Product;
use crate::types::ProductId;

/// A product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product: Product,
    quantity: u32,
}

impl CartItem {
    /// Quantity of this product, always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.times(self.quantity)
    }
}

/// Session-local shopping cart.
///
/// Holds at most one entry per product id, in the order products were first
/// added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vector<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the quantity if the product is already in the cart,
    /// otherwise appends it with quantity 1.
    #[must_use]
    pub fn add(&self, product: &Product) -> Self {
        let mut items = self.items.clone();
        match self.position(product.id).and_then(|index| items.get_mut(index)) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => items.push_back(CartItem {
                product: product.clone(),
                quantity: 1,
            }),
        }
        Self { items }
    }

    /// Drop the entry for a product. Unknown ids are ignored.
    #[must_use]
    pub fn remove(&self, id: ProductId) -> Self {
        let mut items = self.items.clone();
        items.retain(|item| item.product.id != id);
        Self { items }
    }

    /// Set the quantity of a product already in the cart.
    ///
    /// Quantities below 1 are ignored and never remove the entry; use
    /// [`Cart::remove`] for that. Quantities above `u32::MAX` are clamped.
    #[must_use]
    pub fn set_quantity(&self, id: ProductId, quantity: i64) -> Self {
        if quantity < 1 {
            return self.clone();
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let mut items = self.items.clone();
        match self.position(id).and_then(|index| items.get_mut(index)) {
            Some(item) => item.quantity = quantity,
            None => return self.clone(),
        }
        Self { items }
    }

    /// Sum of price times quantity over all entries.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all entries.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Entry for a product, if present.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.product.id == id)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = im::vector::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    fn products() -> (Product, Product) {
        let mut catalog = default_catalog().into_iter();
        let vase = catalog.next().unwrap();
        let bowl = catalog.next().unwrap();
        (vase, bowl)
    }

    #[test]
    fn test_add_same_product_twice_increments_quantity() {
        let (vase, _) = products();
        let cart = Cart::new().add(&vase).add(&vase);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(vase.id).unwrap().quantity(), 2);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let (vase, bowl) = products();
        let cart = Cart::new().add(&bowl).add(&vase).add(&bowl);

        let ids: Vec<_> = cart.iter().map(|item| item.product.id).collect();
        assert_eq!(ids, vec![bowl.id, vase.id]);
    }

    #[test]
    fn test_add_does_not_mutate_previous_cart() {
        let (vase, bowl) = products();
        let before = Cart::new().add(&vase);
        let after = before.add(&vase).add(&bowl);

        assert_eq!(before.len(), 1);
        assert_eq!(before.get(vase.id).unwrap().quantity(), 1);
        assert_eq!(after.len(), 2);
        assert_eq!(after.get(vase.id).unwrap().quantity(), 2);
    }

    #[test]
    fn test_remove() {
        let (vase, bowl) = products();
        let cart = Cart::new().add(&vase).add(&bowl);

        let cart = cart.remove(vase.id);
        assert_eq!(cart.len(), 1);
        assert!(cart.get(vase.id).is_none());

        let unchanged = cart.remove(ProductId::new(999));
        assert_eq!(unchanged, cart);
    }

    #[test]
    fn test_set_quantity() {
        let (vase, _) = products();
        let cart = Cart::new().add(&vase).set_quantity(vase.id, 5);
        assert_eq!(cart.get(vase.id).unwrap().quantity(), 5);
    }

    #[test]
    fn test_set_quantity_below_one_is_ignored() {
        let (vase, _) = products();
        let cart = Cart::new().add(&vase).set_quantity(vase.id, 3);

        assert_eq!(cart.set_quantity(vase.id, 0), cart);
        assert_eq!(cart.set_quantity(vase.id, -4), cart);
        assert_eq!(cart.get(vase.id).unwrap().quantity(), 3);
    }

    #[test]
    fn test_set_quantity_clamps_huge_values() {
        let (vase, _) = products();
        let cart = Cart::new().add(&vase).set_quantity(vase.id, i64::MAX);

        assert_eq!(cart.get(vase.id).unwrap().quantity(), u32::MAX);
        assert_eq!(
            cart.total(),
            Decimal::from(2500) * Decimal::from(u32::MAX)
        );
    }

    #[test]
    fn test_set_quantity_unknown_id_is_ignored() {
        let (vase, bowl) = products();
        let cart = Cart::new().add(&vase);
        assert_eq!(cart.set_quantity(bowl.id, 4), cart);
    }

    #[test]
    fn test_total() {
        let (vase, bowl) = products();
        assert_eq!(Cart::new().total(), Decimal::ZERO);

        let cart = Cart::new().add(&vase).add(&bowl).add(&bowl);
        assert_eq!(cart.total(), Decimal::from(6100));
        assert_eq!(cart.item_count(), 3);

        let cart = cart.set_quantity(bowl.id, 1);
        assert_eq!(cart.total(), Decimal::from(4300));
    }
}
