//! # Cart
//!
//! A fixed-capacity, append-only sequence of validated line items.
//!
//! ## Admission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  add_item(title, price, qty, type)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Item::new ── invalid ──► CartError::Validation (cart unchanged)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  add(item)                                                              │
//! │       │                                                                 │
//! │       ├── len == 99 ──► CartError::CapacityExceeded (cart unchanged)    │
//! │       │                                                                 │
//! │       └── push ──► len + 1                                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items are validated before the capacity check, so an invalid item offered
//! to a full cart is reported as a validation failure.
//!
//! The cart never computes discounts on its own; callers ask for them per
//! item through [`Cart::calculate_discount`].

use std::slice;

use tracing::{debug, warn};

use crate::discount::DiscountRules;
use crate::error::{CartError, CartResult};
use crate::item::{Item, ItemType};
use crate::validation::validate_cart_capacity;
use crate::MAX_CART_ITEMS;

/// The shopping cart.
///
/// ## Invariants
/// - Every stored item passed validation
/// - At most [`MAX_CART_ITEMS`] items
/// - Insertion order is preserved
/// - Items are never removed or modified
#[derive(Debug, PartialEq)]
pub struct Cart {
    // Reserved at MAX_CART_ITEMS and never grown past it.
    items: Vec<Item>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::with_capacity(MAX_CART_ITEMS),
        }
    }

    /// Validates and appends a line item.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(CartError::Validation)` if any field is out of range
    /// - `Err(CartError::CapacityExceeded)` if the cart already holds 99 items
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Cart, ItemType};
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item("Bread", 2.10, 1, ItemType::Regular).unwrap();
    ///
    /// let err = cart.add_item("Bread", 0.0, 1, ItemType::Regular).unwrap_err();
    /// assert!(err.is_validation());
    /// assert_eq!(cart.len(), 1);
    /// ```
    pub fn add_item(
        &mut self,
        title: impl Into<String>,
        price: f64,
        quantity: i64,
        item_type: ItemType,
    ) -> CartResult<()> {
        let title = title.into();
        let item = match Item::new(title.clone(), price, quantity, item_type) {
            Ok(item) => item,
            Err(source) => {
                debug!(%title, field = source.field(), error = %source, "Item rejected");
                return Err(CartError::Validation { title, source });
            }
        };

        self.add(item)
    }

    /// Appends an already validated item.
    pub fn add(&mut self, item: Item) -> CartResult<()> {
        if let Err(err) = validate_cart_capacity(self.items.len()) {
            warn!(title = item.title(), capacity = MAX_CART_ITEMS, "Cart is full");
            return Err(err);
        }

        debug!(
            title = item.title(),
            item_type = %item.item_type(),
            len = self.items.len() + 1,
            "Item added to cart"
        );
        self.items.push(item);
        Ok(())
    }

    /// Discount percentage for an item under the standard promotion table.
    ///
    /// Pure: depends only on the item's type and quantity.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Cart, Item, ItemType};
    ///
    /// let item = Item::new("Detergent", 12.0, 5, ItemType::Second).unwrap();
    /// assert_eq!(Cart::calculate_discount(&item), 50);
    /// ```
    pub fn calculate_discount(item: &Item) -> u32 {
        DiscountRules::STANDARD.discount_for(item)
    }

    /// Number of items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks if another admission would fail with `CapacityExceeded`.
    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_CART_ITEMS
    }

    /// Maximum number of items.
    pub const fn capacity(&self) -> usize {
        MAX_CART_ITEMS
    }

    /// Free slots left.
    pub fn remaining(&self) -> usize {
        MAX_CART_ITEMS - self.items.len()
    }

    /// Admitted items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl Clone for Cart {
    fn clone(&self) -> Self {
        // Vec::clone only allocates `len` slots.
        let mut items = Vec::with_capacity(MAX_CART_ITEMS);
        items.extend(self.items.iter().cloned());
        Cart { items }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Item;
    type IntoIter = slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
