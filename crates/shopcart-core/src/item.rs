//! # Line Items
//!
//! One cart line: title, unit price, quantity and promotional type.
//!
//! ## Draft vs. Item
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ItemDraft (any values)  ──► Item::try_from ──►  Item (always valid)   │
//! │        ▲                          │                     │               │
//! │        │                          └── ValidationError   │               │
//! │        └────────────── Item::into_draft ◄───────────────┘               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Item` has no public fields and no setters, so every `Item` in the program
//! satisfies the admission rules. Deserializing an `Item` validates too.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::discount;
use crate::error::{ValidationError, ValidationResult};
use crate::validation::{validate_price, validate_quantity, validate_title};
use crate::{MAX_ITEM_QUANTITY, MIN_ITEM_QUANTITY};

// =============================================================================
// Item Type
// =============================================================================

/// Promotional category of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    /// Full price.
    Regular,
    /// Second item at half price.
    Second,
    /// Clearance.
    Sale,
    /// Discounted, with extra discount in blocks of ten.
    Discount,
}

impl ItemType {
    /// Every promotional type, in declaration order.
    pub const ALL: [ItemType; 4] = [
        ItemType::Regular,
        ItemType::Second,
        ItemType::Sale,
        ItemType::Discount,
    ];

    /// Canonical upper-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ItemType::Regular => "REGULAR",
            ItemType::Second => "SECOND",
            ItemType::Sale => "SALE",
            ItemType::Discount => "DISCOUNT",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "REGULAR" => Ok(ItemType::Regular),
            "SECOND" => Ok(ItemType::Second),
            "SALE" => Ok(ItemType::Sale),
            "DISCOUNT" => Ok(ItemType::Discount),
            _ => Err(ValidationError::UnknownItemType(s.to_string())),
        }
    }
}

// =============================================================================
// Item Draft
// =============================================================================

/// Unvalidated line item, as received from a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub title: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

impl ItemDraft {
    /// Runs admission validation and produces an [`Item`].
    pub fn validate(self) -> ValidationResult<Item> {
        Item::try_from(self)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A validated line item.
///
/// ## Invariants
/// - title is 1..=32 characters
/// - 0 < price < 1000
/// - 1 <= quantity <= 1000
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemDraft", into = "ItemDraft")]
pub struct Item {
    title: String,
    price: f64,
    quantity: u32,
    item_type: ItemType,
}

impl Item {
    /// Creates a validated item.
    ///
    /// Fields are checked in order title, price, quantity; the first violation
    /// is returned.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Item, ItemType};
    ///
    /// let item = Item::new("Oat milk", 2.49, 6, ItemType::Second).unwrap();
    /// assert_eq!(item.quantity(), 6);
    ///
    /// assert!(Item::new("", 2.49, 6, ItemType::Second).is_err());
    /// assert!(Item::new("Oat milk", 2.49, -3, ItemType::Second).is_err());
    /// ```
    pub fn new(
        title: impl Into<String>,
        price: f64,
        quantity: i64,
        item_type: ItemType,
    ) -> ValidationResult<Self> {
        let title = title.into();
        validate_title(&title)?;
        validate_price(price)?;
        validate_quantity(quantity)?;
        let quantity =
            u32::try_from(quantity).map_err(|_| ValidationError::QuantityOutOfRange {
                quantity,
                min: MIN_ITEM_QUANTITY,
                max: MAX_ITEM_QUANTITY,
            })?;

        Ok(Item {
            title,
            price,
            quantity,
            item_type,
        })
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[inline]
    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    /// Discount percentage under the standard promotion table.
    pub fn discount(&self) -> u32 {
        discount::calculate_discount(self.item_type, self.quantity)
    }

    /// Returns an editable, unvalidated copy.
    pub fn into_draft(self) -> ItemDraft {
        ItemDraft::from(self)
    }
}

impl TryFrom<ItemDraft> for Item {
    type Error = ValidationError;

    fn try_from(draft: ItemDraft) -> Result<Self, Self::Error> {
        Item::new(draft.title, draft.price, draft.quantity, draft.item_type)
    }
}

impl From<Item> for ItemDraft {
    fn from(item: Item) -> Self {
        ItemDraft {
            title: item.title,
            price: item.price,
            quantity: i64::from(item.quantity),
            item_type: item.item_type,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
