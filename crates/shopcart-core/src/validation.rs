//! # Validation Module
//!
//! Per-field admission rules for cart line items.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field      Rule                      Error                             │
//! │  ─────────  ────────────────────────  ──────────────────────────────    │
//! │  title      1..=32 characters         TitleLength                       │
//! │  price      0 < price < 1000          PriceOutOfRange                   │
//! │  quantity   1..=1000                  QuantityOutOfRange                │
//! │                                                                         │
//! │  cart       len < 99 before push      CartError::CapacityExceeded       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each validator is independent. [`Item::new`](crate::item::Item::new) runs
//! all three field validators; the cart runs the capacity check afterwards.
//!
//! ## Usage
//! ```rust
//! use shopcart_core::validation::{validate_price, validate_quantity, validate_title};
//!
//! assert!(validate_title("Coffee beans").is_ok());
//! assert!(validate_price(1000.0).is_err());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::{CartError, CartResult, ValidationError};
pub use crate::error::ValidationResult;
use crate::{
    MAX_CART_ITEMS, MAX_ITEM_PRICE, MAX_ITEM_QUANTITY, MAX_TITLE_LEN, MIN_ITEM_QUANTITY,
    MIN_TITLE_LEN,
};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item title.
///
/// Length is counted in characters, so `"Café"` is 4 long.
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let length = title.chars().count();

    if !(MIN_TITLE_LEN..=MAX_TITLE_LEN).contains(&length) {
        return Err(ValidationError::TitleLength {
            length,
            min: MIN_TITLE_LEN,
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Strictly greater than zero
/// - Strictly less than [`MAX_ITEM_PRICE`]
/// - `NaN` and infinities are rejected
///
/// ## Example
/// ```rust
/// use shopcart_core::validation::validate_price;
///
/// assert!(validate_price(0.01).is_ok());
/// assert!(validate_price(999.99).is_ok());
/// assert!(validate_price(0.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    // Written as a negated conjunction so NaN falls into the error branch.
    if !(price > 0.0 && price < MAX_ITEM_PRICE) {
        return Err(ValidationError::PriceOutOfRange {
            price,
            min: 0.0,
            max: MAX_ITEM_PRICE,
        });
    }

    Ok(())
}

/// Validates a line quantity.
///
/// ## User Workflow
/// ```text
/// validate_quantity(q)
///      │
///      ├── q < 1?    → QuantityOutOfRange
///      ├── q > 1000? → QuantityOutOfRange
///      └── OK
/// ```
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if !(MIN_ITEM_QUANTITY..=MAX_ITEM_QUANTITY).contains(&quantity) {
        return Err(ValidationError::QuantityOutOfRange {
            quantity,
            min: MIN_ITEM_QUANTITY,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Checks that one more item fits into a cart currently holding `current_items`.
pub fn validate_cart_capacity(current_items: usize) -> CartResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(CartError::CapacityExceeded {
            capacity: MAX_CART_ITEMS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("A").is_ok());
        assert!(validate_title(&"A".repeat(32)).is_ok());
        assert!(validate_title("Café au lait").is_ok());

        assert!(validate_title("").is_err());
        assert!(validate_title(&"A".repeat(33)).is_err());
    }

    #[test]
    fn test_validate_title_counts_characters_not_bytes() {
        // 32 two-byte characters
        let title = "é".repeat(32);
        assert_eq!(title.len(), 64);
        assert!(validate_title(&title).is_ok());
    }

    #[test]
    fn test_validate_title_control_characters() {
        // A title made of non-printable characters is still a title of that length.
        let title: String = (0u8..5).map(char::from).collect();
        assert!(validate_title(&title).is_ok());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.01).is_ok());
        assert!(validate_price(f64::MIN_POSITIVE).is_ok());
        assert!(validate_price(500.0).is_ok());
        assert!(validate_price(999.999_999).is_ok());

        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-0.0).is_err());
        assert!(validate_price(-12.5).is_err());
        assert!(validate_price(1000.0).is_err());
        assert!(validate_price(f64::MAX).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_price(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_price_just_below_limit() {
        let below = f64::from_bits(MAX_ITEM_PRICE.to_bits() - 1);
        assert!(below < MAX_ITEM_PRICE);
        assert!(validate_price(below).is_ok());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(500).is_ok());
        assert!(validate_quantity(1000).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(i64::MIN).is_err());
        assert!(validate_quantity(1001).is_err());
        assert!(validate_quantity(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_cart_capacity() {
        assert!(validate_cart_capacity(0).is_ok());
        assert!(validate_cart_capacity(98).is_ok());

        assert_eq!(
            validate_cart_capacity(99),
            Err(CartError::CapacityExceeded { capacity: 99 })
        );
        assert!(validate_cart_capacity(150).is_err());
    }
}
