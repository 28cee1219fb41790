//! # Discount Rules
//!
//! Tiered, type-dependent discount percentages for a single line.
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. type component                                                      │
//! │     REGULAR   0                                                         │
//! │     SECOND   50                                                         │
//! │     SALE     90                                                         │
//! │     DISCOUNT min(10 + 10 × (qty / 10), 50)                              │
//! │                                                                         │
//! │  2. bulk component (every type)                                         │
//! │     10 × (qty / 100)                                                    │
//! │                                                                         │
//! │  3. discount = min(type + bulk, 80)                                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Divisions are integer divisions. All arithmetic saturates, so any `u32`
//! quantity yields a result in `0..=max_total_percent`.
//!
//! ## Example
//! ```rust
//! use shopcart_core::{calculate_discount, ItemType};
//!
//! assert_eq!(calculate_discount(ItemType::Regular, 1), 0);
//! assert_eq!(calculate_discount(ItemType::Discount, 15), 20);
//! assert_eq!(calculate_discount(ItemType::Discount, 1000), 80);
//! assert_eq!(calculate_discount(ItemType::Regular, 250), 20);
//! ```

use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemType};

// =============================================================================
// Discount Rules
// =============================================================================

/// Percentages and thresholds of the promotion table.
///
/// [`DiscountRules::STANDARD`] is the table used by the cart. Custom tables
/// can be loaded through [`PromotionConfig`](crate::config::PromotionConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscountRules {
    /// Type component for REGULAR items.
    pub regular_percent: u32,
    /// Type component for SECOND items.
    pub second_percent: u32,
    /// Type component for SALE items.
    pub sale_percent: u32,
    /// Starting type component for DISCOUNT items.
    pub discount_percent: u32,
    /// DISCOUNT items earn an extra step for every this many units.
    /// Zero disables the escalation.
    pub discount_step_quantity: u32,
    /// Percentage added per DISCOUNT step.
    pub discount_step_percent: u32,
    /// Ceiling on the DISCOUNT type component.
    pub discount_type_cap: u32,
    /// Every type earns a bulk step for every this many units.
    /// Zero disables the bulk discount.
    pub bulk_step_quantity: u32,
    /// Percentage added per bulk step.
    pub bulk_step_percent: u32,
    /// Ceiling on the final discount.
    pub max_total_percent: u32,
}

impl DiscountRules {
    /// The standard promotion table.
    pub const STANDARD: DiscountRules = DiscountRules {
        regular_percent: 0,
        second_percent: 50,
        sale_percent: 90,
        discount_percent: 10,
        discount_step_quantity: 10,
        discount_step_percent: 10,
        discount_type_cap: 50,
        bulk_step_quantity: 100,
        bulk_step_percent: 10,
        max_total_percent: 80,
    };

    /// Portion of the discount that comes from the promotional type.
    pub fn type_component(&self, item_type: ItemType, quantity: u32) -> u32 {
        match item_type {
            ItemType::Regular => self.regular_percent,
            ItemType::Second => self.second_percent,
            ItemType::Sale => self.sale_percent,
            ItemType::Discount => {
                let escalation = steps(quantity, self.discount_step_quantity)
                    .saturating_mul(self.discount_step_percent);
                self.discount_percent
                    .saturating_add(escalation)
                    .min(self.discount_type_cap)
            }
        }
    }

    /// Portion of the discount earned by volume, independent of type.
    pub fn bulk_component(&self, quantity: u32) -> u32 {
        steps(quantity, self.bulk_step_quantity).saturating_mul(self.bulk_step_percent)
    }

    /// Final discount percentage for a type and quantity.
    pub fn discount(&self, item_type: ItemType, quantity: u32) -> u32 {
        self.type_component(item_type, quantity)
            .saturating_add(self.bulk_component(quantity))
            .min(self.max_total_percent)
    }

    /// Final discount percentage for an item.
    pub fn discount_for(&self, item: &Item) -> u32 {
        self.discount(item.item_type(), item.quantity())
    }
}

impl Default for DiscountRules {
    fn default() -> Self {
        DiscountRules::STANDARD
    }
}

/// Number of whole `step`-sized blocks in `quantity`; zero when `step` is zero.
#[inline]
fn steps(quantity: u32, step: u32) -> u32 {
    quantity.checked_div(step).unwrap_or(0)
}

// =============================================================================
// Standard Calculation
// =============================================================================

/// Discount percentage under [`DiscountRules::STANDARD`].
#[inline]
pub fn calculate_discount(item_type: ItemType, quantity: u32) -> u32 {
    DiscountRules::STANDARD.discount(item_type, quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_has_no_discount() {
        assert_eq!(calculate_discount(ItemType::Regular, 1), 0);
        assert_eq!(calculate_discount(ItemType::Regular, 99), 0);
    }

    #[test]
    fn test_second_is_half_off() {
        for quantity in 2..100 {
            assert_eq!(calculate_discount(ItemType::Second, quantity), 50);
        }
    }

    #[test]
    fn test_sale_is_capped() {
        for quantity in 1..100 {
            assert_eq!(calculate_discount(ItemType::Sale, quantity), 80);
        }
    }

    #[test]
    fn test_discount_type_below_first_step() {
        for quantity in 1..10 {
            assert_eq!(calculate_discount(ItemType::Discount, quantity), 10);
        }
    }

    #[test]
    fn test_discount_type_steps() {
        assert_eq!(calculate_discount(ItemType::Discount, 10), 20);
        assert_eq!(calculate_discount(ItemType::Discount, 15), 20);
        assert_eq!(calculate_discount(ItemType::Discount, 19), 20);
        assert_eq!(calculate_discount(ItemType::Discount, 20), 30);
        assert_eq!(calculate_discount(ItemType::Discount, 39), 40);
    }

    #[test]
    fn test_discount_type_component_cap() {
        // 10 + 10 × 4 = 50 reaches the cap exactly
        assert_eq!(calculate_discount(ItemType::Discount, 40), 50);
        assert_eq!(calculate_discount(ItemType::Discount, 44), 50);
        assert_eq!(calculate_discount(ItemType::Discount, 99), 50);
    }

    #[test]
    fn test_bulk_discount() {
        assert_eq!(calculate_discount(ItemType::Regular, 100), 10);
        assert_eq!(calculate_discount(ItemType::Regular, 250), 20);
        assert_eq!(calculate_discount(ItemType::Second, 385), 80);
        assert_eq!(calculate_discount(ItemType::Second, 150), 60);
        // type component 50 (capped) + bulk 10
        assert_eq!(calculate_discount(ItemType::Discount, 105), 60);
    }

    #[test]
    fn test_total_cap() {
        assert_eq!(calculate_discount(ItemType::Discount, 1000), 80);
        assert_eq!(calculate_discount(ItemType::Regular, 1000), 80);
        assert_eq!(calculate_discount(ItemType::Sale, 1000), 80);
    }

    #[test]
    fn test_out_of_contract_quantities() {
        assert_eq!(calculate_discount(ItemType::Regular, 0), 0);
        assert_eq!(calculate_discount(ItemType::Discount, 0), 10);
        assert_eq!(calculate_discount(ItemType::Discount, u32::MAX), 80);
        assert_eq!(calculate_discount(ItemType::Regular, u32::MAX), 80);
    }

    #[test]
    fn test_components() {
        let rules = DiscountRules::STANDARD;
        assert_eq!(rules.type_component(ItemType::Discount, 1000), 50);
        assert_eq!(rules.bulk_component(1000), 100);
        assert_eq!(rules.type_component(ItemType::Sale, 5), 90);
        assert_eq!(rules.bulk_component(99), 0);
    }

    #[test]
    fn test_zero_steps_disable_escalation() {
        let rules = DiscountRules {
            discount_step_quantity: 0,
            bulk_step_quantity: 0,
            ..DiscountRules::STANDARD
        };
        assert_eq!(rules.discount(ItemType::Discount, 500), 10);
        assert_eq!(rules.discount(ItemType::Regular, 500), 0);
    }

    #[test]
    fn test_discount_for_item() {
        let item = Item::new("Batteries", 7.5, 15, ItemType::Discount).unwrap();
        assert_eq!(DiscountRules::default().discount_for(&item), 20);
        assert_eq!(item.discount(), 20);
    }
}
