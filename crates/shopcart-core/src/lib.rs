//! # shopcart-core: Pure Business Logic for Shopcart
//!
//! This crate holds the cart admission rules and the promotional discount
//! table as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Order Processing Flow                            │
//! │                                                                         │
//! │   caller builds line ──► Cart::add_item ──► Cart::calculate_discount   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             ★ shopcart-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │   cart    │  │ discount  │  │ validation│  │   │
//! │  │   │   Item    │  │   Cart    │  │   Rules   │  │   rules   │  │   │
//! │  │   │  ItemType │  │ (99 max)  │  │  0..=80 % │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - Line items and promotional types
//! - [`cart`] - Fixed-capacity cart with validated admission
//! - [`discount`] - Tiered discount rules
//! - [`config`] - TOML-loadable promotion table
//! - [`error`] - Domain error types
//! - [`validation`] - Per-field business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::{Cart, ItemType};
//!
//! let mut cart = Cart::new();
//! cart.add_item("Paper towels", 4.99, 15, ItemType::Discount).unwrap();
//!
//! let line = &cart.items()[0];
//! assert_eq!(Cart::calculate_discount(line), 20);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod config;
pub mod discount;
pub mod error;
pub mod item;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use config::PromotionConfig;
pub use discount::{calculate_discount, DiscountRules};
pub use error::{CartError, CartResult, ConfigError, ValidationError};
pub use item::{Item, ItemDraft, ItemType};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items a single cart can hold.
pub const MAX_CART_ITEMS: usize = 99;

/// Shortest allowed item title, in characters.
pub const MIN_TITLE_LEN: usize = 1;

/// Longest allowed item title, in characters.
pub const MAX_TITLE_LEN: usize = 32;

/// Smallest quantity for a single line.
pub const MIN_ITEM_QUANTITY: i64 = 1;

/// Largest quantity for a single line.
///
/// ## Business Reason
/// Keeps bulk orders within what the discount table was designed for.
pub const MAX_ITEM_QUANTITY: i64 = 1000;

/// Exclusive upper bound for a unit price. The lower bound (exclusive) is zero.
pub const MAX_ITEM_PRICE: f64 = 1000.0;
