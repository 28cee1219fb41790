//! # Error Types
//!
//! Domain-specific error types for shopcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ValidationError  - One field of a line item is out of range           │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  CartError        - Admission failed                                   │
//! │  ├── Validation        (bad item, carries the rejected title)          │
//! │  └── CapacityExceeded  (cart full)                                     │
//! │                                                                         │
//! │  ConfigError      - Promotion table could not be loaded                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers match on [`CartError`] to tell "reject this order line" apart from
//! "open a new cart". Discount calculation has no error path.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// A single field of a line item violates its allowed range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Title is empty or too long.
    #[error("title length {length} is outside {min}..={max} characters")]
    TitleLength {
        length: usize,
        min: usize,
        max: usize,
    },

    /// Price is not strictly between the bounds.
    #[error("price {price} must be greater than {min} and less than {max}")]
    PriceOutOfRange { price: f64, min: f64, max: f64 },

    /// Quantity is below the minimum or above the maximum.
    #[error("quantity {quantity} is outside {min}..={max}")]
    QuantityOutOfRange { quantity: i64, min: i64, max: i64 },

    /// Promotional type name is not one of the four known types.
    #[error("unknown item type '{0}', expected one of: REGULAR, SECOND, SALE, DISCOUNT")]
    UnknownItemType(String),
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::TitleLength { .. } => "title",
            ValidationError::PriceOutOfRange { .. } => "price",
            ValidationError::QuantityOutOfRange { .. } => "quantity",
            ValidationError::UnknownItemType(_) => "type",
        }
    }
}

// =============================================================================
// Cart Error
// =============================================================================

/// Cart admission errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    /// The offered item failed validation; the cart is unchanged.
    #[error("item {title:?} rejected: {source}")]
    Validation {
        title: String,
        #[source]
        source: ValidationError,
    },

    /// The cart already holds `capacity` items.
    ///
    /// ## User Workflow
    /// ```text
    /// add_item (cart.len() == 99)
    ///      │
    ///      ▼
    /// CapacityExceeded { capacity: 99 }
    ///      │
    ///      ▼
    /// Caller starts a new cart for the remaining lines
    /// ```
    #[error("cart cannot hold more than {capacity} items")]
    CapacityExceeded { capacity: usize },
}

impl CartError {
    /// True when the item itself was rejected.
    pub fn is_validation(&self) -> bool {
        matches!(self, CartError::Validation { .. })
    }

    /// True when the cart was full.
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, CartError::CapacityExceeded { .. })
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Errors loading a [`PromotionConfig`](crate::config::PromotionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse promotion config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize promotion config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid promotion config: {0}")]
    Invalid(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result of a single-field validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result of a cart operation.
pub type CartResult<T> = Result<T, CartError>;

/// Result of loading promotion config.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
