//! # duit
//!
//! Malaysian Ringgit money with GST/VAT support.
//!
//! Amounts are whole sen (`i64`). Tax and allocation math goes through
//! [`rust_decimal::Decimal`] and is rounded half-up back to whole sen, never
//! through floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use duit::vat::VatMoney;
//!
//! // RM 106.00 paid at the till, GST included
//! let receipt = VatMoney::after_vat(10600).unwrap();
//! assert_eq!(receipt.amount(), 10000);
//! assert_eq!(receipt.vat_amount().unwrap(), 600);
//!
//! // Share it 2:1
//! let shares = receipt.allocate_with_vat(&[2u32, 1]).unwrap();
//! assert_eq!(shares.len(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | `Money` primitive, currencies, allocation |
//! | `vat` (default) | `VatMoney` with the fixed 6% GST rate |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "vat")]
pub mod vat;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
