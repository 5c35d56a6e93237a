//! Ringgit amounts with Malaysian GST.
//!
//! [`VatMoney`] keeps a tax-exclusive base and a GST flag, and splits
//! tax-inclusive totals without losing a single sen.
//!
//! # Example
//!
//! ```
//! use duit::vat::*;
//!
//! // Price quoted before tax
//! let dinner = VatMoney::before_vat(10000);
//! assert_eq!(dinner.amount_with_vat().unwrap(), 10600);
//!
//! // Split the bill three ways, each share keeps its GST
//! let shares = dinner.allocate_with_vat_to(3).unwrap();
//! let paid: i64 = shares.iter().map(|s| s.amount_with_vat().unwrap()).sum();
//! assert!((paid - 10600).abs() <= 3);
//! ```

mod myr;
mod rate;

pub use myr::VatMoney;
pub use rate::{GST_INCLUSIVE_FACTOR, GST_RATE, VAT_CURRENCY};
