//! Malaysian GST rate.
//!
//! The rate is fixed at 6%. Amounts are Ringgit, counted in sen.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::Currency;

/// GST rate applied to a tax-exclusive amount.
pub const GST_RATE: Decimal = dec!(0.06);

/// Multiplier turning a tax-exclusive amount into a tax-inclusive one.
pub const GST_INCLUSIVE_FACTOR: Decimal = dec!(1.06);

/// Currency of every [`VatMoney`](super::VatMoney).
pub const VAT_CURRENCY: Currency = Currency::MYR;
