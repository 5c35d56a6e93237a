//! Ringgit amounts with optional GST.

use std::ops::Deref;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rate::{GST_INCLUSIVE_FACTOR, GST_RATE, VAT_CURRENCY};
use crate::core::{Money, MoneyError, parse_amount};

/// A Ringgit amount that knows whether GST applies to it.
///
/// The wrapped [`Money`] is always the tax-exclusive base. Whether GST is
/// added on top is decided by a flag that can be switched on and off; the
/// base amount itself never changes.
///
/// Every [`Money`] operation is available on `VatMoney` through `Deref` and
/// works on the tax-exclusive base:
///
/// ```
/// use duit::vat::VatMoney;
///
/// let price = VatMoney::before_vat(10000);
/// assert_eq!(price.amount_with_vat().unwrap(), 10600);
/// assert_eq!(price.vat_amount().unwrap(), 600);
///
/// // forwarded to the base amount
/// assert_eq!(price.amount(), 10000);
/// assert!(price.is_positive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatMoney {
    money: Money,
    vat: bool,
}

impl VatMoney {
    /// Wrap a tax-exclusive amount with GST disabled.
    pub const fn without_vat(amount: i64) -> Self {
        Self {
            money: Money::new(amount, VAT_CURRENCY),
            vat: false,
        }
    }

    /// Wrap a tax-exclusive amount with GST enabled.
    pub const fn before_vat(amount: i64) -> Self {
        Self {
            money: Money::new(amount, VAT_CURRENCY),
            vat: true,
        }
    }

    /// Build from a tax-inclusive amount.
    ///
    /// The base is recovered by dividing by 1.06 and rounding half-up, so
    /// `after_vat(x).amount_with_vat()` may differ from `x` by one sen.
    pub fn after_vat(amount: i64) -> Result<Self, MoneyError> {
        let base = Money::new(amount, VAT_CURRENCY).divide(GST_INCLUSIVE_FACTOR)?;
        tracing::trace!(inclusive = amount, base = base.amount(), "recovered GST base");
        Ok(Self {
            money: base,
            vat: true,
        })
    }

    /// [`without_vat`](Self::without_vat) for an amount given as text.
    pub fn parse_without_vat(amount: &str) -> Result<Self, MoneyError> {
        Ok(Self::without_vat(parse_amount(amount)?))
    }

    /// [`before_vat`](Self::before_vat) for an amount given as text.
    pub fn parse_before_vat(amount: &str) -> Result<Self, MoneyError> {
        Ok(Self::before_vat(parse_amount(amount)?))
    }

    /// [`after_vat`](Self::after_vat) for an amount given as text.
    pub fn parse_after_vat(amount: &str) -> Result<Self, MoneyError> {
        Self::after_vat(parse_amount(amount)?)
    }

    pub fn enable_vat(&mut self) -> &mut Self {
        self.vat = true;
        self
    }

    pub fn disable_vat(&mut self) -> &mut Self {
        self.vat = false;
        self
    }

    pub const fn is_vat_enabled(&self) -> bool {
        self.vat
    }

    /// The tax-exclusive base.
    pub const fn money(&self) -> Money {
        self.money
    }

    /// GST on the base, or 0 when GST is disabled.
    pub fn vat_amount(&self) -> Result<i64, MoneyError> {
        if !self.vat {
            return Ok(0);
        }
        Ok(self.money.multiply(GST_RATE)?.amount())
    }

    /// The amount payable: base plus GST when enabled, else the base.
    pub fn amount_with_vat(&self) -> Result<i64, MoneyError> {
        if !self.vat {
            return Ok(self.money.amount());
        }
        Ok(self.money.multiply(GST_INCLUSIVE_FACTOR)?.amount())
    }

    /// Split the payable amount by `ratios`.
    ///
    /// Each share is a tax-inclusive slice of [`amount_with_vat`](Self::amount_with_vat)
    /// turned back into a GST-enabled value with [`after_vat`](Self::after_vat).
    /// The result has one entry per ratio, in order.
    pub fn allocate_with_vat<R>(&self, ratios: &[R]) -> Result<Vec<VatMoney>, MoneyError>
    where
        R: Copy + Into<Decimal>,
    {
        let shares = self.inclusive_total()?.allocate(ratios)?;
        Self::from_inclusive_shares(shares)
    }

    /// Split the payable amount into `n` near-equal GST-enabled shares.
    ///
    /// Fails with [`MoneyError::InvalidArgument`] when `n` is zero.
    pub fn allocate_with_vat_to(&self, n: usize) -> Result<Vec<VatMoney>, MoneyError> {
        let shares = self.inclusive_total()?.allocate_to(n)?;
        Self::from_inclusive_shares(shares)
    }

    fn inclusive_total(&self) -> Result<Money, MoneyError> {
        Ok(Money::new(self.amount_with_vat()?, VAT_CURRENCY))
    }

    fn from_inclusive_shares(shares: Vec<Money>) -> Result<Vec<VatMoney>, MoneyError> {
        shares
            .into_iter()
            .map(|share| Self::after_vat(share.amount()))
            .collect()
    }
}

impl Deref for VatMoney {
    type Target = Money;

    fn deref(&self) -> &Money {
        &self.money
    }
}

impl From<VatMoney> for Money {
    fn from(value: VatMoney) -> Self {
        value.money
    }
}
