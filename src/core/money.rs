//! Integer minor-unit money.
//!
//! Amounts are whole minor units (sen for MYR) stored as `i64`. Scaling by a
//! decimal factor goes through [`rust_decimal::Decimal`] and is rounded back
//! to whole minor units, never through floating point.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::currencies::Currency;
use super::error::MoneyError;

/// A monetary amount in minor units with its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    pub const fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Ringgit amount in sen.
    pub const fn myr(amount: i64) -> Self {
        Self::new(amount, Currency::MYR)
    }

    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Parse an integer amount from text, e.g. `"10600"` or `"-25"`.
    ///
    /// See [`parse_amount`] for the accepted forms.
    pub fn parse(text: &str, currency: Currency) -> Result<Self, MoneyError> {
        Ok(Self::new(parse_amount(text)?, currency))
    }

    /// Amount in minor units.
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    pub const fn currency(&self) -> Currency {
        self.currency
    }

    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.amount > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    pub fn is_same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.assert_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| MoneyError::overflow(format!("{self} + {other}")))?;
        Ok(Self::new(amount, self.currency))
    }

    pub fn subtract(&self, other: &Money) -> Result<Money, MoneyError> {
        self.assert_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| MoneyError::overflow(format!("{self} - {other}")))?;
        Ok(Self::new(amount, self.currency))
    }

    pub fn negative(&self) -> Result<Money, MoneyError> {
        let amount = self
            .amount
            .checked_neg()
            .ok_or_else(|| MoneyError::overflow(format!("-({self})")))?;
        Ok(Self::new(amount, self.currency))
    }

    pub fn absolute(&self) -> Result<Money, MoneyError> {
        let amount = self
            .amount
            .checked_abs()
            .ok_or_else(|| MoneyError::overflow(format!("|{self}|")))?;
        Ok(Self::new(amount, self.currency))
    }

    /// Order two amounts of the same currency.
    pub fn compare(&self, other: &Money) -> Result<Ordering, MoneyError> {
        self.assert_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Multiply by a decimal factor, rounding half-up to whole minor units.
    pub fn multiply(&self, factor: Decimal) -> Result<Money, MoneyError> {
        let product = Decimal::from(self.amount)
            .checked_mul(factor)
            .ok_or_else(|| MoneyError::overflow(format!("{self} * {factor}")))?;
        Ok(Self::new(round_to_minor_units(product)?, self.currency))
    }

    /// Divide by a decimal divisor, rounding half-up to whole minor units.
    pub fn divide(&self, divisor: Decimal) -> Result<Money, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::invalid_argument("division by zero"));
        }
        let quotient = Decimal::from(self.amount)
            .checked_div(divisor)
            .ok_or_else(|| MoneyError::overflow(format!("{self} / {divisor}")))?;
        Ok(Self::new(round_to_minor_units(quotient)?, self.currency))
    }

    /// Split the amount proportionally to `ratios`.
    ///
    /// Every share starts at `floor(amount * ratio / sum(ratios))`. The minor
    /// units left over are handed out one at a time to the shares with the
    /// largest fractional part; on a tie the earlier share wins. The shares
    /// always add up to exactly `self.amount()`.
    ///
    /// ```
    /// use duit::core::Money;
    ///
    /// let shares = Money::myr(5).allocate(&[3u32, 7]).unwrap();
    /// assert_eq!(shares, vec![Money::myr(2), Money::myr(3)]);
    /// ```
    pub fn allocate<R>(&self, ratios: &[R]) -> Result<Vec<Money>, MoneyError>
    where
        R: Copy + Into<Decimal>,
    {
        if ratios.is_empty() {
            return Err(MoneyError::invalid_argument(
                "cannot allocate to none, ratios cannot be empty",
            ));
        }

        let ratios: Vec<Decimal> = ratios.iter().map(|&r| r.into()).collect();
        if ratios.iter().any(|r| *r < Decimal::ZERO) {
            return Err(MoneyError::invalid_argument(
                "cannot allocate to none, ratio must be zero or positive",
            ));
        }

        let total = ratios
            .iter()
            .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(*r))
            .ok_or_else(|| MoneyError::overflow("sum of ratios"))?;
        if total <= Decimal::ZERO {
            return Err(MoneyError::invalid_argument(
                "cannot allocate to none, sum of ratios must be greater than zero",
            ));
        }

        let amount = Decimal::from(self.amount);
        let mut shares = Vec::with_capacity(ratios.len());
        let mut fractions = Vec::with_capacity(ratios.len());
        for ratio in &ratios {
            // Scale the ratio down first when amount * ratio exceeds Decimal.
            let exact = match amount.checked_mul(*ratio) {
                Some(product) => product.checked_div(total),
                None => ratio
                    .checked_div(total)
                    .and_then(|weight| amount.checked_mul(weight)),
            }
            .ok_or_else(|| MoneyError::overflow(format!("{self} * {ratio} / {total}")))?;
            let floor = exact.floor();
            shares.push(
                floor
                    .to_i64()
                    .ok_or_else(|| MoneyError::overflow(format!("share {floor}")))?,
            );
            fractions.push(exact - floor);
        }

        // Negative only when a scaled-down weight rounded a share up past
        // an integer; those shares then have the smallest fractions.
        let allocated: i128 = shares.iter().map(|&s| i128::from(s)).sum();
        let remainder = i128::from(self.amount) - allocated;
        let units = usize::try_from(remainder.unsigned_abs())
            .map_err(|_| MoneyError::overflow("allocation remainder"))?;

        let mut order: Vec<usize> = (0..shares.len())
            .filter(|&idx| ratios[idx] > Decimal::ZERO)
            .collect();
        order.sort_by(|&a, &b| fractions[b].cmp(&fractions[a]));
        if remainder >= 0 {
            for &idx in order.iter().cycle().take(units) {
                shares[idx] += 1;
            }
        } else {
            for &idx in order.iter().rev().cycle().take(units) {
                shares[idx] -= 1;
            }
        }

        tracing::debug!(
            amount = self.amount,
            currency = %self.currency,
            targets = shares.len(),
            remainder = units,
            "allocated money by ratios"
        );

        Ok(shares
            .into_iter()
            .map(|share| Self::new(share, self.currency))
            .collect())
    }

    /// Split the amount into `n` near-equal shares.
    ///
    /// The first `amount mod n` shares get one extra minor unit.
    pub fn allocate_to(&self, n: usize) -> Result<Vec<Money>, MoneyError> {
        if n == 0 {
            return Err(MoneyError::invalid_argument(
                "cannot allocate to none, number of targets must be greater than zero",
            ));
        }
        let count = i64::try_from(n)
            .map_err(|_| MoneyError::invalid_argument(format!("too many targets: {n}")))?;

        let base = self.amount.div_euclid(count);
        let extra = self.amount.rem_euclid(count);

        tracing::debug!(
            amount = self.amount,
            currency = %self.currency,
            targets = n,
            remainder = extra,
            "allocated money to targets"
        );

        Ok((0..count)
            .map(|i| Self::new(if i < extra { base + 1 } else { base }, self.currency))
            .collect())
    }

    fn assert_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.is_same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency.to_string(),
                found: other.currency.to_string(),
            })
        }
    }
}

impl PartialOrd for Money {
    /// Amounts in different currencies are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.is_same_currency(other)
            .then(|| self.amount.cmp(&other.amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Parse a whole number of minor units.
///
/// Accepts an optional sign followed by ASCII digits. A fractional part is
/// allowed only when it is all zeros (`"100.00"` is 100).
pub fn parse_amount(text: &str) -> Result<i64, MoneyError> {
    let trimmed = text.trim();
    let (integer, fraction) = match trimmed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (trimmed, None),
    };

    let digits = integer.strip_prefix(['+', '-']).unwrap_or(integer);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(MoneyError::InvalidAmount(format!(
            "'{text}' is not an integer amount"
        )));
    }

    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyError::InvalidAmount(format!(
                "'{text}' is not an integer amount"
            )));
        }
        if fraction.chars().any(|c| c != '0') {
            return Err(MoneyError::InvalidAmount(format!(
                "'{text}' has fractional minor units"
            )));
        }
    }

    integer
        .parse::<i64>()
        .map_err(|_| MoneyError::InvalidAmount(format!("'{text}' is out of range")))
}

fn round_to_minor_units(value: Decimal) -> Result<i64, MoneyError> {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded
        .to_i64()
        .ok_or_else(|| MoneyError::overflow(format!("{rounded} exceeds minor-unit range")))
}
