use thiserror::Error;

/// Errors that can occur during money construction or arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MoneyError {
    /// An operation received an argument it cannot work with
    /// (no allocation targets, negative ratios, zero divisor).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Amount text is not a whole number of minor units.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Currency code is not a known ISO 4217 code.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    /// Arithmetic between two different currencies.
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        expected: String,
        /// Currency of the right-hand operand.
        found: String,
    },

    /// Result does not fit into the minor-unit range.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
}

impl MoneyError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn overflow(message: impl Into<String>) -> Self {
        Self::Overflow(message.into())
    }
}
