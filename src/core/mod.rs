//! Minor-unit money primitive.
//!
//! Integer amounts tagged with an ISO 4217 currency, with checked
//! arithmetic, half-up decimal scaling and exact proportional allocation.

mod currencies;
mod error;
mod money;

pub use currencies::*;
pub use error::*;
pub use money::*;
