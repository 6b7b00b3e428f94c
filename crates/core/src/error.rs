//! Recoverable fleet operation failures.

use thiserror::Error;

use crate::models::Money;

/// Outcomes of fleet operations that are reported to the user and leave
/// state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    /// The fleet already holds its configured maximum number of boats.
    #[error("marina is full ({capacity} boats)")]
    CapacityExceeded {
        /// Configured capacity of the fleet.
        capacity: usize,
    },
    /// No boat matches the requested name.
    #[error("no boat named {name:?}")]
    NotFound {
        /// Name that was searched for.
        name: String,
    },
    /// The payment is larger than the outstanding balance.
    #[error("payment exceeds amount owed (${owed})")]
    PaymentExceedsBalance {
        /// Balance at the time of the rejected payment.
        owed: Money,
    },
}
