//! Monthly fees and payments.

use tracing::debug;

use crate::{
    error::FleetError,
    fleet::Fleet,
    models::{Boat, Location, Money},
};

/// Monthly charge per foot of boat length for each kind of location.
pub fn rate_per_foot(location: &Location) -> Money {
    match location {
        Location::Slip(_) => Money::from_cents(1_250),
        Location::Land(_) => Money::from_cents(1_400),
        Location::Trailer(_) => Money::from_cents(2_500),
        Location::Storage(_) => Money::from_cents(1_120),
    }
}

/// One month's charge for `boat`.
pub fn monthly_fee(boat: &Boat) -> Money {
    rate_per_foot(&boat.location).times(boat.length_feet)
}

/// Charge every boat one month's fee.
///
/// There is no record of which months were already billed; each call adds
/// another full month.
pub fn apply_monthly_fees(fleet: &mut Fleet) {
    for boat in fleet.iter_mut() {
        let fee = monthly_fee(boat);
        boat.amount_owed += fee;
    }
    debug!("applied monthly fees to {} boats", fleet.len());
}

/// Take a payment against a boat's balance and return the new balance.
///
/// Payments larger than the balance are rejected without touching the boat.
/// Negative amounts are not rejected and raise the balance.
pub fn apply_payment(boat: &mut Boat, amount: Money) -> Result<Money, FleetError> {
    if amount > boat.amount_owed {
        return Err(FleetError::PaymentExceedsBalance {
            owed: boat.amount_owed,
        });
    }
    boat.amount_owed -= amount;
    Ok(boat.amount_owed)
}
