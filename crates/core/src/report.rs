//! Fixed-width inventory report lines.

use crate::models::{Boat, Location};

/// Heading printed above the inventory lines.
pub const REPORT_HEADING: &str = "Fleet Report:";

/// Format one boat as a fixed-width inventory line.
pub fn inventory_line(boat: &Boat) -> String {
    let location = match &boat.location {
        Location::Slip(number) => format!("   slip   # {number:>2}   "),
        Location::Land(bay) => format!("   land      {bay}   "),
        Location::Trailer(tag) => format!("trailor {tag:>6}   "),
        Location::Storage(number) => format!("storage   # {number:>2}   "),
    };
    format!(
        "{:<21} {:>2}' {location}Owes ${:>7}",
        boat.name, boat.length_feet, boat.amount_owed
    )
}
