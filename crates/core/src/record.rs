//! Comma-separated boat records.
//!
//! A record is `name,length,kind,detail,amountOwed`. Parsing is best effort:
//! missing or malformed fields degrade to zero (or storage for the kind)
//! instead of rejecting the line.

use crate::models::{leading_number, Boat, Location, Money};

/// Parse a single record line.
pub fn parse_record(line: &str) -> Boat {
    let mut fields = line.splitn(5, ',');
    let name = fields.next().unwrap_or_default();
    let length = fields.next().map(leading_number).unwrap_or(0);
    let kind = fields.next().unwrap_or_default();
    let detail = fields.next().unwrap_or_default();
    let owed = fields.next().map(Money::parse_lenient).unwrap_or_default();

    Boat::new(name, length, Location::from_parts(kind, detail), owed)
}

/// Render a boat as a record line, without the trailing newline.
pub fn format_record(boat: &Boat) -> String {
    format!(
        "{},{},{},{},{}",
        boat.name,
        boat.length_feet,
        boat.location.tag(),
        boat.location.detail(),
        boat.amount_owed
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_location_kind() {
        let slip = parse_record("Pier One,20,slip,5,250.00");
        assert_eq!(slip.name, "Pier One");
        assert_eq!(slip.length_feet, 20);
        assert_eq!(slip.location, Location::Slip(5));
        assert_eq!(slip.amount_owed, Money::from_cents(25_000));

        let land = parse_record("Dry Dock,18,LAND,Cove,0");
        assert_eq!(land.location, Location::Land('C'));

        let trailer = parse_record("Roadster,24,trailor,WI 1234,12.5");
        assert_eq!(trailer.location, Location::Trailer("WI 1234".to_string()));
        assert_eq!(trailer.amount_owed, Money::from_cents(1_250));

        let storage = parse_record("Winter,30,storage,14,99.99");
        assert_eq!(storage.location, Location::Storage(14));
    }

    #[test]
    fn malformed_fields_degrade_to_defaults() {
        let boat = parse_record("Mystery,long,dock,x,lots");
        assert_eq!(boat.name, "Mystery");
        assert_eq!(boat.length_feet, 0);
        assert_eq!(boat.location, Location::Storage(0));
        assert_eq!(boat.amount_owed, Money::ZERO);
    }

    #[test]
    fn missing_fields_degrade_to_defaults() {
        let boat = parse_record("Lonely");
        assert_eq!(boat.name, "Lonely");
        assert_eq!(boat.length_feet, 0);
        assert_eq!(boat.location, Location::Storage(0));
        assert_eq!(boat.amount_owed, Money::ZERO);
    }

    #[test]
    fn formats_with_legacy_trailer_tag_and_two_decimals() {
        let boat = Boat::new(
            "Roadster",
            24,
            Location::Trailer("ABC".to_string()),
            Money::from_cents(1_250),
        );
        assert_eq!(format_record(&boat), "Roadster,24,trailor,ABC,12.50");
    }

    #[test]
    fn formatted_records_parse_back() {
        let boats = [
            Boat::new("A", 10, Location::Slip(7), Money::from_cents(100)),
            Boat::new("B", 11, Location::Land('Q'), Money::from_cents(-250)),
            Boat::new("C", 12, Location::Trailer("T-1".to_string()), Money::ZERO),
            Boat::new("D", 13, Location::Storage(40), Money::from_cents(123_456)),
        ];
        for boat in boats {
            assert_eq!(parse_record(&format_record(&boat)), boat);
        }
    }
}
