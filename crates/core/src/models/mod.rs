//! Shared domain models.

mod money;

pub use money::Money;

/// Longest boat name kept, in characters.
pub const MAX_NAME_LEN: usize = 127;

/// Where a boat is kept, together with the detail identifying the spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Moored in a numbered slip.
    Slip(u32),
    /// On land in a lettered bay.
    Land(char),
    /// On a trailer identified by its licence tag.
    Trailer(String),
    /// In a numbered storage space.
    Storage(u32),
}

impl Location {
    /// Kind tag used in the data file.
    ///
    /// Trailers keep the legacy `trailor` spelling so existing files still load.
    pub fn tag(&self) -> &'static str {
        match self {
            Location::Slip(_) => "slip",
            Location::Land(_) => "land",
            Location::Trailer(_) => "trailor",
            Location::Storage(_) => "storage",
        }
    }

    /// Resolve a kind tag and its detail text into a location.
    ///
    /// Tags are matched case-insensitively and without trimming; anything
    /// unrecognised is treated as storage. Numeric details that fail to parse
    /// become zero.
    pub fn from_parts(kind: &str, detail: &str) -> Self {
        if kind.eq_ignore_ascii_case("slip") {
            Location::Slip(leading_number(detail))
        } else if kind.eq_ignore_ascii_case("land") {
            Location::Land(detail.chars().next().unwrap_or(' '))
        } else if kind.eq_ignore_ascii_case("trailor") {
            Location::Trailer(detail.to_string())
        } else {
            if !kind.eq_ignore_ascii_case("storage") {
                tracing::debug!("unknown location kind {kind:?}, defaulting to storage");
            }
            Location::Storage(leading_number(detail))
        }
    }

    /// Detail text as written to the data file.
    pub fn detail(&self) -> String {
        match self {
            Location::Slip(number) | Location::Storage(number) => number.to_string(),
            Location::Land(bay) => bay.to_string(),
            Location::Trailer(tag) => tag.clone(),
        }
    }
}

/// A single boat record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boat {
    /// Boat name; lookups ignore ASCII case.
    pub name: String,
    /// Length in feet, used as the billing multiplier.
    pub length_feet: u32,
    /// Where the boat is kept.
    pub location: Location,
    /// Running balance owed to the marina.
    pub amount_owed: Money,
}

impl Boat {
    /// Create a boat, truncating over-long names to [`MAX_NAME_LEN`] characters.
    pub fn new(
        name: impl Into<String>,
        length_feet: u32,
        location: Location,
        amount_owed: Money,
    ) -> Self {
        let mut name = name.into();
        if let Some((cut, _)) = name.char_indices().nth(MAX_NAME_LEN) {
            name.truncate(cut);
        }
        Self {
            name,
            length_feet,
            location,
            amount_owed,
        }
    }

    /// Whether this boat's name matches `name`, ignoring ASCII case.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Parse the leading unsigned integer of `input`, the way `atoi` would.
///
/// Negative or missing numbers become zero; values past `u32::MAX` saturate.
pub(crate) fn leading_number(input: &str) -> u32 {
    let text = input.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let value = rest
        .chars()
        .map_while(|ch| ch.to_digit(10))
        .fold(0u32, |acc, digit| acc.saturating_mul(10).saturating_add(digit));
    if negative {
        0
    } else {
        value
    }
}
