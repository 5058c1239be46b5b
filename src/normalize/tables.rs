//! Static lookup tables for US address vocabulary.
//!
//! All tables are process-wide immutable constants. Lookups operate on
//! uppercase tokens; callers are expected to uppercase first (the expander
//! does this for the whole input).

/// Two-letter USPS state abbreviations, DC included.
pub const US_STATE_ABBREVIATIONS: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC",
];

/// Road-type tokens that separate street name from city, both short and
/// expanded forms.
pub const PRIMARY_STREET_SUFFIXES: &[&str] = &[
    "ALLEY", "ALLY", "AVENUE", "AVE", "BEND", "BLVD", "BOULEVARD", "CIRCLE", "CIR", "COURT",
    "CT", "DRIVE", "DR", "FREEWAY", "FWY", "HIGHWAY", "HWY", "LANE", "LN", "LOOP", "PARKWAY",
    "PKWY", "PLACE", "PL", "ROAD", "RD", "STREET", "ST", "TERRACE", "TER", "TRAIL", "TRL", "WAY",
];

/// Tokens that introduce a unit designation.
pub const UNIT_MARKERS: &[&str] = &[
    "APT", "APARTMENT", "UNIT", "STE", "SUITE", "#", "RM", "ROOM", "FLOOR", "FL", "LEVEL",
    "BLDG", "BUILDING", "PH", "PENTHOUSE",
];

/// Whole-token abbreviation expansions applied by the text expander.
///
/// Ordered as applied; every rule matches whole tokens only, so `STREET`
/// can never be corrupted by the `ST` rule.
pub const ABBREVIATION_EXPANSIONS: &[(&str, &str)] = &[
    ("ST", "STREET"),
    ("AVE", "AVENUE"),
    ("RD", "ROAD"),
    ("BLVD", "BOULEVARD"),
    ("DR", "DRIVE"),
    ("LN", "LANE"),
    ("CT", "COURT"),
    ("PKY", "PARKWAY"),
    ("PKWY", "PARKWAY"),
    ("HWY", "HIGHWAY"),
    ("PL", "PLACE"),
    ("SQ", "SQUARE"),
    ("CIR", "CIRCLE"),
    ("TER", "TERRACE"),
    ("APT", "APARTMENT"),
    ("STE", "SUITE"),
    ("N", "NORTH"),
    ("S", "SOUTH"),
    ("E", "EAST"),
    ("W", "WEST"),
    ("NE", "NORTHEAST"),
    ("NW", "NORTHWEST"),
    ("SE", "SOUTHEAST"),
    ("SW", "SOUTHWEST"),
];

/// Ordinal street-number words, index 0 = FIRST through index 49 = FIFTIETH.
pub const ORDINAL_WORDS: &[&str] = &[
    "FIRST",
    "SECOND",
    "THIRD",
    "FOURTH",
    "FIFTH",
    "SIXTH",
    "SEVENTH",
    "EIGHTH",
    "NINTH",
    "TENTH",
    "ELEVENTH",
    "TWELFTH",
    "THIRTEENTH",
    "FOURTEENTH",
    "FIFTEENTH",
    "SIXTEENTH",
    "SEVENTEENTH",
    "EIGHTEENTH",
    "NINETEENTH",
    "TWENTIETH",
    "TWENTY-FIRST",
    "TWENTY-SECOND",
    "TWENTY-THIRD",
    "TWENTY-FOURTH",
    "TWENTY-FIFTH",
    "TWENTY-SIXTH",
    "TWENTY-SEVENTH",
    "TWENTY-EIGHTH",
    "TWENTY-NINTH",
    "THIRTIETH",
    "THIRTY-FIRST",
    "THIRTY-SECOND",
    "THIRTY-THIRD",
    "THIRTY-FOURTH",
    "THIRTY-FIFTH",
    "THIRTY-SIXTH",
    "THIRTY-SEVENTH",
    "THIRTY-EIGHTH",
    "THIRTY-NINTH",
    "FORTIETH",
    "FORTY-FIRST",
    "FORTY-SECOND",
    "FORTY-THIRD",
    "FORTY-FOURTH",
    "FORTY-FIFTH",
    "FORTY-SIXTH",
    "FORTY-SEVENTH",
    "FORTY-EIGHTH",
    "FORTY-NINTH",
    "FIFTIETH",
];

/// Check whether a token is a recognized USPS state abbreviation
#[must_use]
pub fn is_state_abbreviation(token: &str) -> bool {
    US_STATE_ABBREVIATIONS.contains(&token)
}

/// Check whether a token is a primary street suffix
#[must_use]
pub fn is_primary_suffix(token: &str) -> bool {
    PRIMARY_STREET_SUFFIXES.contains(&token)
}

/// Check whether a token introduces a unit designation
#[must_use]
pub fn is_unit_marker(token: &str) -> bool {
    UNIT_MARKERS.contains(&token)
}

/// Map a directional token (short or expanded) to its short form
#[must_use]
pub fn directional_short_form(token: &str) -> Option<&'static str> {
    match token {
        "N" | "NORTH" => Some("N"),
        "S" | "SOUTH" => Some("S"),
        "E" | "EAST" => Some("E"),
        "W" | "WEST" => Some("W"),
        "NE" | "NORTHEAST" => Some("NE"),
        "NW" | "NORTHWEST" => Some("NW"),
        "SE" | "SOUTHEAST" => Some("SE"),
        "SW" | "SOUTHWEST" => Some("SW"),
        _ => None,
    }
}

/// Numeric form of an ordinal, 1-based ("1ST", "22ND", "46TH").
///
/// Only defined for 1..=50, the range covered by [`ORDINAL_WORDS`].
#[must_use]
pub fn ordinal_numeric_form(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "TH",
        (1, _) => "ST",
        (2, _) => "ND",
        (3, _) => "RD",
        _ => "TH",
    };
    format!("{n}{suffix}")
}
