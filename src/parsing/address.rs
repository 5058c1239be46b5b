//! Component extraction from expanded address text.

use regex::Regex;
use std::sync::LazyLock;

use crate::core::components::AddressComponents;
use crate::normalize::expand::{
    canonicalize_zip, expand_address_text, normalize_direction, ordinal_to_digits,
};
use crate::normalize::tables::{
    directional_short_form, is_primary_suffix, is_state_abbreviation, is_unit_marker,
};

/// Five-digit or zip+4 postal code token.
static ZIP_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(?:-\d{4})?$").expect("valid regex"));

/// Leading house number with optional hyphen/slash suffix and a single
/// trailing letter ("601", "74-21", "12/3", "123A"); the second capture is
/// any attached remainder text.
static HOUSE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:[-/]\d+)?[A-Z]?)(.*)$").expect("valid regex"));

/// Short alphanumeric unit value following a unit marker: digits, digit
/// plus letter, letter plus digits, slash-separated digits, or a single
/// letter.
static UNIT_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:#?\d+(?:[-/]\d+)?[A-Z]?|[A-Z]\d+|\d+/\d+|[A-Z])$").expect("valid regex")
});

/// Parse a raw address string into normalized components.
///
/// Deterministic, side-effect-free and total: empty or unparseable input
/// yields an all-empty component set, never an error. Extraction passes run
/// in a strict order (postal code, state, unit, house number, directional,
/// street suffix) and each pass removes the tokens it claims so later
/// passes cannot re-consume them.
#[must_use]
pub fn parse_address(text: &str) -> AddressComponents {
    let expanded = expand_address_text(text);
    let mut tokens: Vec<String> = expanded
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    if tokens.is_empty() {
        return AddressComponents::default();
    }

    let postal_code = extract_postal_code(&mut tokens);
    let state = extract_state(&mut tokens);
    let unit = extract_unit(&mut tokens);
    let number = extract_house_number(&mut tokens);

    let mut directional = String::new();
    if let Some(first) = tokens.first() {
        if let Some(short) = directional_short_form(first) {
            directional = short.to_string();
            tokens.remove(0);
        }
    }

    let mut suffix = String::new();
    let (street_tokens, city_tokens) = match tokens.iter().position(|t| is_primary_suffix(t)) {
        Some(idx) => {
            suffix = tokens[idx].clone();
            (tokens[..idx].to_vec(), tokens[idx + 1..].to_vec())
        }
        None => (tokens, Vec::new()),
    };

    let street_name = street_tokens
        .iter()
        .map(|token| ordinal_to_digits(token))
        .collect::<Vec<_>>()
        .join(" ");

    AddressComponents {
        street_number: number,
        street_direction: normalize_direction(&directional),
        street_name,
        street_suffix: suffix,
        unit,
        city: city_tokens.join(" "),
        state,
        postal_code,
    }
}

/// Right-to-left scan for the first postal code token; removed and
/// canonicalized to its five-digit prefix.
fn extract_postal_code(tokens: &mut Vec<String>) -> String {
    for idx in (0..tokens.len()).rev() {
        if ZIP_CODE_RE.is_match(&tokens[idx]) {
            let token = tokens.remove(idx);
            return canonicalize_zip(&token);
        }
    }
    String::new()
}

/// Right-to-left scan for a recognized state abbreviation.
///
/// Directionals take precedence: a token like "NE" that is both a state and
/// a directional short form is never claimed here.
fn extract_state(tokens: &mut Vec<String>) -> String {
    for idx in (0..tokens.len()).rev() {
        let token = &tokens[idx];
        if is_state_abbreviation(token) && directional_short_form(token).is_none() {
            return tokens.remove(idx);
        }
    }
    String::new()
}

/// Left-to-right scan for the first unit marker, then greedy consumption of
/// following markers and short unit values; the whole span is removed.
fn extract_unit(tokens: &mut Vec<String>) -> String {
    let Some(start) = tokens
        .iter()
        .position(|t| is_unit_marker(t) || t.starts_with('#'))
    else {
        return String::new();
    };

    let mut end = start + 1;
    while end < tokens.len() {
        let token = &tokens[end];
        if is_unit_marker(token) || token.starts_with('#') || UNIT_VALUE_RE.is_match(token) {
            end += 1;
        } else {
            break;
        }
    }

    tokens
        .drain(start..end)
        .collect::<Vec<_>>()
        .join(" ")
}

/// House number from the now-first token only; any attached remainder text
/// is split back into the token stream.
fn extract_house_number(tokens: &mut Vec<String>) -> String {
    let Some(first) = tokens.first().cloned() else {
        return String::new();
    };
    let Some(captures) = HOUSE_NUMBER_RE.captures(&first) else {
        return String::new();
    };

    let number = captures[1].to_string();
    let remainder = captures[2].trim().to_string();
    if remainder.is_empty() {
        tokens.remove(0);
    } else {
        tokens[0] = remainder;
    }
    number
}
