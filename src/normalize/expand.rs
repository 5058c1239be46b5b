//! Text expansion for the address parser.
//!
//! Rewrites abbreviated tokens into full words ("ST" -> "STREET",
//! "NE" -> "NORTHEAST") and numeric ordinals into word form
//! ("1ST" -> "FIRST") so the parser sees a uniform vocabulary. All rules
//! apply to whole tokens only; partial-word corruption cannot occur.

use regex::Regex;
use std::sync::LazyLock;

use crate::normalize::tables::{
    directional_short_form, ordinal_numeric_form, ABBREVIATION_EXPANSIONS, ORDINAL_WORDS,
};

/// First five-digit run inside a postal code value.
static FIVE_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{5}").expect("valid regex"));

/// Numeric ordinal token ("1ST", "22ND", "46TH").
static ORDINAL_NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:ST|ND|RD|TH)$").expect("valid regex"));

/// Expand abbreviated address text into full-word, uppercase form.
///
/// Tolerates trailing commas and periods on tokens: a matched token sheds
/// trailing periods and keeps its commas, so `"AVE,"` becomes `"AVENUE,"`.
/// Unmatched tokens pass through verbatim. Output is collapsed to single
/// spaces and trimmed; empty input yields empty output.
#[must_use]
pub fn expand_address_text(text: &str) -> String {
    let upper = text.to_uppercase();
    let mut expanded: Vec<String> = Vec::new();

    for token in upper.split_whitespace() {
        let stem = token.trim_end_matches(['.', ',']);
        match expand_token(stem) {
            Some(replacement) => {
                let commas: String = token[stem.len()..].chars().filter(|c| *c == ',').collect();
                expanded.push(format!("{replacement}{commas}"));
            }
            None => expanded.push(token.to_string()),
        }
    }

    expanded.join(" ")
}

/// Expand a single bare token, or `None` when no rule applies
fn expand_token(stem: &str) -> Option<String> {
    for (abbreviation, replacement) in ABBREVIATION_EXPANSIONS {
        if stem == *abbreviation {
            return Some((*replacement).to_string());
        }
    }
    ordinal_word_form(stem)
}

/// "1ST".."50TH" to "FIRST".."FIFTIETH"
fn ordinal_word_form(token: &str) -> Option<String> {
    let captures = ORDINAL_NUMERIC_RE.captures(token)?;
    let n: usize = captures[1].parse().ok()?;
    if !(1..=ORDINAL_WORDS.len()).contains(&n) {
        return None;
    }
    // Reject mismatched suffixes like "2ST"
    if ordinal_numeric_form(n) != token {
        return None;
    }
    Some(ORDINAL_WORDS[n - 1].to_string())
}

/// Reduce a postal code value to its five-digit form.
///
/// Falls back to the trimmed, uppercased input when no five-digit run is
/// present; empty input yields empty output.
#[must_use]
pub fn canonicalize_zip(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match FIVE_DIGIT_RE.find(value) {
        Some(m) => m.as_str().to_string(),
        None => value.trim().to_uppercase(),
    }
}

/// Normalize a directional token to its short form; unknown tokens pass
/// through trimmed and uppercased.
#[must_use]
pub fn normalize_direction(token: &str) -> String {
    let cleaned = token.trim().to_uppercase();
    match directional_short_form(&cleaned) {
        Some(short) => short.to_string(),
        None => cleaned,
    }
}

/// Map an ordinal street-name token back to digits.
///
/// Undoes numbered-street expansion so "46TH AVE" and "FORTY-SIXTH AVE"
/// parse to the same street name. Both word form ("FORTY-SIXTH") and raw
/// numeric form ("46TH") map to "46"; other tokens pass through unchanged.
#[must_use]
pub fn ordinal_to_digits(token: &str) -> String {
    if let Some(position) = ORDINAL_WORDS.iter().position(|word| *word == token) {
        return (position + 1).to_string();
    }
    if let Some(captures) = ORDINAL_NUMERIC_RE.captures(token) {
        return captures[1].to_string();
    }
    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_suffix_abbreviations() {
        assert_eq!(expand_address_text("123 Main St"), "123 MAIN STREET");
        assert_eq!(expand_address_text("601 NE 1 Ave"), "601 NORTHEAST 1 AVENUE");
    }

    #[test]
    fn test_whole_token_matching_only() {
        // "STREET" must never match the "ST" rule
        assert_eq!(expand_address_text("123 Main Street"), "123 MAIN STREET");
        // "STONE" contains "ST" but is not a whole-token match
        assert_eq!(expand_address_text("9 Stone Way"), "9 STONE WAY");
    }

    #[test]
    fn test_trailing_punctuation() {
        assert_eq!(expand_address_text("1 Elm Ave., Miami"), "1 ELM AVENUE, MIAMI");
        assert_eq!(expand_address_text("1 Elm Ave,"), "1 ELM AVENUE,");
    }

    #[test]
    fn test_expands_numeric_ordinals() {
        assert_eq!(expand_address_text("74-21 46th Ave"), "74-21 FORTY-SIXTH AVENUE");
        assert_eq!(expand_address_text("100 1st St"), "100 FIRST STREET");
        assert_eq!(expand_address_text("5 21st Ave"), "5 TWENTY-FIRST AVENUE");
    }

    #[test]
    fn test_ordinals_outside_table_pass_through() {
        assert_eq!(expand_address_text("9 51st Ave"), "9 51ST AVENUE");
        // Mismatched suffix is not an ordinal
        assert_eq!(expand_address_text("9 2st Ave"), "9 2ST AVENUE");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(expand_address_text("  123   Main  St  "), "123 MAIN STREET");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(expand_address_text(""), "");
        assert_eq!(expand_address_text("   "), "");
    }

    #[test]
    fn test_canonicalize_zip() {
        assert_eq!(canonicalize_zip("60601-1234"), "60601");
        assert_eq!(canonicalize_zip("33132"), "33132");
        assert_eq!(canonicalize_zip(" abc "), "ABC");
        assert_eq!(canonicalize_zip(""), "");
    }

    #[test]
    fn test_normalize_direction() {
        assert_eq!(normalize_direction("northeast"), "NE");
        assert_eq!(normalize_direction(" N "), "N");
        assert_eq!(normalize_direction("NE"), "NE");
        assert_eq!(normalize_direction("elsewhere"), "ELSEWHERE");
        assert_eq!(normalize_direction(""), "");
    }

    #[test]
    fn test_ordinal_to_digits() {
        assert_eq!(ordinal_to_digits("FIRST"), "1");
        assert_eq!(ordinal_to_digits("FORTY-SIXTH"), "46");
        assert_eq!(ordinal_to_digits("FIFTIETH"), "50");
        assert_eq!(ordinal_to_digits("21ST"), "21");
        assert_eq!(ordinal_to_digits("MAIN"), "MAIN");
    }
}
