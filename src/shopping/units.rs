use crate::shopping::constants::UNIT_ALIASES;
use crate::shopping::matching::{exact_variant, fold_accents};

/// Map a unit spelling to its canonical code.
///
/// Matching is case-insensitive and ignores accents and a trailing period
/// ("Cdas." -> "cda"). Unknown units pass through lowercased.
pub fn normalize_unit(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let folded = fold_accents(lowered.trim_end_matches('.'));

    match exact_variant(UNIT_ALIASES, &folded) {
        Some(code) => code.to_string(),
        None => lowered,
    }
}

/// Two quantities can be summed only when their canonical units agree.
pub fn units_match(a: &str, b: &str) -> bool {
    normalize_unit(a) == normalize_unit(b)
}
