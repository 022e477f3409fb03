use crate::shopping::constants::{NAME_VARIANTS, PREPARATION_METHODS, PRIORITY_EXACT, PRIORITY_PREFIXES};
use crate::shopping::matching::exact_variant;

/// Map a free-text ingredient name to its grouping key.
///
/// Precedence: dairy prefixes, exact variant match, canonical name followed by
/// a preparation method, and finally the lowercased name itself.
pub fn normalize_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();

    if let Some(canonical) = priority_match(&lowered) {
        return canonical.to_string();
    }

    if let Some(canonical) = exact_variant(NAME_VARIANTS, lowered.as_str()) {
        return canonical.to_string();
    }

    if let Some(canonical) = preparation_match(&lowered) {
        return canonical.to_string();
    }

    lowered
}

fn priority_match(lowered: &str) -> Option<&'static str> {
    PRIORITY_PREFIXES
        .iter()
        .find(|(prefix, _)| lowered.starts_with(prefix))
        .or_else(|| PRIORITY_EXACT.iter().find(|(exact, _)| lowered == *exact))
        .map(|(_, canonical)| *canonical)
}

/// Longest canonical name that prefixes `lowered` and is followed by a preparation method.
fn preparation_match(lowered: &str) -> Option<&'static str> {
    NAME_VARIANTS
        .iter()
        .map(|(canonical, _)| *canonical)
        .filter(|canonical| {
            lowered
                .strip_prefix(canonical)
                .and_then(|rest| rest.strip_prefix(' '))
                .is_some_and(is_preparation)
        })
        .max_by_key(|canonical| canonical.len())
}

/// The remainder starts with a preparation method, optionally followed by more words.
fn is_preparation(remainder: &str) -> bool {
    let remainder = remainder.trim();
    PREPARATION_METHODS.iter().any(|method| {
        remainder == *method
            || remainder
                .strip_prefix(method)
                .is_some_and(|rest| rest.starts_with(' ') || rest.starts_with(','))
    })
}
