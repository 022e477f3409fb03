//! Table-driven string matching shared by the unit, name and category lookups.

/// Return the key whose pattern list contains `needle` exactly.
pub fn exact_variant<K: Copy>(table: &[(K, &[&str])], needle: &str) -> Option<K> {
    table
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| *p == needle))
        .map(|(key, _)| *key)
}

/// Return the first key with a pattern contained in `haystack`.
pub fn first_containing<K: Copy>(table: &[(K, &[&str])], haystack: &str) -> Option<K> {
    table
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| haystack.contains(p)))
        .map(|(key, _)| *key)
}

/// Return the value of the first entry whose key is contained in `haystack`.
pub fn first_substring<V: Copy>(table: &[(&str, V)], haystack: &str) -> Option<V> {
    table
        .iter()
        .find(|(key, _)| haystack.contains(key))
        .map(|(_, value)| *value)
}

/// Lowercase and strip Spanish diacritics (ñ is kept).
pub fn fold_accents(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(&str, &[&str])] = &[("a", &["uno", "one"]), ("b", &["dos", "uno y dos"])];

    #[test]
    fn test_exact_variant() {
        assert_eq!(exact_variant(TABLE, "one"), Some("a"));
        assert_eq!(exact_variant(TABLE, "uno y dos"), Some("b"));
        assert_eq!(exact_variant(TABLE, "tres"), None);
    }

    #[test]
    fn test_first_containing_respects_order() {
        // "uno y dos" contains both "uno" and "dos"; the first row wins
        assert_eq!(first_containing(TABLE, "uno y dos"), Some("a"));
        assert_eq!(first_containing(TABLE, "solo dos"), Some("b"));
        assert_eq!(first_containing(TABLE, "nada"), None);
    }

    #[test]
    fn test_first_substring() {
        let weights: &[(&str, f64)] = &[("papa", 200.0), ("ajo", 5.0)];
        assert_eq!(first_substring(weights, "papa cambray"), Some(200.0));
        assert_eq!(first_substring(weights, "diente de ajo"), Some(5.0));
        assert_eq!(first_substring(weights, "pepino"), None);
    }

    #[test]
    fn test_fold_accents() {
        assert_eq!(fold_accents("Cucharadíta"), "cucharadita");
        assert_eq!(fold_accents("Champiñón"), "champiñon");
    }
}
