use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shopping::constants::CATEGORY_KEYWORDS;
use crate::shopping::matching::first_containing;

/// Food groups used to organize the shopping list, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Verduras")]
    Vegetables,
    #[serde(rename = "Alimentos de origen animal")]
    AnimalOrigin,
    #[serde(rename = "Frutas")]
    Fruits,
    #[serde(rename = "Grasas sin proteína")]
    FatsWithoutProtein,
    #[serde(rename = "Cereales y tubérculos")]
    GrainsAndTubers,
    #[serde(rename = "Leguminosas")]
    Legumes,
    #[serde(rename = "Grasas con proteína")]
    FatsWithProtein,
    #[serde(rename = "Otros ingredientes")]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vegetables => "Verduras",
            Category::AnimalOrigin => "Alimentos de origen animal",
            Category::Fruits => "Frutas",
            Category::FatsWithoutProtein => "Grasas sin proteína",
            Category::GrainsAndTubers => "Cereales y tubérculos",
            Category::Legumes => "Leguminosas",
            Category::FatsWithProtein => "Grasas con proteína",
            Category::Other => "Otros ingredientes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assign an ingredient name to a food group.
///
/// Keyword containment, first group in declaration order wins; no match
/// falls back to `Category::Other`.
pub fn classify(name: &str) -> Category {
    let lowered = name.trim().to_lowercase();
    first_containing(CATEGORY_KEYWORDS, &lowered).unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_basic_groups() {
        assert_eq!(classify("Pechuga de pollo"), Category::AnimalOrigin);
        assert_eq!(classify("cebolla"), Category::Vegetables);
        assert_eq!(classify("Manzana"), Category::Fruits);
        assert_eq!(classify("aceite de oliva"), Category::FatsWithoutProtein);
        assert_eq!(classify("avena"), Category::GrainsAndTubers);
        assert_eq!(classify("Lentejas"), Category::Legumes);
        assert_eq!(classify("almendra"), Category::FatsWithProtein);
    }

    #[test]
    fn test_catch_all() {
        assert_eq!(classify("sal"), Category::Other);
        assert_eq!(classify("canela"), Category::Other);
    }

    #[test]
    fn test_declaration_order_is_priority() {
        // "papaya" contains "papa", but fruits are checked before grains
        assert_eq!(classify("papaya"), Category::Fruits);
        assert_eq!(classify("papa"), Category::GrainsAndTubers);
        // "queso panela" contains "pan"; animal-origin comes first
        assert_eq!(classify("queso panela"), Category::AnimalOrigin);
        // substring containment reaches into unrelated words
        assert_eq!(classify("ajonjolí"), Category::Vegetables);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Category::Fruits.to_string(), "Frutas");
        assert_eq!(
            serde_json::to_string(&Category::FatsWithProtein).unwrap(),
            "\"Grasas con proteína\""
        );
        assert!(Category::Vegetables < Category::Other);
    }
}
