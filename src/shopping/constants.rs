//! Heuristic lookup tables for the shopping list.
//!
//! Every table is an ordered slice; matching routines walk them front to back,
//! so earlier entries take priority.

use crate::shopping::categories::Category;

// ─────────────────────────────────────────────────────────────────────────────
// Quantities
// ─────────────────────────────────────────────────────────────────────────────

/// Sentinel for "to taste" quantities.
pub const TO_TASTE: &str = "al gusto";

/// Sentinel for an unmeasured tablespoon ("cucharada sopera").
pub const LOOSE_TABLESPOON: &str = "c.s.";

/// Sentinel for an unmeasured teaspoon ("cucharada cafetera").
pub const LOOSE_TEASPOON: &str = "c.c.";

/// Substrings that mark a quantity as one of the sentinels, checked in order.
pub const SENTINEL_SUBSTRINGS: &[(&str, &[&str])] = &[
    (TO_TASTE, &["gusto"]),
    (LOOSE_TABLESPOON, &["c.s", "cucharada sopera"]),
    (LOOSE_TEASPOON, &["c.c", "cucharada cafetera"]),
];

/// Quantities that are a sentinel only when written alone ("g", but not "120 g").
pub const SENTINEL_BARE: &[(&str, &[&str])] = &[(TO_TASTE, &["g"])];

/// Whole-word tokens that mark a quantity as one of the sentinels.
pub const SENTINEL_WORDS: &[(&str, &[&str])] = &[
    (LOOSE_TABLESPOON, &["cs"]),
    (LOOSE_TEASPOON, &["cc"]),
];

/// Quantity words that cannot be priced besides the sentinels.
pub const PINCH_WORDS: &[&str] = &["pizca", "pizcas", "pinch", "pinches"];

// ─────────────────────────────────────────────────────────────────────────────
// Units
// ─────────────────────────────────────────────────────────────────────────────

pub const UNIT_CUP: &str = "tza";
pub const UNIT_TABLESPOON: &str = "cda";
pub const UNIT_TEASPOON: &str = "cdta";
pub const UNIT_PIECE: &str = "pza";
pub const UNIT_GRAM: &str = "gr";
pub const UNIT_MILLILITER: &str = "ml";
pub const UNIT_LITER: &str = "l";
pub const UNIT_KILOGRAM: &str = "kg";

/// Canonical unit code to accepted spellings (lowercase, accents folded).
pub const UNIT_ALIASES: &[(&str, &[&str])] = &[
    (UNIT_CUP, &["tza", "tzas", "taza", "tazas", "cup", "cups"]),
    (
        UNIT_TABLESPOON,
        &["cda", "cdas", "cucharada", "cucharadas", "tbsp", "tablespoon", "tablespoons"],
    ),
    (
        UNIT_TEASPOON,
        &[
            "cdta", "cdtas", "cdita", "cditas", "cucharadita", "cucharaditas", "tsp", "teaspoon",
            "teaspoons",
        ],
    ),
    (
        UNIT_PIECE,
        &["pza", "pzas", "pz", "pzs", "pieza", "piezas", "piece", "pieces", "unidad", "unidades"],
    ),
    (UNIT_GRAM, &["gr", "grs", "g", "gramo", "gramos", "gram", "grams"]),
    (UNIT_MILLILITER, &["ml", "mililitro", "mililitros", "milliliter", "milliliters"]),
    (UNIT_LITER, &["l", "lt", "lts", "litro", "litros", "liter", "liters"]),
    (
        UNIT_KILOGRAM,
        &["kg", "kgs", "kilo", "kilos", "kilogramo", "kilogramos", "kilogram", "kilograms"],
    ),
];

/// Approximate grams in one cup.
pub const GRAMS_PER_CUP: f64 = 250.0;

/// Approximate grams (or milliliters) in one tablespoon.
pub const GRAMS_PER_TABLESPOON: f64 = 15.0;

/// Approximate grams (or milliliters) in one teaspoon.
pub const GRAMS_PER_TEASPOON: f64 = 5.0;

/// Weight assumed for one piece of an ingredient with no entry in `PIECE_WEIGHTS`.
pub const DEFAULT_PIECE_GRAMS: f64 = 100.0;

/// Approximate grams per piece, matched by substring on the item name.
pub const PIECE_WEIGHTS: &[(&str, f64)] = &[
    ("almendra", 1.0),
    ("nuez", 5.0),
    ("nueces", 5.0),
    ("jitomate", 150.0),
    ("tomate", 150.0),
    ("cebolla", 200.0),
    ("papa", 200.0),
    ("zanahoria", 100.0),
    ("ajo", 5.0),
    ("limón", 80.0),
    ("limon", 80.0),
    ("manzana", 200.0),
    ("plátano", 150.0),
    ("platano", 150.0),
    ("naranja", 200.0),
    ("pimiento", 150.0),
    ("chile", 150.0),
    ("huevo", 50.0),
    ("aguacate", 200.0),
    ("pepino", 250.0),
];

// ─────────────────────────────────────────────────────────────────────────────
// Ingredient names
// ─────────────────────────────────────────────────────────────────────────────

/// Prefixes checked before the variant table. Dairy names come in many variants.
pub const PRIORITY_PREFIXES: &[(&str, &str)] = &[
    ("queso panela", "queso panela"),
    ("queso mozzarella", "queso mozzarella"),
];

/// Bare names that map straight to a canonical key.
pub const PRIORITY_EXACT: &[(&str, &str)] = &[("mozzarella", "queso mozzarella")];

/// Canonical ingredient to the spellings that should group with it.
pub const NAME_VARIANTS: &[(&str, &[&str])] = &[
    ("cebolla", &["cebolla", "cebollas", "cebolla blanca", "cebollas blancas"]),
    (
        "jitomate",
        &["jitomate", "jitomates", "jitomate saladet", "jitomate bola", "tomate rojo", "tomates rojos"],
    ),
    ("ajo", &["ajo", "ajos", "diente de ajo", "dientes de ajo"]),
    ("zanahoria", &["zanahoria", "zanahorias"]),
    ("papa", &["papa", "papas", "patata", "patatas"]),
    (
        "pimiento",
        &["pimiento", "pimientos", "pimiento morrón", "pimiento morron", "morrón", "morron"],
    ),
    ("calabacita", &["calabacita", "calabacitas", "calabacín", "calabacin"]),
    ("espinaca", &["espinaca", "espinacas"]),
    ("lechuga", &["lechuga", "lechugas"]),
    ("brócoli", &["brócoli", "brocoli", "brocolí"]),
    ("champiñón", &["champiñón", "champiñon", "champiñones", "champinon", "champinones"]),
    ("pepino", &["pepino", "pepinos"]),
    ("aguacate", &["aguacate", "aguacates"]),
    ("limón", &["limón", "limon", "limones"]),
    ("manzana", &["manzana", "manzanas"]),
    ("plátano", &["plátano", "platano", "plátanos", "platanos"]),
    ("fresa", &["fresa", "fresas"]),
    ("naranja", &["naranja", "naranjas"]),
    ("huevo", &["huevo", "huevos", "huevo entero", "huevos enteros"]),
    ("clara de huevo", &["clara de huevo", "claras de huevo", "clara", "claras"]),
    (
        "pechuga de pollo",
        &["pechuga de pollo", "pechugas de pollo", "pechuga de pollo sin piel"],
    ),
    ("pollo", &["pollo"]),
    ("carne molida", &["carne molida", "carne molida de res", "carne de res molida"]),
    ("atún", &["atún", "atun", "atún en agua", "atun en agua", "lata de atún", "lata de atun"]),
    ("salmón", &["salmón", "salmon", "filete de salmón", "filete de salmon"]),
    ("jamón de pavo", &["jamón de pavo", "jamon de pavo"]),
    ("yogur griego", &["yogur griego", "yogurt griego", "yoghurt griego"]),
    ("arroz", &["arroz", "arroz blanco"]),
    ("avena", &["avena", "avena en hojuelas", "hojuelas de avena"]),
    (
        "tortilla de maíz",
        &["tortilla de maíz", "tortillas de maíz", "tortilla de maiz", "tortillas de maiz", "tortilla", "tortillas"],
    ),
    (
        "pan integral",
        &["pan integral", "rebanada de pan integral", "rebanadas de pan integral"],
    ),
    ("frijol", &["frijol", "frijoles"]),
    ("lenteja", &["lenteja", "lentejas"]),
    ("garbanzo", &["garbanzo", "garbanzos"]),
    ("aceite de oliva", &["aceite de oliva", "aceite de oliva extra virgen"]),
    ("almendra", &["almendra", "almendras"]),
    ("nuez", &["nuez", "nueces"]),
    ("sal", &["sal", "sal de mar"]),
    ("pimienta", &["pimienta", "pimienta negra"]),
];

/// Preparation words that may follow a canonical name without changing what is bought.
pub const PREPARATION_METHODS: &[&str] = &[
    "picada", "picado", "picadas", "picados",
    "cocida", "cocido", "cocidas", "cocidos",
    "rallada", "rallado", "ralladas", "rallados",
    "molida", "molido",
    "asada", "asado", "asadas", "asados",
    "hervida", "hervido",
    "rebanada", "rebanado", "rebanadas", "rebanados",
    "fileteada", "fileteado",
    "troceada", "troceado",
    "deshebrada", "deshebrado",
    "cruda", "crudo", "crudas", "crudos",
    "fresca", "fresco", "frescas", "frescos",
    "horneada", "horneado",
    "finamente picada", "finamente picado",
    "sin piel", "sin hueso", "sin semillas",
    "en cubos", "en cubitos", "en rodajas", "en tiras", "en trozos", "en julianas",
    "al vapor", "a la plancha",
];

// ─────────────────────────────────────────────────────────────────────────────
// Categories
// ─────────────────────────────────────────────────────────────────────────────

/// Keywords per food group. Order is priority: the first group with a matching keyword wins.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Vegetables,
        &[
            "jitomate", "tomate", "cebolla", "ajo", "zanahoria", "pimiento", "chile",
            "calabacita", "calabacín", "calabaza", "espinaca", "lechuga", "brócoli", "brocoli",
            "coliflor", "champiñ", "champin", "pepino", "nopal", "apio", "ejote", "chayote",
            "betabel", "rábano", "rabano", "cilantro", "perejil", "acelga", "verdura", "jícama",
            "jicama", "berenjena", "espárrago", "esparrago", "germinado", "repollo", "poro",
        ],
    ),
    (
        Category::AnimalOrigin,
        &[
            "pollo", "pechuga", "pavo", "carne", "bistec", "cerdo", "lomo", "pescado", "atún",
            "atun", "salmón", "salmon", "tilapia", "camarón", "camaron", "sardina", "huevo",
            "clara", "queso", "jamón", "jamon", "leche", "yogur", "requesón", "requeson",
        ],
    ),
    (
        Category::Fruits,
        &[
            "manzana", "plátano", "platano", "naranja", "fresa", "uva", "pera", "piña", "mango",
            "papaya", "sandía", "sandia", "melón", "melon", "kiwi", "limón", "limon", "guayaba",
            "durazno", "mandarina", "toronja", "arándano", "arandano", "frambuesa", "zarzamora",
            "fruta",
        ],
    ),
    (
        Category::FatsWithoutProtein,
        &["aceite", "aguacate", "mantequilla", "margarina", "mayonesa", "crema", "tocino", "aderezo"],
    ),
    (
        Category::GrainsAndTubers,
        &[
            "arroz", "avena", "pan", "tortilla", "papa", "camote", "pasta", "espagueti",
            "galleta", "cereal", "amaranto", "quinoa", "quinua", "elote", "maíz", "maiz",
            "harina", "tostada", "granola", "bolillo",
        ],
    ),
    (
        Category::Legumes,
        &["frijol", "lenteja", "garbanzo", "haba", "soya", "alubia", "edamame"],
    ),
    (
        Category::FatsWithProtein,
        &[
            "almendra", "nuez", "nueces", "cacahuate", "pistache", "semilla", "ajonjolí",
            "ajonjoli", "chía", "chia", "linaza", "girasol", "pepita",
        ],
    ),
];

// ─────────────────────────────────────────────────────────────────────────────
// Prices
// ─────────────────────────────────────────────────────────────────────────────

/// Currency used when no configuration overrides it.
pub const DEFAULT_CURRENCY: &str = "MXN";

/// Built-in reference prices: (name, price, pricing unit).
pub const PRICE_TABLE: &[(&str, f64, &str)] = &[
    ("jitomate", 30.0, "kg"),
    ("cebolla", 28.0, "kg"),
    ("ajo", 120.0, "kg"),
    ("zanahoria", 22.0, "kg"),
    ("papa", 32.0, "kg"),
    ("pimiento", 60.0, "kg"),
    ("chile", 50.0, "kg"),
    ("calabacita", 30.0, "kg"),
    ("espinaca", 25.0, "pza"),
    ("lechuga", 25.0, "pza"),
    ("brócoli", 45.0, "kg"),
    ("champiñón", 80.0, "kg"),
    ("pepino", 25.0, "kg"),
    ("aguacate", 70.0, "kg"),
    ("limón", 35.0, "kg"),
    ("manzana", 45.0, "kg"),
    ("plátano", 25.0, "kg"),
    ("fresa", 70.0, "kg"),
    ("naranja", 22.0, "kg"),
    ("huevo", 3.5, "pza"),
    ("pechuga de pollo", 140.0, "kg"),
    ("pollo", 90.0, "kg"),
    ("carne molida", 160.0, "kg"),
    ("atún", 25.0, "pza"),
    ("salmón", 380.0, "kg"),
    ("jamón de pavo", 150.0, "kg"),
    ("queso panela", 140.0, "kg"),
    ("queso mozzarella", 180.0, "kg"),
    ("leche", 28.0, "l"),
    ("yogur griego", 90.0, "kg"),
    ("arroz", 30.0, "kg"),
    ("avena", 40.0, "kg"),
    ("tortilla de maíz", 24.0, "kg"),
    ("pan integral", 55.0, "pza"),
    ("frijol", 38.0, "kg"),
    ("lenteja", 40.0, "kg"),
    ("garbanzo", 45.0, "kg"),
    ("aceite de oliva", 180.0, "l"),
    ("almendra", 280.0, "kg"),
    ("nuez", 320.0, "kg"),
    ("miel", 120.0, "kg"),
    ("sal", 20.0, "kg"),
];
