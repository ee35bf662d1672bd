//! Rule-based meal-category detection.
//!
//! Content keywords always win over time-of-day buckets: a coffee logged at
//! 7pm is a beverage, not dinner. The six sets are tested in a fixed priority
//! order so overlapping terms resolve the same way every time.

use crate::entry::MealCategory;
use crate::tokenize::basic_tokens;

const BEVERAGE_KEYWORDS: &[&str] = &[
    "coffee",
    "tea",
    "juice",
    "water",
    "soda",
    "smoothie",
    "shake",
    "latte",
    "espresso",
    "milk",
    "beer",
    "wine",
    "drink",
    "cappuccino",
    "americano",
    "macchiato",
    "mocha",
    "frappe",
    "kombucha",
    "lemonade",
    "cocktail",
    "mocktail",
    "spirits",
    "whiskey",
    "vodka",
    "rum",
    "gin",
    "cider",
    "sparkling",
    "horchata",
    "matcha",
    "chai",
    "cocoa",
    "hot chocolate",
    // Indian beverages
    "lassi",
    "buttermilk",
    "chaas",
    "thandai",
    "jaljeera",
    "sharbat",
    "neera",
    "aam",
    "sol",
];

const DESSERT_KEYWORDS: &[&str] = &[
    "cake",
    "ice cream",
    "cookie",
    "brownie",
    "pie",
    "candy",
    "chocolate",
    "donut",
    "cupcake",
    "muffin",
    "pudding",
    "gelato",
    "sorbet",
    "tart",
    "pastry",
    "cheesecake",
    "tiramisu",
    "macaroon",
    "eclair",
    "fudge",
    "truffle",
    "sundae",
    "parfait",
    "cobbler",
    "mousse",
    // Indian sweets
    "kheer",
    "payasam",
    "halwa",
    "ladoo",
    "barfi",
    "jalebi",
    "rasgulla",
    "kulfi",
    "peda",
    "modak",
    "sheera",
    "kesari",
    "malpua",
    "shrikhand",
    "rabri",
    "gulab",
];

const BREAKFAST_KEYWORDS: &[&str] = &[
    "oatmeal",
    "cereal",
    "granola",
    "pancake",
    "pancakes",
    "waffle",
    "waffles",
    "bagel",
    "muffin",
    "toast",
    "eggs",
    "bacon",
    "sausage",
    "yogurt",
    "porridge",
    "croissant",
    "brioche",
    "frittata",
    "omelette",
    "omelet",
    "hash",
    "grits",
    // Indian breakfast
    "idli",
    "dosa",
    "uttapam",
    "upma",
    "poha",
    "appam",
    "puttu",
    "idiyappam",
    "vada",
    "pongal",
    "pesarattu",
    "adai",
    "rava",
    "paratha",
    "dhokla",
];

const LUNCH_KEYWORDS: &[&str] = &[
    "sandwich",
    "wrap",
    "salad",
    "soup",
    "burger",
    "panini",
    "sub",
    "quesadilla",
    "taco",
    "burrito",
    "poke",
    "bowl",
    "noodle",
    "ramen",
    "udon",
    "falafel",
    "hummus",
    "pita",
    "club",
    "blt",
    // Indian lunch
    "biryani",
    "pulao",
    "thali",
    "rasam",
    "sambar",
    "kootu",
    "aviyal",
    "keerai",
    "poriyal",
    "rajma",
    "chole",
    "paneer",
    "khichdi",
    "chapati",
    "roti",
    "naan",
    "curd",
];

const SNACK_KEYWORDS: &[&str] = &[
    "chips",
    "crackers",
    "popcorn",
    "nuts",
    "pretzels",
    "granola bar",
    "trail mix",
    "fruit",
    "apple",
    "banana",
    "orange",
    "grapes",
    "berries",
    "celery",
    "carrot",
    "rice cake",
    "edamame",
    "jerky",
    "string cheese",
    "dates",
    // Indian snacks
    "murukku",
    "chakli",
    "chivda",
    "bhel",
    "thattai",
    "mixture",
    "bonda",
    "bhajji",
    "samosa",
    "pakoda",
    "pakora",
    "chaat",
];

const DINNER_KEYWORDS: &[&str] = &[
    "steak",
    "roast",
    "pasta",
    "pizza",
    "chicken",
    "salmon",
    "fish",
    "curry",
    "stew",
    "casserole",
    "risotto",
    "lasagna",
    "meatballs",
    "pork",
    "lamb",
    "beef",
    "shrimp",
    "scallops",
    "chops",
    "fillet",
    // Indian dinner
    "tandoori",
    "tikka",
    "kebab",
    "makhani",
    "korma",
];

fn matches_any(tokens: &[String], keywords: &[&str]) -> bool {
    tokens.iter().any(|t| keywords.contains(&t.as_str()))
}

/// Suggest a category for an entry being created at `hour` (0-23) from its
/// description and any auxiliary labels. Total: always returns a category.
pub fn classify(hour: u32, description: &str, labels: &[String]) -> MealCategory {
    let mut tokens = basic_tokens(description);
    for label in labels {
        tokens.extend(basic_tokens(label));
    }

    // Keyword match returns immediately; the time bucket is never consulted.
    if matches_any(&tokens, BEVERAGE_KEYWORDS) {
        return MealCategory::Beverage;
    }
    if matches_any(&tokens, DESSERT_KEYWORDS) {
        return MealCategory::Dessert;
    }
    if matches_any(&tokens, BREAKFAST_KEYWORDS) {
        return MealCategory::Breakfast;
    }
    if matches_any(&tokens, LUNCH_KEYWORDS) {
        return MealCategory::Lunch;
    }
    if matches_any(&tokens, SNACK_KEYWORDS) {
        return MealCategory::Snack;
    }
    if matches_any(&tokens, DINNER_KEYWORDS) {
        return MealCategory::Dinner;
    }

    match hour {
        5..=10 => MealCategory::Breakfast,
        11..=14 => MealCategory::Lunch,
        15..=16 => MealCategory::Snack,
        17..=20 => MealCategory::Dinner,
        _ => MealCategory::Snack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beverage_wins_over_dessert_at_any_hour() {
        assert_eq!(classify(15, "chocolate milk", &[]), MealCategory::Beverage);
        assert_eq!(classify(8, "chocolate milk", &[]), MealCategory::Beverage);
    }

    #[test]
    fn keyword_overrides_time_bucket() {
        assert_eq!(classify(19, "steak", &[]), MealCategory::Dinner);
        assert_eq!(classify(8, "steak", &[]), MealCategory::Dinner);
        assert_eq!(classify(19, "glass of wine", &[]), MealCategory::Beverage);
    }

    #[test]
    fn dessert_wins_over_breakfast_for_shared_terms() {
        // "muffin" appears in both sets; the dessert set is tested first.
        assert_eq!(classify(8, "blueberry muffin", &[]), MealCategory::Dessert);
    }

    #[test]
    fn labels_participate_in_keyword_matching() {
        assert_eq!(
            classify(20, "", &["banana".to_string()]),
            MealCategory::Snack
        );
    }

    #[test]
    fn time_bucket_fallback_when_no_keyword_matches() {
        assert_eq!(classify(7, "leftovers", &[]), MealCategory::Breakfast);
        assert_eq!(classify(12, "leftovers", &[]), MealCategory::Lunch);
        assert_eq!(classify(16, "leftovers", &[]), MealCategory::Snack);
        assert_eq!(classify(19, "leftovers", &[]), MealCategory::Dinner);
        assert_eq!(classify(22, "leftovers", &[]), MealCategory::Snack);
    }

    #[test]
    fn empty_input_is_still_classified() {
        assert_eq!(classify(2, "", &[]), MealCategory::Snack);
        assert_eq!(classify(9, "", &[]), MealCategory::Breakfast);
    }

    #[test]
    fn matching_is_exact_token_not_substring() {
        // "pancaked" is not "pancake"; hour 3 falls through to snack.
        assert_eq!(classify(3, "pancaked", &[]), MealCategory::Snack);
    }
}
