//! Fixed food catalogue, meal slots, and transcript templates backing the
//! sample generator.

use foodlogger_core::entry::MealCategory;

#[derive(Debug, Clone, Copy)]
pub struct CatalogueItem {
    pub name: &'static str,
    pub category: MealCategory,
}

const fn item(name: &'static str, category: MealCategory) -> CatalogueItem {
    CatalogueItem { name, category }
}

/// 66 items across all six categories, wide enough to exercise every
/// analytics surface.
pub const CATALOGUE: &[CatalogueItem] = &[
    // Beverages (12)
    item("Oat milk latte", MealCategory::Beverage),
    item("Espresso", MealCategory::Beverage),
    item("Matcha latte", MealCategory::Beverage),
    item("Cappuccino", MealCategory::Beverage),
    item("Mango lassi", MealCategory::Beverage),
    item("Protein shake", MealCategory::Beverage),
    item("Cold brew coffee", MealCategory::Beverage),
    item("Almond milk flat white", MealCategory::Beverage),
    item("Green smoothie", MealCategory::Beverage),
    item("Masala chai", MealCategory::Beverage),
    item("Turmeric latte", MealCategory::Beverage),
    item("Kombucha", MealCategory::Beverage),
    // Breakfast (12)
    item("Avocado toast", MealCategory::Breakfast),
    item("Greek yogurt with granola", MealCategory::Breakfast),
    item("Overnight oats", MealCategory::Breakfast),
    item("Acai bowl", MealCategory::Breakfast),
    item("Idli sambar", MealCategory::Breakfast),
    item("Masala dosa", MealCategory::Breakfast),
    item("Quinoa porridge", MealCategory::Breakfast),
    item("Chia pudding", MealCategory::Breakfast),
    item("Banana pancakes", MealCategory::Breakfast),
    item("Poha", MealCategory::Breakfast),
    item("Upma", MealCategory::Breakfast),
    item("Scrambled eggs on toast", MealCategory::Breakfast),
    // Lunch (12)
    item("Caesar salad", MealCategory::Lunch),
    item("Turkey and avocado wrap", MealCategory::Lunch),
    item("Pad thai", MealCategory::Lunch),
    item("Salmon sushi", MealCategory::Lunch),
    item("Veggie burger", MealCategory::Lunch),
    item("Pho", MealCategory::Lunch),
    item("Ramen", MealCategory::Lunch),
    item("Grain bowl", MealCategory::Lunch),
    item("Falafel wrap", MealCategory::Lunch),
    item("Burrito bowl", MealCategory::Lunch),
    item("Tom yum soup", MealCategory::Lunch),
    item("Bao buns", MealCategory::Lunch),
    // Dinner (12)
    item("Chicken biryani", MealCategory::Dinner),
    item("Grilled salmon with veggies", MealCategory::Dinner),
    item("Chicken tikka masala", MealCategory::Dinner),
    item("Butter chicken with naan", MealCategory::Dinner),
    item("Dal makhani with rice", MealCategory::Dinner),
    item("Palak paneer", MealCategory::Dinner),
    item("Steak with roasted potatoes", MealCategory::Dinner),
    item("Chana masala", MealCategory::Dinner),
    item("Pasta carbonara", MealCategory::Dinner),
    item("Tacos", MealCategory::Dinner),
    item("Thai green curry", MealCategory::Dinner),
    item("Lamb rogan josh", MealCategory::Dinner),
    // Snack (10)
    item("Samosa", MealCategory::Snack),
    item("Apple slices with almond butter", MealCategory::Snack),
    item("Trail mix", MealCategory::Snack),
    item("Hummus with pita", MealCategory::Snack),
    item("Granola bar", MealCategory::Snack),
    item("Mixed nuts", MealCategory::Snack),
    item("Cheese and crackers", MealCategory::Snack),
    item("Edamame", MealCategory::Snack),
    item("Greek yogurt parfait", MealCategory::Snack),
    item("Popcorn", MealCategory::Snack),
    // Dessert (8)
    item("Kheer", MealCategory::Dessert),
    item("Fruit salad", MealCategory::Dessert),
    item("Gulab jamun", MealCategory::Dessert),
    item("Mango sorbet", MealCategory::Dessert),
    item("Chocolate brownie", MealCategory::Dessert),
    item("Tiramisu", MealCategory::Dessert),
    item("Rasgulla", MealCategory::Dessert),
    item("Mango kulfi", MealCategory::Dessert),
];

/// One of four daily windows an entry can land in.
#[derive(Debug, Clone, Copy)]
pub struct MealSlot {
    pub hour_min: u32,
    pub hour_max: u32,
    pub minute_min: u32,
    pub minute_max: u32,
    pub preferred: &'static [MealCategory],
}

pub const MEAL_SLOTS: [MealSlot; 4] = [
    MealSlot {
        hour_min: 7,
        hour_max: 9,
        minute_min: 0,
        minute_max: 45,
        preferred: &[MealCategory::Breakfast, MealCategory::Beverage],
    },
    MealSlot {
        hour_min: 12,
        hour_max: 14,
        minute_min: 0,
        minute_max: 45,
        preferred: &[MealCategory::Lunch, MealCategory::Beverage],
    },
    MealSlot {
        hour_min: 15,
        hour_max: 16,
        minute_min: 0,
        minute_max: 30,
        preferred: &[MealCategory::Snack, MealCategory::Beverage, MealCategory::Dessert],
    },
    MealSlot {
        hour_min: 19,
        hour_max: 21,
        minute_min: 0,
        minute_max: 45,
        preferred: &[MealCategory::Dinner, MealCategory::Beverage, MealCategory::Dessert],
    },
];

/// Spoken-style wrappers applied to voice entries; `{}` is the food name.
pub const VOICE_TEMPLATES: [&str; 7] = [
    "I had {}",
    "Just had some {}",
    "Had {} for this meal",
    "Eating {}",
    "Had a really good {}",
    "Just finished some {}",
    "Had {} just now",
];
