//! foodlogger-sample: deterministic seeded diary history for bootstrapping and tests

pub mod catalogue;
pub mod generate;
pub mod rng;

pub use catalogue::{CATALOGUE, CatalogueItem, MEAL_SLOTS, MealSlot, VOICE_TEMPLATES};
pub use generate::{SAMPLE_DAYS, SAMPLE_SEED, generate};
pub use rng::{SeededRng, shuffle};
