//! Diary entry model shared by every engine component.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Marker prepended to `raw_input` of generated sample entries so they can be
/// recognized and bulk-removed.
pub const SAMPLE_PREFIX: &str = "[SAMPLE] ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Image,
    Voice,
}

impl InputType {
    pub const ALL: [InputType; 3] = [InputType::Text, InputType::Image, InputType::Voice];

    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Image => "image",
            InputType::Voice => "voice",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
    Dessert,
    Beverage,
}

impl MealCategory {
    pub const ALL: [MealCategory; 6] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Snack,
        MealCategory::Dinner,
        MealCategory::Dessert,
        MealCategory::Beverage,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Lunch => "Lunch",
            MealCategory::Snack => "Snack",
            MealCategory::Dinner => "Dinner",
            MealCategory::Dessert => "Dessert",
            MealCategory::Beverage => "Beverage",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Some(MealCategory::Breakfast),
            "lunch" => Some(MealCategory::Lunch),
            "snack" => Some(MealCategory::Snack),
            "dinner" => Some(MealCategory::Dinner),
            "dessert" => Some(MealCategory::Dessert),
            "beverage" => Some(MealCategory::Beverage),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTag {
    Energised,
    Satisfied,
    Neutral,
    Sluggish,
    Uncomfortable,
}

impl MoodTag {
    pub fn as_str(self) -> &'static str {
        match self {
            MoodTag::Energised => "energised",
            MoodTag::Satisfied => "satisfied",
            MoodTag::Neutral => "neutral",
            MoodTag::Sluggish => "sluggish",
            MoodTag::Uncomfortable => "uncomfortable",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "energised" => Some(MoodTag::Energised),
            "satisfied" => Some(MoodTag::Satisfied),
            "neutral" => Some(MoodTag::Neutral),
            "sluggish" => Some(MoodTag::Sluggish),
            "uncomfortable" => Some(MoodTag::Uncomfortable),
            _ => None,
        }
    }
}

/// One logged meal.
///
/// `date` is the calendar day the meal is attributed to and may differ from
/// `created_at`'s day when an entry is back-dated. `created_at` drives every
/// time-of-day and recency computation. `category` is a suggestion from the
/// classifier and may be reassigned by the user at any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: String,
    pub date: NaiveDate,
    pub raw_input: String,
    pub input_type: InputType,
    pub processed_description: String,

    /// Bare filename of an associated photo, never an absolute path.
    pub media_file: Option<String>,

    pub created_at: NaiveDateTime,
    pub category: Option<MealCategory>,

    /// Set on every mutation after creation.
    pub updated_at: Option<NaiveDateTime>,

    pub mood: Option<MoodTag>,
}

impl FoodEntry {
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        raw_input: impl Into<String>,
        input_type: InputType,
        processed_description: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            raw_input: raw_input.into(),
            input_type,
            processed_description: processed_description.into(),
            media_file: None,
            created_at,
            category: None,
            updated_at: None,
            mood: None,
        }
    }

    pub fn with_category(mut self, category: MealCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_media_file(mut self, filename: impl Into<String>) -> Self {
        self.media_file = Some(filename.into());
        self
    }

    pub fn with_updated_at(mut self, at: NaiveDateTime) -> Self {
        self.updated_at = Some(at);
        self
    }

    pub fn with_mood(mut self, mood: MoodTag) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn is_sample(&self) -> bool {
        self.raw_input.starts_with(SAMPLE_PREFIX)
    }
}
