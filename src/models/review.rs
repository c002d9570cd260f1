use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::decode::{Fields, Lenient};

// ---------------------------------------------------------------------------
// Review — one user review of a set (getReviews)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: Option<String>,
    pub date_posted: Option<Lenient<NaiveDateTime>>,
    pub overall_rating: Option<i64>,
    pub parts: Option<i64>,
    pub building_experience: Option<i64>,
    pub playability: Option<i64>,
    pub value_for_money: Option<i64>,
    pub title: Option<String>,
    pub review: Option<String>,
    /// Whether `review` contains HTML markup.
    pub html: Option<Lenient<bool>>,
}

impl Review {
    pub fn from_fields(fields: &Fields) -> Self {
        Self {
            author: fields.text("author"),
            date_posted: fields.timestamp("datePosted"),
            overall_rating: fields.int("overallRating"),
            parts: fields.int("parts"),
            building_experience: fields.int("buildingExperience"),
            playability: fields.int("playability"),
            value_for_money: fields.int("valueForMoney"),
            title: fields.text("title"),
            review: fields.text("review"),
            html: fields.flag("HTML"),
        }
    }

    pub fn is_html(&self) -> bool {
        self.html.as_ref().is_some_and(Lenient::is_true)
    }
}
