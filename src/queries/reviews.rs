//! User reviews of a set.

use crate::config;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::Review;

/// Query interface for the `getReviews` endpoint.
pub struct ReviewQuery<'a> {
    gw: &'a Gateway,
}

impl<'a> ReviewQuery<'a> {
    pub fn new(gw: &'a Gateway) -> Self {
        Self { gw }
    }

    /// All reviews of a set. Empty when the set has none or doesn't exist.
    pub fn for_set(&self, set_id: i64) -> Result<Vec<Review>> {
        fetch_reviews(self.gw, set_id)
    }
}

pub(crate) fn fetch_reviews(gw: &Gateway, set_id: i64) -> Result<Vec<Review>> {
    let rows = gw.get_rows(config::GET_REVIEWS, vec![("setID", set_id.to_string())])?;
    Ok(rows.iter().map(Review::from_fields).collect())
}
