//! Additional images and building instructions for a set.

use crate::config;
use crate::error::Result;
use crate::gateway::Gateway;

/// Query interface for the image and instruction endpoints.
pub struct MediaQuery<'a> {
    gw: &'a Gateway,
}

impl<'a> MediaQuery<'a> {
    pub fn new(gw: &'a Gateway) -> Self {
        Self { gw }
    }

    /// Full-size URLs of the additional images for a set.
    pub fn additional_images(&self, set_id: i64) -> Result<Vec<String>> {
        fetch_additional_images(self.gw, set_id)
    }

    /// URLs of the instruction documents for a set.
    pub fn instructions(&self, set_id: i64) -> Result<Vec<String>> {
        fetch_instructions(self.gw, set_id)
    }
}

pub(crate) fn fetch_additional_images(gw: &Gateway, set_id: i64) -> Result<Vec<String>> {
    let rows = gw.get_rows(
        config::GET_ADDITIONAL_IMAGES,
        vec![("setID", set_id.to_string())],
    )?;
    Ok(rows.iter().filter_map(|f| f.text("imageURL")).collect())
}

pub(crate) fn fetch_instructions(gw: &Gateway, set_id: i64) -> Result<Vec<String>> {
    let rows = gw.get_rows(config::GET_INSTRUCTIONS, vec![("setID", set_id.to_string())])?;
    Ok(rows.iter().filter_map(|f| f.text("URL")).collect())
}
