use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::review::Review;
use crate::decode::{Fields, Lenient};
use crate::error::{BricksetError, Result};
use crate::lazy::FetchOnce;

// ---------------------------------------------------------------------------
// RelatedFetch — callback used by sets to load related collections
// ---------------------------------------------------------------------------

/// Loads the collections related to a set, keyed by set id.
///
/// Implemented by the gateway; sets hold it behind an `Arc` and call it on
/// first access to [`LegoSet::additional_images`], [`LegoSet::reviews`] and
/// [`LegoSet::instructions`].
pub trait RelatedFetch: fmt::Debug + Send + Sync {
    fn additional_images(&self, set_id: i64) -> Result<Vec<String>>;
    fn reviews(&self, set_id: i64) -> Result<Vec<Review>>;
    fn instructions(&self, set_id: i64) -> Result<Vec<String>>;
}

// ---------------------------------------------------------------------------
// LegoSet — one catalog item (getSets / getSet / getRecentlyUpdatedSets)
// ---------------------------------------------------------------------------

/// A LEGO set as returned by the service.
///
/// Any field may be `None` when the service leaves it empty or sends a value
/// that doesn't parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegoSet {
    pub set_id: Option<i64>,
    pub number: Option<String>,
    pub variant: Option<i64>,
    pub name: Option<String>,
    pub year: Option<i64>,
    pub theme: Option<String>,
    pub theme_group: Option<String>,
    pub subtheme: Option<String>,
    pub pieces: Option<i64>,
    pub minifigs: Option<i64>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub large_thumbnail_url: Option<String>,
    pub brickset_url: Option<String>,
    pub released: Option<Lenient<bool>>,

    // -- User-scoped fields, only meaningful with a session --
    pub owned: Option<Lenient<bool>>,
    pub wanted: Option<Lenient<bool>>,
    pub qty_owned: Option<i64>,
    pub user_notes: Option<String>,

    pub uk_retail_price: Option<f64>,
    pub us_retail_price: Option<f64>,
    pub ca_retail_price: Option<f64>,
    pub eu_retail_price: Option<f64>,
    pub us_date_added_to_sah: Option<Lenient<NaiveDateTime>>,
    pub us_date_removed_from_sah: Option<Lenient<NaiveDateTime>>,
    pub rating: Option<f64>,
    pub review_count: Option<i64>,
    pub packaging_type: Option<String>,
    pub availability: Option<String>,
    pub instructions_count: Option<i64>,
    pub additional_image_count: Option<i64>,
    pub age_min: Option<i64>,
    pub age_max: Option<i64>,
    pub category: Option<String>,
    pub last_updated: Option<Lenient<NaiveDateTime>>,

    #[serde(skip)]
    raw: Fields,
    #[serde(skip)]
    fetcher: Option<Arc<dyn RelatedFetch>>,
    #[serde(skip)]
    images: FetchOnce<Vec<String>>,
    #[serde(skip)]
    reviews: FetchOnce<Vec<Review>>,
    #[serde(skip)]
    instructions: FetchOnce<Vec<String>>,
}

impl LegoSet {
    /// Decode a set from the fields of one result element.
    ///
    /// The result is detached: call [`attach`](Self::attach) to enable the
    /// lazy related-collection accessors.
    pub fn from_fields(fields: &Fields) -> Self {
        Self {
            set_id: fields.int("setID"),
            number: fields.text("number"),
            variant: fields.int("numberVariant"),
            name: fields.text("name"),
            year: fields.int("year"),
            theme: fields.text("theme"),
            theme_group: fields.text("themeGroup"),
            subtheme: fields.text("subtheme"),
            pieces: fields.int("pieces"),
            minifigs: fields.int("minifigs"),
            image_url: fields.text("imageURL"),
            thumbnail_url: fields.text("thumbnailURL"),
            large_thumbnail_url: fields.text("largeThumbnailURL"),
            brickset_url: fields.text("bricksetURL"),
            released: fields.flag("released"),
            owned: fields.flag("owned"),
            wanted: fields.flag("wanted"),
            qty_owned: fields.int("qtyOwned"),
            user_notes: fields.text("userNotes"),
            uk_retail_price: fields.float("UKRetailPrice"),
            us_retail_price: fields.float("USRetailPrice"),
            ca_retail_price: fields.float("CARetailPrice"),
            eu_retail_price: fields.float("EURetailPrice"),
            us_date_added_to_sah: fields.timestamp("USDateAddedToSAH"),
            us_date_removed_from_sah: fields.timestamp("USDateRemovedFromSAH"),
            rating: fields.float("rating"),
            review_count: fields.int("reviewCount"),
            packaging_type: fields.text("packagingType"),
            availability: fields.text("availability"),
            instructions_count: fields.int("instructionsCount"),
            additional_image_count: fields.int("additionalImageCount"),
            age_min: fields.int("ageMin"),
            age_max: fields.int("ageMax"),
            category: fields.text("category"),
            last_updated: fields.timestamp("lastUpdated"),
            raw: fields.clone(),
            fetcher: None,
            images: FetchOnce::new(),
            reviews: FetchOnce::new(),
            instructions: FetchOnce::new(),
        }
    }

    /// Attach the fetcher used by the lazy related-collection accessors.
    pub fn attach(mut self, fetcher: Arc<dyn RelatedFetch>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn is_attached(&self) -> bool {
        self.fetcher.is_some()
    }

    /// The undecoded fields this set was built from.
    pub fn raw(&self) -> &Fields {
        &self.raw
    }

    /// `true` only when the service reported the set as released.
    pub fn is_released(&self) -> bool {
        self.released.as_ref().is_some_and(Lenient::is_true)
    }

    /// Full set number including variant, e.g. `"6905-1"`.
    pub fn full_number(&self) -> Option<String> {
        let number = self.number.as_deref()?;
        Some(match self.variant {
            Some(v) => format!("{number}-{v}"),
            None => number.to_string(),
        })
    }

    // -- Lazy related collections -------------------------------------------

    /// URLs of the additional images for this set, fetched on first call.
    pub fn additional_images(&self) -> Result<&[String]> {
        let (fetcher, id) = self.related_source()?;
        self.images
            .get_or_try_fetch(|| fetcher.additional_images(id))
            .map(Vec::as_slice)
    }

    /// User reviews of this set, fetched on first call.
    pub fn reviews(&self) -> Result<&[Review]> {
        let (fetcher, id) = self.related_source()?;
        self.reviews
            .get_or_try_fetch(|| fetcher.reviews(id))
            .map(Vec::as_slice)
    }

    /// URLs of the building instructions for this set, fetched on first call.
    pub fn instructions(&self) -> Result<&[String]> {
        let (fetcher, id) = self.related_source()?;
        self.instructions
            .get_or_try_fetch(|| fetcher.instructions(id))
            .map(Vec::as_slice)
    }

    fn related_source(&self) -> Result<(&dyn RelatedFetch, i64)> {
        let fetcher = self.fetcher.as_deref().ok_or(BricksetError::Detached)?;
        let id = self
            .set_id
            .ok_or_else(|| BricksetError::InvalidArgument("set has no setID".into()))?;
        Ok((fetcher, id))
    }
}
