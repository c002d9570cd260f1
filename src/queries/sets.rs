//! Set lookups: search, get by id, and recently updated sets.

use std::sync::Arc;

use crate::config;
use crate::error::{BricksetError, Result};
use crate::gateway::{Gateway, Params};
use crate::models::{LegoSet, Session};
use crate::order::OrderBy;

// ---------------------------------------------------------------------------
// SearchSetsParams
// ---------------------------------------------------------------------------

/// Parameters for [`SetQuery::search`]. Every filter is optional.
#[derive(Debug, Clone, Default)]
pub struct SearchSetsParams {
    pub query: Option<String>,
    pub theme: Option<String>,
    pub subtheme: Option<String>,
    pub set_number: Option<String>,
    pub year: Option<i32>,
    /// Only sets owned by the session's user.
    pub owned: bool,
    /// Only sets wanted by the session's user.
    pub wanted: bool,
    /// Sort key, e.g. `"Pieces"` or `"RatingDESC"`. Defaults to `Number`.
    pub order_by: Option<String>,
    /// Defaults to 20.
    pub page_size: Option<u32>,
    /// 1-based. Defaults to 1.
    pub page_number: Option<u32>,
    /// Look up another user's owned/wanted lists.
    pub username: Option<String>,
}

impl SearchSetsParams {
    /// Validate the sort key and build the `getSets` parameter list.
    ///
    /// Fails with [`BricksetError::InvalidOrder`] before anything is sent.
    pub fn to_params(&self, session: Option<&Session>) -> Result<Params> {
        let order: OrderBy = self
            .order_by
            .as_deref()
            .unwrap_or(config::DEFAULT_ORDER)
            .parse()?;
        if self.page_number == Some(0) {
            return Err(BricksetError::InvalidArgument("page_number is 1-based".into()));
        }

        Ok(vec![
            ("userHash", user_hash(session)),
            ("query", opt(&self.query)),
            ("theme", opt(&self.theme)),
            ("subtheme", opt(&self.subtheme)),
            ("setNumber", opt(&self.set_number)),
            ("year", self.year.map(|y| y.to_string()).unwrap_or_default()),
            ("owned", flag(self.owned)),
            ("wanted", flag(self.wanted)),
            ("orderBy", order.to_string()),
            (
                "pageSize",
                self.page_size.unwrap_or(config::DEFAULT_PAGE_SIZE).to_string(),
            ),
            ("pageNumber", self.page_number.unwrap_or(1).to_string()),
            ("userName", opt(&self.username)),
        ])
    }
}

// ---------------------------------------------------------------------------
// SetQuery
// ---------------------------------------------------------------------------

/// Query interface for sets. Returned sets are attached to the gateway so
/// their related collections can be loaded lazily.
pub struct SetQuery<'a> {
    gw: &'a Arc<Gateway>,
}

impl<'a> SetQuery<'a> {
    pub fn new(gw: &'a Arc<Gateway>) -> Self {
        Self { gw }
    }

    /// Search sets. Returns an empty vector when nothing matches.
    pub fn search(
        &self,
        params: &SearchSetsParams,
        session: Option<&Session>,
    ) -> Result<Vec<LegoSet>> {
        let query = params.to_params(session)?;
        self.fetch_sets(config::GET_SETS, query)
    }

    /// Get a single set by its Brickset id.
    pub fn get(&self, set_id: i64, session: Option<&Session>) -> Result<LegoSet> {
        let params = vec![
            ("userHash", user_hash(session)),
            ("SetID", set_id.to_string()),
        ];
        self.fetch_sets(config::GET_SET, params)?
            .into_iter()
            .next()
            .ok_or(BricksetError::InvalidSetId(set_id))
    }

    /// Sets updated within the last `minutes_ago` minutes.
    pub fn recently_updated(&self, minutes_ago: u32) -> Result<Vec<LegoSet>> {
        let params = vec![("minutesAgo", minutes_ago.to_string())];
        self.fetch_sets(config::GET_RECENTLY_UPDATED_SETS, params)
    }

    fn fetch_sets(&self, endpoint: &str, params: Params) -> Result<Vec<LegoSet>> {
        let rows = self.gw.get_rows(endpoint, params)?;
        Ok(rows
            .iter()
            .map(|fields| LegoSet::from_fields(fields).attach(self.gw.clone()))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn user_hash(session: Option<&Session>) -> String {
    session.map(|s| s.user_hash().to_string()).unwrap_or_default()
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn flag(value: bool) -> String {
    let text = if value { "1" } else { "" };
    text.to_string()
}
