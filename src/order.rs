//! Sort orders accepted by the `getSets` endpoint.
//!
//! The remote service takes a single `orderBy` string: one of a fixed set of
//! field names, optionally suffixed with `DESC`. Parsing is case-sensitive,
//! matching what the service accepts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BricksetError;

const DESC_SUFFIX: &str = "DESC";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    Number,
    YearFrom,
    Pieces,
    Minifigs,
    Rating,
    UKRetailPrice,
    USRetailPrice,
    CARetailPrice,
    EURetailPrice,
    Theme,
    Subtheme,
    Name,
    Random,
}

impl SortField {
    /// Every field the service accepts, in the order it documents them.
    pub const ALL: [SortField; 13] = [
        SortField::Number,
        SortField::YearFrom,
        SortField::Pieces,
        SortField::Minifigs,
        SortField::Rating,
        SortField::UKRetailPrice,
        SortField::USRetailPrice,
        SortField::CARetailPrice,
        SortField::EURetailPrice,
        SortField::Theme,
        SortField::Subtheme,
        SortField::Name,
        SortField::Random,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Number => "Number",
            SortField::YearFrom => "YearFrom",
            SortField::Pieces => "Pieces",
            SortField::Minifigs => "Minifigs",
            SortField::Rating => "Rating",
            SortField::UKRetailPrice => "UKRetailPrice",
            SortField::USRetailPrice => "USRetailPrice",
            SortField::CARetailPrice => "CARetailPrice",
            SortField::EURetailPrice => "EURetailPrice",
            SortField::Theme => "Theme",
            SortField::Subtheme => "Subtheme",
            SortField::Name => "Name",
            SortField::Random => "Random",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

/// A validated `orderBy` value: a sort field plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: SortField,
    pub descending: bool,
}

impl OrderBy {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            descending: false,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            descending: true,
        }
    }
}

impl Default for OrderBy {
    fn default() -> Self {
        Self::asc(SortField::Number)
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field.as_str())?;
        if self.descending {
            f.write_str(DESC_SUFFIX)?;
        }
        Ok(())
    }
}

impl FromStr for OrderBy {
    type Err = BricksetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(field) = SortField::from_name(s) {
            return Ok(Self::asc(field));
        }
        s.strip_suffix(DESC_SUFFIX)
            .and_then(SortField::from_name)
            .map(Self::desc)
            .ok_or_else(|| BricksetError::InvalidOrder(s.to_string()))
    }
}
