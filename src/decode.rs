//! Field lookup and type coercion for decoded response elements.
//!
//! Each result element returned by the service is a flat list of named leaf
//! elements. [`Fields`] keys them by local name so records are decoded by
//! name rather than by position. Coercion never fails: malformed numbers
//! become `None`, and flags or timestamps that don't parse keep their raw
//! text in [`Lenient::Raw`].

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout used by the service, fractional seconds optional.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// ---------------------------------------------------------------------------
// Lenient
// ---------------------------------------------------------------------------

/// A coerced value that either parsed or kept the original text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Parsed(T),
    Raw(String),
}

impl<T> Lenient<T> {
    /// The parsed value, or `None` when the raw text was kept.
    pub fn parsed(&self) -> Option<&T> {
        match self {
            Lenient::Parsed(v) => Some(v),
            Lenient::Raw(_) => None,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        match self {
            Lenient::Parsed(_) => None,
            Lenient::Raw(s) => Some(s),
        }
    }
}

impl Lenient<bool> {
    /// `true` only for a parsed true flag.
    pub fn is_true(&self) -> bool {
        matches!(self, Lenient::Parsed(true))
    }
}

// ---------------------------------------------------------------------------
// Coercion
// ---------------------------------------------------------------------------

pub fn parse_int(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

pub fn parse_float(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Recognizes `true`/`1` and `false`/`0`/`none` (any case); anything else
/// passes through unchanged.
pub fn parse_flag(value: Option<&str>) -> Option<Lenient<bool>> {
    let raw = value?;
    let flag = match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Lenient::Parsed(true),
        "false" | "0" | "none" => Lenient::Parsed(false),
        _ => Lenient::Raw(raw.to_string()),
    };
    Some(flag)
}

pub fn parse_timestamp(value: Option<&str>) -> Option<Lenient<NaiveDateTime>> {
    let raw = value?;
    let ts = match NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT) {
        Ok(dt) => Lenient::Parsed(dt),
        Err(_) => Lenient::Raw(raw.to_string()),
    };
    Some(ts)
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// Name-keyed leaf values of one response element.
///
/// Empty elements are stored as absent, so every accessor treats "missing"
/// and "empty" the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fields {
    values: HashMap<String, String>,
}

impl Fields {
    /// Collect the element children of `node` by local name.
    pub fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        node.children()
            .filter(|child| child.is_element())
            .filter_map(|child| {
                let text = child.text()?;
                Some((child.tag_name().name().to_string(), text.to_string()))
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        parse_int(self.get(name))
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        parse_float(self.get(name))
    }

    pub fn flag(&self, name: &str) -> Option<Lenient<bool>> {
        parse_flag(self.get(name))
    }

    pub fn timestamp(&self, name: &str) -> Option<Lenient<NaiveDateTime>> {
        parse_timestamp(self.get(name))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v): &(String, String)| !v.is_empty())
            .collect();
        Self { values }
    }
}
