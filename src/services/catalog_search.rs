use std::collections::HashSet;
use std::num::IntErrorKind;

use crate::{
    error::{AppError, AppResult},
    models::{Catalog, VideoRecord},
};

pub const TITLE_PARAM: &str = "title";
pub const GENRE_IDS_PARAM: &str = "genre_ids";
pub const DESCRIPTION_PARAM: &str = "description";

/// Filters derived from the query string of a single search request
///
/// Filters are OR-combined: a record is returned when any active filter
/// matches it. A filter with an empty value is inactive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Lowercased title substring, empty when not supplied
    pub title_query: String,
    /// Genre ids of which a record must share at least one
    pub genre_ids_query: HashSet<i64>,
    /// Lowercased overview substring, empty when not supplied
    pub description_query: String,
    /// Whether the request carried any query parameter at all
    pub has_filters: bool,
}

impl SearchQuery {
    /// Builds a query from raw `(name, value)` pairs in request order
    ///
    /// Only the first `title` and `description` values are used; every
    /// `genre_ids` value must be an integer or the whole request is
    /// rejected. Parameters with other names are ignored but still count
    /// towards `has_filters`.
    pub fn from_params(params: &[(String, String)]) -> AppResult<Self> {
        let mut title_query: Option<String> = None;
        let mut description_query: Option<String> = None;
        let mut genre_ids_query = HashSet::new();

        for (name, value) in params {
            match name.as_str() {
                TITLE_PARAM => {
                    title_query.get_or_insert_with(|| value.to_lowercase());
                }
                DESCRIPTION_PARAM => {
                    description_query.get_or_insert_with(|| value.to_lowercase());
                }
                GENRE_IDS_PARAM => {
                    if let Some(id) = parse_genre_id(value)? {
                        genre_ids_query.insert(id);
                    }
                }
                _ => {}
            }
        }

        Ok(Self {
            title_query: title_query.unwrap_or_default(),
            genre_ids_query,
            description_query: description_query.unwrap_or_default(),
            has_filters: !params.is_empty(),
        })
    }

    /// True when the record satisfies at least one active filter
    pub fn matches(&self, record: &VideoRecord) -> bool {
        self.title_matches(record) || self.genre_ids_match(record) || self.description_matches(record)
    }

    fn title_matches(&self, record: &VideoRecord) -> bool {
        !self.title_query.is_empty() && record.title().to_lowercase().contains(&self.title_query)
    }

    fn genre_ids_match(&self, record: &VideoRecord) -> bool {
        !self.genre_ids_query.is_empty()
            && record
                .genre_ids()
                .iter()
                .any(|id| self.genre_ids_query.contains(id))
    }

    fn description_matches(&self, record: &VideoRecord) -> bool {
        !self.description_query.is_empty()
            && record
                .overview()
                .to_lowercase()
                .contains(&self.description_query)
    }
}

/// Parses one `genre_ids` value
///
/// Integers outside the `i64` range are valid but can never equal a catalog
/// genre id, so they yield `None` instead of an error.
fn parse_genre_id(value: &str) -> AppResult<Option<i64>> {
    match value.trim().parse::<i64>() {
        Ok(id) => Ok(Some(id)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(_) => Err(AppError::Validation(format!(
            "{}: '{}' is not an integer",
            GENRE_IDS_PARAM, value
        ))),
    }
}

/// Returns the catalog records selected by `query`, in catalog order
///
/// A query without any parameters selects the whole catalog.
pub fn search_catalog<'a>(catalog: &'a Catalog, query: &SearchQuery) -> Vec<&'a VideoRecord> {
    if !query.has_filters {
        return catalog.records().iter().collect();
    }

    catalog
        .records()
        .iter()
        .filter(|record| query.matches(record))
        .collect()
}
