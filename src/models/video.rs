use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single video entry from the catalog dataset
///
/// Only the fields used for filtering are typed. Everything else in the source
/// object is kept in `extra` and written back out untouched.
///
/// Typed fields are `Option<Option<T>>`: the outer `None` means the key was
/// absent and is skipped on output, `Some(None)` means an explicit `null` that
/// is written back as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoRecord {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub overview: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub genre_ids: Option<Option<Vec<i64>>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Marks a key as present, keeping a `null` value distinct from a missing key
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl VideoRecord {
    /// Title, or an empty string when the record has none
    pub fn title(&self) -> &str {
        self.title
            .as_ref()
            .and_then(Option::as_deref)
            .unwrap_or_default()
    }

    /// Overview, or an empty string when the record has none
    pub fn overview(&self) -> &str {
        self.overview
            .as_ref()
            .and_then(Option::as_deref)
            .unwrap_or_default()
    }

    /// Genre ids, or an empty slice when the record has none
    pub fn genre_ids(&self) -> &[i64] {
        self.genre_ids
            .as_ref()
            .and_then(Option::as_deref)
            .unwrap_or_default()
    }
}

/// Immutable, ordered collection of video records
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<VideoRecord>,
}

impl Catalog {
    pub fn new(records: Vec<VideoRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[VideoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<VideoRecord>> for Catalog {
    fn from(records: Vec<VideoRecord>) -> Self {
        Self::new(records)
    }
}
