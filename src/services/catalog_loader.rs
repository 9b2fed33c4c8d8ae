use std::path::Path;

use serde_json::Value;
use tracing::instrument;

use crate::{
    error::StartupError,
    models::{Catalog, VideoRecord},
};

/// Key holding the record list in the dataset file
const RESULTS_KEY: &str = "results";

/// Loads the video catalog from a JSON dataset file
///
/// The file is either an object whose `results` key holds the records, or a
/// bare array of records. An object without `results` yields an empty catalog.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_catalog(path: &Path) -> Result<Catalog, StartupError> {
    let contents = std::fs::read_to_string(path).map_err(|source| StartupError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(path, &contents)?;
    tracing::info!(record_count = catalog.len(), "Catalog loaded");

    Ok(catalog)
}

fn parse_catalog(path: &Path, contents: &str) -> Result<Catalog, StartupError> {
    let parse_error = |source| StartupError::CatalogParse {
        path: path.to_path_buf(),
        source,
    };

    let document: Value = serde_json::from_str(contents).map_err(parse_error)?;

    let records = match document {
        Value::Array(records) => Value::Array(records),
        Value::Object(mut object) => match object.remove(RESULTS_KEY) {
            Some(results) => results,
            None => {
                tracing::warn!("Dataset has no `{}` key, serving an empty catalog", RESULTS_KEY);
                return Ok(Catalog::default());
            }
        },
        _ => {
            return Err(StartupError::CatalogShape {
                path: path.to_path_buf(),
            })
        }
    };

    let records: Vec<VideoRecord> = serde_json::from_value(records).map_err(parse_error)?;
    Ok(Catalog::new(records))
}
