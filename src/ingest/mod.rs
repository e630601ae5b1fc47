//! Document ingestion: discover files, read them as raw records, transform
//! them into storable documents and load them into storage.

pub mod walker;

pub use walker::{discover_files, Discovery, FileMetadata};

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::error::Result;
use crate::models::{DataSourceType, RawData, StorageType, TransformedData};
use crate::storage::StorageService;

/// Outcome of one ingestion run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestReport {
    pub discovered: usize,
    pub loaded: usize,
    /// One message per file that could not be ingested.
    pub errors: Vec<String>,
}

/// Read a file as a raw record. JSON files are parsed; anything else is kept
/// as a JSON string.
pub fn read_raw(file: &FileMetadata) -> Result<RawData> {
    let text = std::fs::read_to_string(&file.absolute_path)?;
    let content = if file.extension == "json" {
        serde_json::from_str(&text)?
    } else {
        Value::String(text)
    };

    let mut raw = RawData::new(DataSourceType::File, content);
    raw.metadata
        .insert("source".to_string(), Value::from(file.relative_path.as_str()));
    raw.metadata
        .insert("size".to_string(), Value::from(file.file_size));
    Ok(raw)
}

/// Normalize a raw record into a JSON document bound for document storage.
pub fn transform(raw: &RawData) -> TransformedData {
    log::debug!("Transforming raw record {}", raw.id);

    let mut data = TransformedData::new(raw.content.clone());
    data.source_id = Some(raw.id.clone());
    data.format = "JSON".to_string();
    data.storage_type = StorageType::Document;
    data.metadata = raw.metadata.clone();
    data.metadata.insert(
        "transformed_at".to_string(),
        Value::from(Utc::now().to_rfc3339()),
    );
    data
}

/// Ingest every supported file under `root` into `storage`.
///
/// An entry that cannot be walked, read or parsed is recorded in the report
/// and the run continues. A missing or non-directory `root` is an error.
pub fn ingest_dir(root: &Path, storage: &StorageService) -> Result<IngestReport> {
    let Discovery { files, errors } = discover_files(root)?;
    let mut report = IngestReport {
        discovered: files.len(),
        loaded: 0,
        errors,
    };

    for file in &files {
        match read_raw(file) {
            Ok(raw) => {
                storage.save_document(transform(&raw));
                report.loaded += 1;
            }
            Err(e) => {
                log::warn!("Skipping {}: {}", file.relative_path, e);
                report.errors.push(format!("{}: {}", file.relative_path, e));
            }
        }
    }

    log::info!(
        "Ingest finished: discovered={}, loaded={}, errors={}",
        report.discovered,
        report.loaded,
        report.errors.len()
    );
    Ok(report)
}
