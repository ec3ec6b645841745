/// Loader for the catalog export written by the content build.
///
/// Accepted shapes:
/// - `[ {record}, ... ]`
/// - `{ "entries": [ {record}, ... ] }`
///
/// A record carries `id`, `kind` (or `type`), `title`, `route` and, for cases, `status`.
/// The export is loosely validated, so the loader is lenient: unusable records are skipped
/// with a warning and the rest of the catalog still loads. A record is unusable only when
/// it is not an object or has no recognizable kind; a blank id is kept and logged.
use std::path::Path;

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::escape::value_to_text;
use crate::model::{CaseEntry, CatalogEntry, EntryKind, EntryMeta};

/// Entries parsed from a catalog export.
#[derive(Debug, Clone)]
pub struct ParsedCatalog {
    pub entries: Vec<CatalogEntry>,
    /// Number of records dropped as unusable
    pub skipped: usize,
}

/// A catalog read from disk, with the fingerprint of the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub entries: Vec<CatalogEntry>,
    pub skipped: usize,
    /// Lowercase hex SHA-256 of the file bytes
    pub fingerprint: String,
}

pub fn load_catalog(path: &Path) -> Result<LoadedCatalog, CatalogError> {
    let bytes = std::fs::read(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let fingerprint = fingerprint(&bytes);
    let root: Value = serde_json::from_slice(&bytes)?;
    let parsed = parse_catalog_value(root)?;
    Ok(LoadedCatalog {
        entries: parsed.entries,
        skipped: parsed.skipped,
        fingerprint,
    })
}

pub fn parse_catalog(content: &str) -> Result<ParsedCatalog, CatalogError> {
    let root: Value = serde_json::from_str(content)?;
    parse_catalog_value(root)
}

pub fn parse_catalog_value(root: Value) -> Result<ParsedCatalog, CatalogError> {
    let records = match root {
        Value::Array(records) => records,
        Value::Object(mut map) => match map.remove("entries") {
            Some(Value::Array(records)) => records,
            Some(other) => {
                return Err(CatalogError::InvalidRoot(format!(
                    "\"entries\" must be an array, found {}",
                    json_type_name(&other)
                )))
            }
            None => {
                return Err(CatalogError::InvalidRoot(
                    "object root has no \"entries\" array".to_string(),
                ))
            }
        },
        other => {
            return Err(CatalogError::InvalidRoot(format!(
                "expected an array or an object, found {}",
                json_type_name(&other)
            )))
        }
    };

    let mut entries = Vec::with_capacity(records.len());
    let mut skipped = 0;
    for (index, record) in records.into_iter().enumerate() {
        match parse_record(index, record) {
            Some(entry) => entries.push(entry),
            None => skipped += 1,
        }
    }

    Ok(ParsedCatalog { entries, skipped })
}

/// Convert one loose record. `None` means the record was skipped (already logged).
fn parse_record(index: usize, record: Value) -> Option<CatalogEntry> {
    let mut fields = match record {
        Value::Object(fields) => fields,
        other => {
            warn!(index, found = json_type_name(&other), "catalog record is not an object, skipping");
            return None;
        }
    };

    let kind_value = fields.remove("kind").or_else(|| fields.remove("type"));
    let kind = match kind_value.as_ref().map(|v| value_to_text(Some(v))) {
        Some(raw) => match raw.parse::<EntryKind>() {
            Ok(kind) => kind,
            Err(e) => {
                warn!(index, error = %e, "catalog record has unknown kind, skipping");
                return None;
            }
        },
        None => {
            warn!(index, "catalog record has no kind, skipping");
            return None;
        }
    };

    let meta = EntryMeta {
        id: text_field(&mut fields, "id"),
        title: text_field(&mut fields, "title"),
        route: text_field(&mut fields, "route"),
    };
    if meta.id.trim().is_empty() {
        warn!(
            index,
            kind = %kind,
            title = %meta.title,
            route = %meta.route,
            "catalog record has empty id, keeping it with a blank label"
        );
    }
    let status = fields.remove("status");

    let entry = match kind {
        EntryKind::Question => CatalogEntry::Question(meta),
        EntryKind::Template => CatalogEntry::Template(meta),
        EntryKind::Conclusion => CatalogEntry::Conclusion(meta),
        EntryKind::Case => return Some(CatalogEntry::Case(CaseEntry { meta, status })),
    };
    if status.is_some() {
        debug!(index, kind = %kind, id = entry.id(), "status on non-case record ignored");
    }
    Some(entry)
}

/// String form of a field; missing and `null` become empty.
fn text_field(fields: &mut Map<String, Value>, name: &str) -> String {
    value_to_text(fields.remove(name).as_ref())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Content fingerprint used to detect catalog changes between loads.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
