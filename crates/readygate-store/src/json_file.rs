use crate::{ReportStore, StoreError};
use camino::{Utf8Path, Utf8PathBuf};
use rand::Rng;
use readygate_types::{Report, ReportDraft};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

const SLUG_LEN: usize = 6;
const SLUG_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Single-file store: one JSON document mapping slug to report.
///
/// Every operation loads and rewrites the whole document. Fine for the
/// report volumes this tool sees; swap in another [`ReportStore`] if that
/// stops being true.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: Utf8PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    reports: BTreeMap<String, Report>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn load(&self) -> Result<StoreDocument, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StoreDocument::default());
            }
            Err(err) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        serde_json::from_str(&text).map_err(|err| StoreError::Corrupt {
            path: self.path.clone(),
            source: err,
        })
    }

    fn persist(&self, document: &StoreDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| StoreError::Write {
                path: self.path.clone(),
                source: err,
            })?;
        }

        let json = serde_json::to_string_pretty(document).map_err(|err| StoreError::Corrupt {
            path: self.path.clone(),
            source: err,
        })?;

        std::fs::write(&self.path, json).map_err(|err| StoreError::Write {
            path: self.path.clone(),
            source: err,
        })
    }

    fn fresh_slug(document: &StoreDocument) -> String {
        let mut rng = rand::rng();
        loop {
            let slug: String = (0..SLUG_LEN)
                .map(|_| SLUG_CHARS[rng.random_range(0..SLUG_CHARS.len())] as char)
                .collect();
            if !document.reports.contains_key(&slug) {
                return slug;
            }
        }
    }
}

impl ReportStore for JsonFileStore {
    fn save(&self, draft: ReportDraft) -> Result<String, StoreError> {
        let mut document = self.load()?;
        let slug = Self::fresh_slug(&document);

        let report = Report {
            slug: slug.clone(),
            project_label: draft.project_label,
            source_mode: draft.source_mode,
            created_at: OffsetDateTime::now_utc(),
            readiness_score: draft.readiness_score,
            summary: draft.summary,
            findings: draft.findings,
            raw_metadata: draft.raw_metadata,
        };

        document.reports.insert(slug.clone(), report);
        self.persist(&document)?;
        Ok(slug)
    }

    fn get(&self, slug: &str) -> Result<Option<Report>, StoreError> {
        Ok(self.load()?.reports.get(slug).cloned())
    }
}
