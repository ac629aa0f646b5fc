// src/store.rs

//! Immutable in-memory notice store.
//!
//! The store is the source of truth for one session: it is validated once on
//! construction and only ever read afterwards. Every pipeline stage produces
//! new views over it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::NoticeRecord;

fn case_number_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^(?P<agency>[A-Z]+)-(?P<year>\d{4})-(?P<seq>\d{5})$").ok())
        .as_ref()
}

/// Validated, read-only collection of notice records.
#[derive(Debug, Clone, Default)]
pub struct NoticeStore {
    records: Vec<NoticeRecord>,
}

impl NoticeStore {
    /// Build a store, rejecting duplicate identifiers and malformed fields.
    pub fn new(records: Vec<NoticeRecord>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(records.len());
        let mut case_numbers = HashSet::with_capacity(records.len());

        for record in &records {
            if !ids.insert(record.id.as_str()) {
                return Err(AppError::validation(format!(
                    "duplicate notice id '{}'",
                    record.id
                )));
            }
            if !case_numbers.insert(record.case_number.as_str()) {
                return Err(AppError::validation(format!(
                    "duplicate case number '{}'",
                    record.case_number
                )));
            }
            validate_record(record)?;
        }

        log::debug!("Notice store built with {} records", records.len());
        Ok(Self { records })
    }

    /// Load records from a JSON array file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let records: Vec<NoticeRecord> = serde_json::from_str(&content)?;
        log::info!("Loaded {} notices from {}", records.len(), path.display());
        Self::new(records)
    }

    /// Write records as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn records(&self) -> &[NoticeRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&NoticeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate_record(record: &NoticeRecord) -> Result<()> {
    let pattern = case_number_pattern()
        .ok_or_else(|| AppError::config("case number pattern failed to compile"))?;
    let caps = pattern
        .captures(&record.case_number)
        .ok_or_else(|| {
            AppError::validation(format!(
                "case number '{}' is not AGENCY-YYYY-NNNNN",
                record.case_number
            ))
        })?;
    if &caps["agency"] != record.agency {
        return Err(AppError::validation(format!(
            "case number '{}' does not belong to agency {}",
            record.case_number, record.agency
        )));
    }

    let state_ok = record.state.len() == 2 && record.state.chars().all(|c| c.is_ascii_uppercase());
    if !state_ok {
        return Err(AppError::validation(format!(
            "notice '{}' has invalid state code '{}'",
            record.id, record.state
        )));
    }
    Ok(())
}
