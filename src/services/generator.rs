// src/services/generator.rs

//! Deterministic mock notice generation.
//!
//! Values are drawn from a SHA-256 counter stream keyed by the seed, so the
//! same `(count, today, seed)` always yields the same store.

use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate};
use sha2::{Digest, Sha256};

use crate::error::{AppError, Result};
use crate::models::{NoticeRecord, NoticeStatus, NoticeType};
use crate::store::NoticeStore;

const AGENCIES: &[&str] = &["DEA", "FBI", "CBP", "IRS", "USSS", "USAO"];

const ASSET_TYPES: &[&str] = &[
    "Cash / Currency",
    "Vehicle",
    "Cryptocurrency",
    "Real Property",
    "Electronics",
    "Jewelry",
];

const LOCATIONS: &[(&str, &str)] = &[
    ("Miami", "FL"),
    ("New York", "NY"),
    ("Los Angeles", "CA"),
    ("Chicago", "IL"),
    ("Houston", "TX"),
    ("Phoenix", "AZ"),
    ("Detroit", "MI"),
    ("Atlanta", "GA"),
];

/// Seizures happen up to this many days before `today`.
const SEIZURE_WINDOW_DAYS: u64 = 60;

/// Deadlines fall in `today - 10 .. today + 50`.
const DEADLINE_PAST_DAYS: i64 = 10;
const DEADLINE_WINDOW_DAYS: u64 = 60;

/// Share of notices that are judicial rather than administrative.
const JUDICIAL_SHARE: f64 = 0.3;

/// Five-digit sequence numbers available per agency and year.
const CASE_SEQUENCE_SPACE: u64 = 100_000;

/// Largest store the generator guarantees to fill: one agency's sequence
/// space, since any single agency may draw every record.
pub const MAX_GENERATED_RECORDS: usize = CASE_SEQUENCE_SPACE as usize;

/// Pseudo-random stream derived from SHA-256 over `(seed, counter)`.
struct SeedStream {
    seed: u64,
    counter: u64,
}

impl SeedStream {
    fn new(seed: u64) -> Self {
        Self { seed, counter: 0 }
    }

    fn next_u64(&mut self) -> u64 {
        let mut hasher = Sha256::new();
        hasher.update(self.seed.to_le_bytes());
        hasher.update(self.counter.to_le_bytes());
        self.counter += 1;

        let digest = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        u64::from_le_bytes(bytes)
    }

    /// Uniform-ish integer in `0..bound`.
    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound.max(1)
    }

    /// Float in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len() as u64) as usize]
    }
}

/// Generate `count` notices around `today`.
///
/// Fails when `count` exceeds [`MAX_GENERATED_RECORDS`].
pub fn generate_records(
    count: usize,
    today: NaiveDate,
    seed: u64,
) -> Result<Vec<NoticeRecord>> {
    if count > MAX_GENERATED_RECORDS {
        return Err(AppError::validation(format!(
            "cannot generate {count} notices, at most {MAX_GENERATED_RECORDS} unique case numbers are available"
        )));
    }

    let mut stream = SeedStream::new(seed);
    let mut case_numbers = HashSet::with_capacity(count);

    (0..count)
        .map(|i| -> Result<NoticeRecord> {
            let agency = *stream.pick(AGENCIES);
            let asset_type = *stream.pick(ASSET_TYPES);
            let (city, state) = *stream.pick(LOCATIONS);

            let seizure_date = today - Days::new(stream.below(SEIZURE_WINDOW_DAYS));
            let offset = stream.below(DEADLINE_WINDOW_DAYS) as i64 - DEADLINE_PAST_DAYS;
            let claim_deadline = shift(today, offset);

            let case_number = unique_case_number(
                &mut case_numbers,
                agency,
                today.year(),
                stream.below(10_000),
            )
            .ok_or_else(|| {
                AppError::validation(format!("case numbers exhausted for agency {agency}"))
            })?;
            let description = describe(asset_type, &mut stream);
            let notice_type = if stream.unit() > 1.0 - JUDICIAL_SHARE {
                NoticeType::Judicial
            } else {
                NoticeType::Administrative
            };

            Ok(NoticeRecord {
                id: format!("notice-{i}"),
                case_number,
                agency: agency.to_string(),
                asset_type: asset_type.to_string(),
                description,
                city: city.to_string(),
                state: state.to_string(),
                seizure_date,
                claim_deadline,
                status: if offset < 0 {
                    NoticeStatus::Expired
                } else {
                    NoticeStatus::Active
                },
                notice_type,
                source_url: None,
            })
        })
        .collect()
}

/// Generate a validated store.
pub fn generate_store(count: usize, today: NaiveDate, seed: u64) -> Result<NoticeStore> {
    log::info!("Generating {count} mock notices (seed {seed})");
    NoticeStore::new(generate_records(count, today, seed)?)
}

fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    if days < 0 {
        date - Days::new(days.unsigned_abs())
    } else {
        date + Days::new(days as u64)
    }
}

/// Probe forward from `number` for an unused case number, wrapping once
/// through the whole sequence space.
fn unique_case_number(
    taken: &mut HashSet<String>,
    agency: &str,
    year: i32,
    mut number: u64,
) -> Option<String> {
    for _ in 0..CASE_SEQUENCE_SPACE {
        let candidate = format!("{agency}-{year}-{number:05}");
        if taken.insert(candidate.clone()) {
            return Some(candidate);
        }
        number = (number + 1) % CASE_SEQUENCE_SPACE;
    }
    None
}

fn describe(asset_type: &str, stream: &mut SeedStream) -> String {
    let subject = match asset_type {
        "Vehicle" => "2022 Ford F-150".to_string(),
        "Cash / Currency" => {
            let cents = 100_000 + stream.below(5_000_000);
            format!("${}.{:02} USD", cents / 100, cents % 100)
        }
        _ => "Miscellaneous Assets".to_string(),
    };
    format!("{subject} seized during investigation")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_deterministic() {
        let a = generate_records(20, today(), 7).unwrap();
        let b = generate_records(20, today(), 7).unwrap();
        let c = generate_records(20, today(), 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_generated_store_is_valid() {
        let store = generate_store(150, today(), 2024).unwrap();
        assert_eq!(store.len(), 150);
        assert_eq!(store.records()[0].id, "notice-0");
        assert_eq!(store.records()[149].id, "notice-149");
    }

    #[test]
    fn test_dates_within_windows() {
        for record in generate_records(200, today(), 1).unwrap() {
            assert!(record.seizure_date <= today());
            assert!(record.seizure_date > today() - Days::new(SEIZURE_WINDOW_DAYS));
            assert!(record.claim_deadline >= today() - Days::new(10));
            assert!(record.claim_deadline < today() + Days::new(50));
            assert_eq!(
                record.status == NoticeStatus::Expired,
                record.claim_deadline < today()
            );
        }
    }

    #[test]
    fn test_descriptions_follow_asset_type() {
        for record in generate_records(100, today(), 3).unwrap() {
            assert!(record.description.ends_with(" seized during investigation"));
            match record.asset_type.as_str() {
                "Vehicle" => assert!(record.description.starts_with("2022 Ford F-150")),
                "Cash / Currency" => assert!(record.description.starts_with('$')),
                _ => assert!(record.description.starts_with("Miscellaneous Assets")),
            }
        }
    }

    #[test]
    fn test_case_number_collisions_probe_forward() {
        let mut taken = HashSet::new();
        assert_eq!(
            unique_case_number(&mut taken, "DEA", 2026, 42).as_deref(),
            Some("DEA-2026-00042")
        );
        assert_eq!(
            unique_case_number(&mut taken, "DEA", 2026, 42).as_deref(),
            Some("DEA-2026-00043")
        );
        assert_eq!(
            unique_case_number(&mut taken, "FBI", 2026, 42).as_deref(),
            Some("FBI-2026-00042")
        );
    }

    #[test]
    fn test_case_number_probe_wraps_and_gives_up() {
        let mut taken: HashSet<String> = (0..CASE_SEQUENCE_SPACE)
            .filter(|n| *n != 7)
            .map(|n| format!("DEA-2026-{n:05}"))
            .collect();
        assert_eq!(
            unique_case_number(&mut taken, "DEA", 2026, 99_990).as_deref(),
            Some("DEA-2026-00007")
        );
        assert_eq!(unique_case_number(&mut taken, "DEA", 2026, 0), None);
    }

    #[test]
    fn test_over_capacity_count_is_rejected() {
        let err = generate_records(MAX_GENERATED_RECORDS + 1, today(), 1).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(generate_store(700_000, today(), 1).is_err());
    }
}
