// src/pipeline/sort.rs

use std::borrow::Borrow;

use crate::models::{NoticeRecord, SortSpec};

/// Return a new ordering of `records` by `spec`.
///
/// The sort is stable: records with equal keys keep their input order in
/// both directions, because descending flips the comparator rather than the
/// finished vector.
pub fn sort_records<R>(records: &[R], spec: SortSpec) -> Vec<R>
where
    R: Borrow<NoticeRecord> + Clone,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| spec.compare(a.borrow(), b.borrow()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NoticeStatus, NoticeType, SortColumn};
    use chrono::NaiveDate;

    fn record(id: &str, agency: &str, deadline_day: u32) -> NoticeRecord {
        NoticeRecord {
            id: id.to_string(),
            case_number: format!("{agency}-2026-000{deadline_day:02}"),
            agency: agency.to_string(),
            asset_type: "Vehicle".to_string(),
            description: "2022 Ford F-150 seized during investigation".to_string(),
            city: "Phoenix".to_string(),
            state: "AZ".to_string(),
            seizure_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            claim_deadline: NaiveDate::from_ymd_opt(2026, 11, deadline_day).unwrap(),
            status: NoticeStatus::Active,
            notice_type: NoticeType::Administrative,
            source_url: None,
        }
    }

    fn ids<'a>(records: &[&'a NoticeRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_deadline_ascending() {
        let records = vec![record("a", "DEA", 9), record("b", "FBI", 2), record("c", "IRS", 5)];
        let refs: Vec<&NoticeRecord> = records.iter().collect();

        let sorted = sort_records(&refs, SortSpec::asc(SortColumn::ClaimDeadline));
        assert_eq!(ids(&sorted), vec!["b", "c", "a"]);

        let sorted = sort_records(&refs, SortSpec::desc(SortColumn::ClaimDeadline));
        assert_eq!(ids(&sorted), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_stable_in_both_directions() {
        let records = vec![
            record("a", "DEA", 3),
            record("b", "FBI", 1),
            record("c", "DEA", 2),
            record("d", "FBI", 4),
        ];
        let refs: Vec<&NoticeRecord> = records.iter().collect();

        let asc = sort_records(&refs, SortSpec::asc(SortColumn::Agency));
        assert_eq!(ids(&asc), vec!["a", "c", "b", "d"]);

        // Ties keep input order even when descending.
        let desc = sort_records(&refs, SortSpec::desc(SortColumn::Agency));
        assert_eq!(ids(&desc), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_input_is_untouched() {
        let records = vec![record("a", "DEA", 9), record("b", "FBI", 2)];
        let sorted = sort_records(&records, SortSpec::asc(SortColumn::ClaimDeadline));
        assert_eq!(records[0].id, "a");
        assert_eq!(sorted[0].id, "b");
    }
}
