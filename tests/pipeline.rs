// tests/pipeline.rs

//! End-to-end table behavior through the public API.

use chrono::{Days, NaiveDate};
use notices::models::{
    EngineConfig, FilterCategory, FilterSelection, NoticeRecord, NoticeStatus, NoticeType,
    SortColumn, SortSpec,
};
use notices::pipeline::{FilterCatalog, ViewState, filter_records, paginate, sort_records};
use notices::services::generate_store;
use notices::store::NoticeStore;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn notice(id: &str, case_number: &str, agency: &str, deadline: NaiveDate) -> NoticeRecord {
    NoticeRecord {
        id: id.to_string(),
        case_number: case_number.to_string(),
        agency: agency.to_string(),
        asset_type: "Vehicle".to_string(),
        description: "2022 Ford F-150 seized during investigation".to_string(),
        city: "Houston".to_string(),
        state: "TX".to_string(),
        seizure_date: today() - Days::new(20),
        claim_deadline: deadline,
        status: NoticeStatus::Active,
        notice_type: NoticeType::Administrative,
        source_url: None,
    }
}

#[test]
fn test_expired_notice_dropped_and_rest_ordered() {
    let records = vec![
        notice("a", "DEA-2026-00001", "DEA", today() - Days::new(1)),
        notice("b", "DEA-2026-00002", "DEA", today() + Days::new(1)),
        notice("c", "FBI-2026-00003", "FBI", today() + Days::new(40)),
    ];
    let store = NoticeStore::new(records).unwrap();

    let filtered = filter_records(store.records(), "", &FilterSelection::new(), today());
    let sorted = sort_records(&filtered, SortSpec::default());
    let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c"]);
}

#[test]
fn test_signed_in_first_page_of_generated_store() {
    let store = generate_store(150, today(), 2024).unwrap();
    let mut view = ViewState::new();
    view.sign_in();

    let out = view.render(store.records(), today(), &EngineConfig::default());
    assert!(out.counts.total > 25);
    assert_eq!(out.rows.len(), 25);
    assert_eq!((out.counts.range_start, out.counts.range_end), (1, 25));
    assert!(out.rows.windows(2).all(|w| w[0].claim_deadline <= w[1].claim_deadline));
    assert!(out.rows.iter().all(|r| r.claim_deadline >= today()));
}

#[test]
fn test_anonymous_preview_of_generated_store() {
    let store = generate_store(150, today(), 2024).unwrap();
    let view = ViewState::new();

    let out = view.render(store.records(), today(), &EngineConfig::default());
    assert_eq!(out.rows.len(), 15);
    assert!(out.pager.is_none());
    assert_eq!(
        out.counts.summary(),
        format!("Showing preview: 15 of {} notices", out.counts.total)
    );
}

#[test]
fn test_filter_after_paging_returns_to_first_page() {
    let store = generate_store(150, today(), 2024).unwrap();
    let mut view = ViewState::new();
    view.sign_in();
    view.set_page(3);
    view.set_filter(FilterCategory::Agency, ["DEA"]);

    assert_eq!(view.page(), 1);
    let out = view.render(store.records(), today(), &EngineConfig::default());
    assert_eq!(out.counts.range_start, 1);
    assert!(out.rows.iter().all(|r| r.agency == "DEA"));
}

#[test]
fn test_page_past_the_end_is_empty() {
    let store = generate_store(150, today(), 2024).unwrap();
    let filtered = filter_records(store.records(), "", &FilterSelection::new(), today());
    let sorted = sort_records(&filtered, SortSpec::default());

    let page = paginate(&sorted, true, 9999, 25, 15);
    assert!(page.is_empty());
    assert_eq!(page.total, sorted.len());
    assert!(page.range_start > page.range_end);
}

#[test]
fn test_search_is_case_insensitive_on_case_number() {
    let records = vec![
        notice("a", "DEA-2026-00001", "DEA", today() + Days::new(3)),
        notice("b", "FBI-2026-00002", "FBI", today() + Days::new(3)),
    ];

    let hits = filter_records(&records, "dea", &FilterSelection::new(), today());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "a");
}

#[test]
fn test_filters_across_categories_combine() {
    let mut cash = notice("c", "DEA-2026-00003", "DEA", today() + Days::new(3));
    cash.asset_type = "Cash / Currency".to_string();
    let records = vec![
        notice("a", "DEA-2026-00001", "DEA", today() + Days::new(3)),
        notice("b", "FBI-2026-00002", "FBI", today() + Days::new(3)),
        cash,
    ];

    let filters = FilterSelection::new()
        .with(FilterCategory::Agency, ["DEA", "FBI"])
        .with(FilterCategory::AssetType, ["Vehicle"]);
    let ids: Vec<&str> = filter_records(&records, "", &filters, today())
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_catalog_counts_follow_store() {
    let store = generate_store(150, today(), 2024).unwrap();
    let catalog = FilterCatalog::build(store.records());

    let total: usize = catalog
        .options(FilterCategory::Location)
        .iter()
        .filter_map(|o| o.count)
        .sum();
    assert_eq!(total, store.len());
}

#[test]
fn test_sort_header_toggle_round_trip() {
    let store = generate_store(60, today(), 9).unwrap();
    let mut view = ViewState::new();
    view.sign_in();

    view.click_sort(SortColumn::CaseNumber);
    let asc = view.render(store.records(), today(), &EngineConfig::default());
    view.click_sort(SortColumn::CaseNumber);
    let desc = view.render(store.records(), today(), &EngineConfig::default());

    assert_eq!(asc.counts.total, desc.counts.total);
    assert!(asc.rows.windows(2).all(|w| w[0].case_number <= w[1].case_number));
    assert!(desc.rows.windows(2).all(|w| w[0].case_number >= w[1].case_number));
}
