use chrono::{Duration, TimeZone, Utc};
use plantguard_core::{
    demo_catalog, summarize, DiseaseDraft, ManualClock, PestDraft, RecordKind, RecordRepository,
    RecordStatus, RecordStore, RemedyDraft, Severity, DEFAULT_RECENT_LIMIT,
};

#[test]
fn demo_catalog_summary_counts() {
    let store = demo_catalog();

    let summary = summarize(&store, DEFAULT_RECENT_LIMIT);

    assert_eq!(summary.total_diseases, 2);
    assert_eq!(summary.total_pests, 3);
    assert_eq!(summary.total_remedies, 4);
    assert_eq!(summary.pending_approvals, 3);
    assert_eq!(summary.critical_issues, 0);
    assert_eq!(summary.recent_reports.len(), DEFAULT_RECENT_LIMIT);
    assert_eq!(summary.recent_reports[0].name, "Powdery Mildew");
    assert_eq!(summary.recent_reports[0].status, RecordStatus::Pending);
}

#[test]
fn recent_reports_are_newest_first_and_limited() {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap());
    let mut store = RecordStore::with_clock(clock.clone());
    store.create_remedy(RemedyDraft::new("Oldest", "3"));
    clock.advance(Duration::hours(1));
    store.create_disease(DiseaseDraft::new("Middle", "3"));
    clock.advance(Duration::hours(1));
    store.create_pest(PestDraft::new("Newest", "3"));

    let summary = summarize(&store, 2);

    let names: Vec<_> = summary
        .recent_reports
        .iter()
        .map(|report| report.name.as_str())
        .collect();
    assert_eq!(names, vec!["Newest", "Middle"]);
    assert_eq!(summary.recent_reports[0].kind, RecordKind::Pest);
}

#[test]
fn critical_issues_count_diseases_and_pests_only() {
    let mut store = RecordStore::new();
    store.create_disease(DiseaseDraft {
        severity: Severity::Critical,
        ..DiseaseDraft::new("Fire Blight", "3")
    });
    store.create_pest(PestDraft {
        severity: Severity::Critical,
        ..PestDraft::new("Locusts", "3")
    });
    store.create_pest(PestDraft {
        severity: Severity::High,
        ..PestDraft::new("Aphids", "3")
    });

    let summary = summarize(&store, 0);

    assert_eq!(summary.critical_issues, 2);
    assert!(summary.recent_reports.is_empty());
}

#[test]
fn pending_count_drops_after_review() {
    let mut store = RecordStore::new();
    let id = store.create_pest(PestDraft::new("Aphids", "3"));
    store.create_pest(PestDraft::new("Thrips", "3"));
    assert_eq!(summarize(&store, 0).pending_approvals, 2);

    store.reject(RecordKind::Pest, id).unwrap();

    assert_eq!(summarize(&store, 0).pending_approvals, 1);
}

#[test]
fn empty_store_summary_is_all_zero() {
    let store = RecordStore::new();

    let summary = summarize(&store, DEFAULT_RECENT_LIMIT);

    assert_eq!(summary.total_diseases + summary.total_pests + summary.total_remedies, 0);
    assert_eq!(summary.pending_approvals, 0);
    assert!(summary.recent_reports.is_empty());
}
