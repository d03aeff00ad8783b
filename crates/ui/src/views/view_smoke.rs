use std::sync::Arc;

use blueprint_core::model::{Plan, PlanEdit, TextField};
use services::{PLAN_STORAGE_KEY, PlanStore};
use storage::repository::{EntryRepository, InMemoryRepository, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_entries};

#[tokio::test(flavor = "current_thread")]
async fn workbook_view_smoke_renders_tabs_and_first_goals() {
    let mut harness = setup_view_harness(ViewKind::Workbook);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    for label in ["1. Vision", "2. Audit", "3. Systems", "4. Leverage", "5. Scorecard"] {
        assert!(html.contains(label), "missing tab {label} in {html}");
    }
    assert!(html.contains("Power Goal #1"), "missing first goal in {html}");
    assert!(html.contains("Power Goal #3"), "missing third goal in {html}");
    assert!(!html.contains("Power Goal #4"), "collapsed goals leaked into {html}");
    assert!(html.contains("Show All 12"));
    assert!(html.contains("... 9 more goals hidden ..."));
    assert!(html.contains("Next Step"));
    assert!(html.contains("Reset All Data"));
    assert!(html.contains("Quick Reference Guide"));
}

#[tokio::test(flavor = "current_thread")]
async fn workbook_view_smoke_keeps_every_section_mounted() {
    let mut harness = setup_view_harness(ViewKind::Workbook);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("08:00 - 08:30"), "missing seeded audit row in {html}");
    assert!(html.contains("Add Time Block"));
    assert!(html.contains("Night-Before Design"));
    assert!(html.contains("Capital (Buy Back Time)"));
    assert!(html.contains("Friend Inventory Audit"));
    assert!(html.contains("module-panel--hidden"));
    assert!(!html.contains("Are you sure you want to clear all data?"));
}

#[tokio::test(flavor = "current_thread")]
async fn execution_view_smoke_renders_daily_focus_only() {
    let mut harness = setup_view_harness(ViewKind::Execution);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Focus on today's actions"), "missing lede in {html}");
    assert!(html.contains("Today's Priority Tasks"));
    assert!(html.contains("90 Min Attack"));
    assert!(html.contains("Mid-day Review"));
    assert!(!html.contains("The 12 Power Goals"), "workbook leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn header_smoke_reflects_stored_plan_progress() {
    let repo = Arc::new(InMemoryRepository::new());
    let plan = Plan::default()
        .apply(PlanEdit::SetText(TextField::NorthStar, "Big Goal".into()))
        .apply(PlanEdit::SetText(
            TextField::HighImpactProject,
            "Big Project".into(),
        ));
    PlanStore::new(repo.clone()).save(&plan).await.expect("save");

    let mut harness = setup_view_harness_with_entries(ViewKind::Header, repo);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("The 2026 Blueprint"));
    assert!(html.contains("3% Ready"), "missing progress in {html}");
    assert!(html.contains("Execution Mode"));
    assert!(!html.contains("Progress saved successfully!"));
}

#[tokio::test(flavor = "current_thread")]
async fn workbook_view_smoke_shows_stored_values() {
    let repo = Arc::new(InMemoryRepository::new());
    let plan = Plan::default().apply(PlanEdit::SetText(
        TextField::HighImpactProject,
        "Launch the course".into(),
    ));
    PlanStore::new(repo.clone()).save(&plan).await.expect("save");

    let mut harness = setup_view_harness_with_entries(ViewKind::Workbook, repo);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Launch the course"), "missing stored value in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn corrupted_entry_renders_defaults_without_error() {
    let repo = Arc::new(InMemoryRepository::new());
    repo.put_entry(PLAN_STORAGE_KEY, "{not json").await.unwrap();

    let mut harness = setup_view_harness_with_entries(ViewKind::Header, repo);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("0% Ready"), "missing default progress in {html}");
    assert!(!html.contains("Something went wrong"));
}

struct UnreachableEntries;

#[async_trait::async_trait]
impl EntryRepository for UnreachableEntries {
    async fn get_entry(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("offline".to_string()))
    }

    async fn put_entry(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".to_string()))
    }

    async fn remove_entry(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn unreadable_backend_shows_load_error() {
    let mut harness =
        setup_view_harness_with_entries(ViewKind::Header, Arc::new(UnreachableEntries));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Something went wrong. Please try again."), "missing error in {html}");
    assert!(html.contains("0% Ready"));
}
