//! Crash search pipeline: debounce coalescing, Apply/Clear, summary display.

mod common;

use std::time::Duration;

use common::TestConsole;
use serde_json::json;
use trackdeck::view_state::crashes::SUMMARY_CHART_KEY;
use trackdeck::view_state::{CrashField, View};

async fn open_crashes() -> TestConsole {
    let mut console = TestConsole::new();
    console.app.navigate(View::Crashes);
    console.app.run_until_idle().await;
    console.http.clear_requests();
    console
}

#[tokio::test(start_paused = true)]
async fn test_keystrokes_within_window_issue_one_search() {
    let mut console = open_crashes().await;
    console.app.crashes.editing = Some(CrashField::Query);

    for c in "boom".chars() {
        console.app.type_crash_char(c);
        tokio::time::advance(Duration::from_millis(100)).await;
        console.app.drain_messages();
    }
    assert!(console.queries("/admin/crashes").is_empty());

    console.app.run_until_idle().await;

    assert_eq!(console.queries("/admin/crashes"), vec!["q=boom"]);
    assert_eq!(console.queries("/admin/crashes/summary"), vec![""]);
}

#[tokio::test(start_paused = true)]
async fn test_every_input_shares_one_timer() {
    let mut console = open_crashes().await;

    console.app.crashes.editing = Some(CrashField::ExceptionCode);
    for c in "0xc0000409".chars() {
        console.app.type_crash_char(c);
    }
    tokio::time::advance(Duration::from_millis(250)).await;
    console.app.drain_messages();

    console.app.crashes.editing = Some(CrashField::FaultingModule);
    for c in "ucrtbase.dll".chars() {
        console.app.type_crash_char(c);
    }
    console.app.run_until_idle().await;

    assert_eq!(
        console.queries("/admin/crashes"),
        vec!["exception_code=0xc0000409&faulting_module=ucrtbase.dll"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_search_uses_values_at_fire_time() {
    let mut console = open_crashes().await;
    console.app.crashes.editing = Some(CrashField::Query);

    for c in "crashx".chars() {
        console.app.type_crash_char(c);
    }
    console.app.crash_backspace();
    console.app.run_until_idle().await;

    assert_eq!(console.queries("/admin/crashes"), vec!["q=crash"]);
}

#[tokio::test(start_paused = true)]
async fn test_clear_cancels_pending_and_searches_unfiltered() {
    let mut console = open_crashes().await;
    console.app.crashes.editing = Some(CrashField::Query);
    for c in "abc".chars() {
        console.app.type_crash_char(c);
    }

    console.app.clear_crash_filters();
    assert!(!console.app.crashes.debouncer.is_pending());
    assert!(console.app.crashes.inputs.is_empty());

    console.app.run_until_idle().await;
    tokio::time::advance(Duration::from_secs(1)).await;
    console.app.drain_messages();

    assert_eq!(console.queries("/admin/crashes"), vec![""]);
}

#[tokio::test(start_paused = true)]
async fn test_apply_fetches_immediately() {
    let mut console = open_crashes().await;
    console.app.crashes.editing = Some(CrashField::Query);
    for c in "oom".chars() {
        console.app.type_crash_char(c);
    }

    console.app.apply_crash_filters();
    assert!(!console.app.crashes.debouncer.is_pending());
    console.app.run_until_idle().await;

    assert_eq!(console.queries("/admin/crashes"), vec!["q=oom"]);
}

#[tokio::test(start_paused = true)]
async fn test_user_scope_applies_to_list_and_summary() {
    let mut console = TestConsole::new();
    console.app.boot();
    console.app.run_until_idle().await;
    console.app.navigate(View::Crashes);
    console.app.run_until_idle().await;
    console.http.clear_requests();

    console.app.cycle_user(true);
    console.app.run_until_idle().await;

    assert_eq!(console.app.router.user(), "alice");
    assert_eq!(console.queries("/admin/crashes"), vec!["user=alice"]);
    assert_eq!(console.queries("/admin/crashes/summary"), vec!["user=alice"]);
}

#[tokio::test(start_paused = true)]
async fn test_leaving_view_drops_pending_search() {
    let mut console = open_crashes().await;
    console.app.crashes.editing = Some(CrashField::Query);
    console.app.type_crash_char('z');

    console.app.navigate(View::Sessions);
    console.app.run_until_idle().await;
    tokio::time::advance(Duration::from_secs(1)).await;
    console.app.drain_messages();

    assert!(console.queries("/admin/crashes").is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_signature_summary_shows_counts_and_chart() {
    let mut console = TestConsole::new();
    console.respond(
        "/admin/crashes",
        json!([
            {"crash_id": 1, "exception_code": "0xc0000005", "faulting_module": "app.dll", "event_id": 1000},
            {"crash_id": 2, "exception_code": "0xc0000005", "faulting_module": "app.dll", "event_id": 1000},
            {"crash_id": 3, "exception_code": "0xc0000005", "faulting_module": "app.dll", "event_id": 1000},
            {"crash_id": 4, "exception_code": "0xc0000409", "faulting_module": "ucrtbase.dll", "event_id": 1001}
        ]),
    );
    console.respond(
        "/admin/crashes/summary",
        json!([
            {"signature": "0xc0000005 | app.dll | 1000", "count": 3, "last_seen": "2025-03-02", "example": "access violation"},
            {"signature": "0xc0000409 | ucrtbase.dll | 1001", "count": 1, "last_seen": "2025-03-01", "example": "stack overrun"}
        ]),
    );
    console.app.navigate(View::Crashes);
    console.app.run_until_idle().await;

    let summary = console.app.crashes.summary().unwrap();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].signature, "0xc0000005 | app.dll | 1000");
    assert_eq!(summary[0].count, 3);
    assert_eq!(summary[1].count, 1);

    let chart = console.app.crashes.registry.get(SUMMARY_CHART_KEY).unwrap();
    assert_eq!(chart.series().values, vec![3.0, 1.0]);
    assert_eq!(console.app.crashes.list().unwrap()[0].crash_id, "1");
}

#[tokio::test(start_paused = true)]
async fn test_row_selection_is_exclusive() {
    let mut console = TestConsole::new();
    console.respond(
        "/admin/crashes",
        json!([{"crash_id": "a"}, {"crash_id": "b"}, {"crash_id": "c"}]),
    );
    console.app.navigate(View::Crashes);
    console.app.run_until_idle().await;

    assert!(console.app.crashes.select(0));
    assert!(console.app.crashes.select(2));

    let selection = &console.app.crashes.selection;
    assert_eq!(selection.index(), Some(2));
    assert!(!selection.is_selected(0));
    assert!(selection.is_selected(2));
    assert!(console.app.crashes.detail_text().contains("Crash ID: c"));

    assert!(!console.app.crashes.select(7));
    assert_eq!(console.app.crashes.selection.index(), Some(2));
}

#[tokio::test(start_paused = true)]
async fn test_failed_search_reports_status() {
    let mut console = open_crashes().await;
    console
        .http
        .set_status(&common::url("/admin/crashes"), 500, "database locked");

    console.app.apply_crash_filters();
    console.app.run_until_idle().await;

    assert!(console.app.status.is_error);
    assert_eq!(console.app.status.text, "Error: 500 database locked");
}

#[tokio::test(start_paused = true)]
async fn test_superseded_search_result_is_dropped() {
    let mut console = open_crashes().await;
    let installs_before = console.pool.acquired();
    console.respond("/admin/crashes", json!([{"crash_id": "old"}]));
    console.app.crashes.editing = Some(CrashField::Query);
    for c in "old".chars() {
        console.app.type_crash_char(c);
    }
    console.app.apply_crash_filters();

    // Let the first search answer before the second is issued.
    while console.queries("/admin/crashes/summary").is_empty() {
        tokio::task::yield_now().await;
    }

    console.respond("/admin/crashes", json!([{"crash_id": "new"}]));
    for _ in 0.."old".len() {
        console.app.crash_backspace();
    }
    for c in "new".chars() {
        console.app.type_crash_char(c);
    }
    console.app.apply_crash_filters();
    console.app.run_until_idle().await;

    assert_eq!(console.queries("/admin/crashes"), vec!["q=old", "q=new"]);
    let list = console.app.crashes.list().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].crash_id, "new");
    assert_eq!(console.pool.acquired(), installs_before + 1);
    assert!(console.app.is_idle());
}
