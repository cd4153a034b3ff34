//! View switching, boot flow and chart surface lifetime.

mod common;

use common::TestConsole;
use trackdeck::models::ChartMetric;
use trackdeck::view_state::View;

#[tokio::test(start_paused = true)]
async fn test_boot_loads_users_then_current_view() {
    let mut console = TestConsole::new();
    console.app.boot();
    assert_eq!(console.app.status.text, "Connecting...");

    console.app.run_until_idle().await;

    assert_eq!(
        console.app.router.user_filter().options(),
        &["alice".to_string(), "bob".to_string()]
    );
    assert_eq!(console.app.overview.as_ref().map(|o| o.users_count), Some(2));
    assert_eq!(console.app.status.text, "Connected.");
    assert!(!console.app.status.is_error);
    assert!(!console.app.booting);
}

#[tokio::test(start_paused = true)]
async fn test_boot_failure_reports_and_stops() {
    let mut console = TestConsole::new();
    console
        .http
        .set_status(&common::url("/admin/users"), 401, "unauthorized");

    console.app.boot();
    console.app.run_until_idle().await;

    assert!(console.app.status.is_error);
    assert_eq!(console.app.status.text, "Error: 401 unauthorized");
    assert!(console.queries("/admin/overview").is_empty());
    assert!(console.app.overview.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_repeated_navigation_keeps_surfaces_bounded() {
    let mut console = TestConsole::new();

    for _ in 0..5 {
        console.app.navigate(View::Visuals);
        console.app.run_until_idle().await;
        assert_eq!(console.app.visuals.registry.len(), 11);
        assert_eq!(console.pool.live(), 11);

        console.app.navigate(View::Crashes);
        console.app.run_until_idle().await;
        assert_eq!(console.app.visuals.registry.len(), 0);
        assert_eq!(console.app.crashes.registry.len(), 1);
        assert_eq!(console.pool.live(), 1);

        console.app.navigate(View::Overview);
        console.app.run_until_idle().await;
        assert_eq!(console.app.crashes.registry.len(), 0);
        assert_eq!(console.pool.live(), 0);
    }
}

#[tokio::test(start_paused = true)]
async fn test_reentering_visuals_rebuilds_without_leaks() {
    let mut console = TestConsole::new();
    for _ in 0..3 {
        console.app.navigate(View::Visuals);
        console.app.run_until_idle().await;
    }
    assert_eq!(console.pool.live(), 11);
    assert_eq!(console.pool.acquired(), 33);
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_rebuilds_apply_only_latest() {
    let mut console = TestConsole::new();
    console.app.navigate(View::Visuals);
    console.app.load_all_charts();
    console.app.load_all_charts();
    console.app.run_until_idle().await;

    assert_eq!(console.app.visuals.registry.len(), 11);
    assert_eq!(console.pool.live(), 11);
    assert_eq!(console.pool.acquired(), 11);
    assert!(console.app.is_idle());
}

#[tokio::test(start_paused = true)]
async fn test_leaving_visuals_mid_load_builds_nothing() {
    let mut console = TestConsole::new();
    console.app.navigate(View::Visuals);
    console.app.navigate(View::Sessions);
    console.app.run_until_idle().await;

    assert_eq!(console.pool.acquired(), 0);
    assert!(console.app.visuals.registry.is_empty());
    assert!(console.app.sessions.is_loaded());
}

#[tokio::test(start_paused = true)]
async fn test_superseded_view_load_is_dropped() {
    let mut console = TestConsole::new();
    console.respond(
        "/admin/sessions",
        serde_json::json!([{"session_id": 1, "user_id": "alice"}]),
    );

    console.app.navigate(View::Sessions);
    console.app.navigate(View::Logs);
    console.app.run_until_idle().await;

    assert!(!console.app.sessions.is_loaded());
    assert!(console.app.logs.is_loaded());
    assert_eq!(console.app.router.current(), View::Logs);
}

#[tokio::test(start_paused = true)]
async fn test_user_filter_survives_filtered_views_only() {
    let mut console = TestConsole::new();
    console.app.boot();
    console.app.run_until_idle().await;

    console.app.navigate(View::Sessions);
    console.app.run_until_idle().await;
    console.app.cycle_user(true);
    console.app.run_until_idle().await;
    assert_eq!(console.queries("/admin/sessions").last().map(String::as_str), Some("user=alice"));

    console.app.navigate(View::Logs);
    console.app.run_until_idle().await;
    assert_eq!(console.queries("/admin/logs"), vec!["user=alice"]);

    console.app.navigate(View::Overview);
    console.app.run_until_idle().await;
    assert_eq!(console.app.router.user(), "");

    console.app.cycle_user(true);
    console.app.run_until_idle().await;
    assert_eq!(console.app.router.user(), "");
}

#[tokio::test(start_paused = true)]
async fn test_boot_on_visuals_reports_chart_failure() {
    let mut console = TestConsole::new();
    for metric in ChartMetric::ALL {
        console.http.set_status(
            &common::url(&format!("/admin/charts/{}", metric.endpoint())),
            401,
            "Unauthorized",
        );
    }
    console.app.navigate(View::Visuals);
    console.app.run_until_idle().await;

    console.app.boot();
    console.app.run_until_idle().await;

    assert!(console.app.status.is_error);
    assert_eq!(console.app.status.text, "Error: 401 Unauthorized");
    assert!(!console.app.booting);
}
