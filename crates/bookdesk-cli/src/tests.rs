use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use bookdesk_core::config::DEFAULT_BASE_URL;
use bookdesk_core::{Booking, BookingsClient, ServiceConfig, FALLBACK_ERROR_MESSAGE};
use clap::Parser;
use pretty_assertions::assert_eq;

use crate::cli::{Cli, Commands, CompletionShell};
use crate::commands::common::{
    fetch_bookings, find_booking, format_booking_detail, format_booking_lines,
    resolve_service_config,
};
use crate::commands::completions::{render_completions, run_completions};
use crate::commands::list::{render_list, NO_BOOKINGS_FOUND};
use crate::error::CliError;

const FIXTURE: &str = include_str!("../../bookdesk-core/tests/fixtures/bookings.json");

fn fixture_bookings() -> Vec<Booking> {
    serde_json::from_str(FIXTURE).unwrap()
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

#[test]
fn service_config_prefers_flag_over_env() {
    let config = resolve_service_config(
        Some("http://localhost:5000/".to_string()),
        Some("https://env.example.com".to_string()),
        None,
    )
    .unwrap();
    assert_eq!(config.base_url(), "http://localhost:5000");

    let config =
        resolve_service_config(None, Some("https://env.example.com".to_string()), Some(3))
            .unwrap();
    assert_eq!(config.base_url(), "https://env.example.com");
    assert_eq!(config.timeout(), Some(Duration::from_secs(3)));
}

#[test]
fn service_config_defaults_to_hosted_service() {
    let config = resolve_service_config(None, Some("  ".to_string()), None).unwrap();
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn service_config_rejects_schemeless_url() {
    assert!(matches!(
        resolve_service_config(Some("bookings.local".to_string()), None, None),
        Err(CliError::Core(_))
    ));
}

#[test]
fn format_booking_lines_has_one_line_per_booking() {
    let lines = format_booking_lines(&fixture_bookings());
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("BK-2024-001"));
    assert!(lines[0].contains("pending"));
    assert!(lines[0].contains("Raj Kumar"));
    assert!(lines[0].ends_with("Delhi → Agra"));
    assert!(lines[1].contains("DL 02 CD 5678"));
}

#[test]
fn render_list_applies_search_and_status() {
    let bookings = fixture_bookings();

    let rendered = render_list(&bookings, Some("2024-001"), "all", false).unwrap();
    assert_eq!(rendered.lines().count(), 1);
    assert!(rendered.starts_with("BK-2024-001"));

    let rendered = render_list(&bookings, None, "CONFIRMED", false).unwrap();
    assert_eq!(rendered.lines().count(), 1);
    assert!(rendered.starts_with("BK-2024-002"));

    let rendered = render_list(&bookings, None, "rejected", false).unwrap();
    assert_eq!(rendered, NO_BOOKINGS_FOUND);
}

#[test]
fn render_list_json_is_an_array_of_matches() {
    let rendered = render_list(&fixture_bookings(), Some("priya"), "all", true).unwrap();
    let parsed: Vec<Booking> = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].booking_number, "BK-2024-002");

    let empty = render_list(&fixture_bookings(), Some("nobody"), "all", true).unwrap();
    assert_eq!(empty, "[]");
}

#[test]
fn find_booking_matches_id_or_booking_number() {
    let bookings = fixture_bookings();
    assert_eq!(
        find_booking(&bookings, "2").unwrap().booking_number,
        "BK-2024-002"
    );
    assert_eq!(
        find_booking(&bookings, " bk-2024-001 ").unwrap().id,
        "1"
    );
    assert!(matches!(
        find_booking(&bookings, "BK-9999"),
        Err(CliError::BookingNotFound(_))
    ));
    assert!(matches!(
        find_booking(&bookings, "  "),
        Err(CliError::EmptyBookingId)
    ));
}

#[test]
fn format_booking_detail_includes_optional_sections() {
    let bookings = fixture_bookings();
    let lines = format_booking_detail(&bookings[0]);
    assert_eq!(lines[0], "BK-2024-001 (pending)");
    assert!(lines.iter().any(|line| line.contains("Ramesh Kumar")));
    assert!(lines.iter().any(|line| line.contains("2024-01-15 – 2024-01-17")));
    assert!(lines
        .iter()
        .any(|line| line.contains("total 45000, advance 15000, balance 30000")));
}

#[test]
fn cli_parses_list_defaults() {
    let cli = Cli::parse_from(["bookdesk", "list"]);
    match cli.command {
        Commands::List {
            search,
            status,
            json,
        } => {
            assert_eq!(search, None);
            assert_eq!(status, "all");
            assert!(!json);
        }
        _ => panic!("expected list command"),
    }
    assert_eq!(cli.base_url, None);
}

#[test]
fn cli_accepts_global_base_url_after_subcommand() {
    let cli = Cli::parse_from([
        "bookdesk",
        "show",
        "BK-2024-001",
        "--base-url",
        "http://localhost:5000",
    ]);
    assert_eq!(cli.base_url.as_deref(), Some("http://localhost:5000"));
    assert!(matches!(cli.command, Commands::Show { .. }));
}

#[test]
fn log_filter_includes_core_client_logs() {
    let directives = crate::log_filter().to_string();
    assert!(directives.contains("bookdesk_cli=info"));
    assert!(directives.contains("bookdesk_core=info"));
}

#[test]
fn completions_mention_binary_name() {
    for shell in [
        CompletionShell::Bash,
        CompletionShell::Zsh,
        CompletionShell::Fish,
    ] {
        let script = String::from_utf8(render_completions(shell)).unwrap();
        assert!(script.contains("bookdesk"), "{shell:?} script");
        assert!(script.contains("statuses"), "{shell:?} script");
    }
}

#[test]
fn completions_can_be_written_to_a_file() {
    let path = std::env::temp_dir().join(format!(
        "bookdesk-completions-{}.fish",
        std::process::id()
    ));
    run_completions(CompletionShell::Fish, Some(&path)).unwrap();

    let written = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, render_completions(CompletionShell::Fish));
}

#[tokio::test(flavor = "current_thread")]
async fn fetch_bookings_surfaces_service_message() {
    let router = Router::new().route(
        "/api/bookings",
        get(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "message": "Service unavailable" })),
            )
        }),
    );
    let addr = serve(router).await;
    let client =
        BookingsClient::new(ServiceConfig::new(format!("http://{addr}")).unwrap()).unwrap();

    let error = fetch_bookings(&client).await.unwrap_err();
    assert_eq!(error.to_string(), "Service unavailable");
}

#[tokio::test(flavor = "current_thread")]
async fn fetch_bookings_falls_back_without_message() {
    let router = Router::new().route("/api/bookings", get(|| async { StatusCode::BAD_GATEWAY }));
    let addr = serve(router).await;
    let client =
        BookingsClient::new(ServiceConfig::new(format!("http://{addr}")).unwrap()).unwrap();

    let error = fetch_bookings(&client).await.unwrap_err();
    assert_eq!(error.to_string(), FALLBACK_ERROR_MESSAGE);
}

#[tokio::test(flavor = "current_thread")]
async fn fetch_bookings_returns_fixture_records() {
    let router = Router::new().route("/api/bookings", get(|| async { FIXTURE }));
    let addr = serve(router).await;
    let client =
        BookingsClient::new(ServiceConfig::new(format!("http://{addr}")).unwrap()).unwrap();

    let bookings = fetch_bookings(&client).await.unwrap();
    assert_eq!(bookings, fixture_bookings());
}
