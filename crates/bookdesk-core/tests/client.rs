//! Bookings client against a local HTTP server.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use bookdesk_core::client::FetchError;
use bookdesk_core::{
    BookingListState, BookingsClient, ListView, ServiceConfig, StatusFilter,
    FALLBACK_ERROR_MESSAGE,
};
use pretty_assertions::assert_eq;
use tokio_util::sync::CancellationToken;

const FIXTURE: &str = include_str!("fixtures/bookings.json");

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> BookingsClient {
    let config = ServiceConfig::new(format!("http://{addr}/")).unwrap();
    BookingsClient::new(config).unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn fetches_fixture_bookings_in_order() {
    let router = Router::new().route(
        "/api/bookings",
        get(|| async {
            (
                [(axum::http::header::CONTENT_TYPE, "application/json")],
                FIXTURE,
            )
        }),
    );
    let client = client_for(serve(router).await);

    let bookings = client.fetch_bookings().await.unwrap();
    let numbers: Vec<&str> = bookings
        .iter()
        .map(|b| b.booking_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["BK-2024-001", "BK-2024-002"]);
    assert_eq!(bookings[0].id, "1");
    assert_eq!(bookings[0].route().as_deref(), Some("Delhi → Agra"));
    assert_eq!(
        bookings[1].payment.as_ref().and_then(|p| p.balance),
        Some(25000.0)
    );
}

#[tokio::test(flavor = "current_thread")]
async fn fixture_drives_list_scenario() {
    let router = Router::new().route("/api/bookings", get(|| async { FIXTURE }));
    let client = client_for(serve(router).await);

    let mut state = BookingListState::new();
    state.begin_fetch();
    state.finish_fetch(client.fetch_bookings().await);

    state.set_search_query("2024-001");
    match state.view() {
        ListView::Rows(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].booking_number, "BK-2024-001");
        }
        other => panic!("expected rows, got {other:?}"),
    }

    state.set_search_query("");
    state.set_status_filter(StatusFilter::parse("confirmed"));
    match state.view() {
        ListView::Rows(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].booking_number, "BK-2024-002");
        }
        other => panic!("expected rows, got {other:?}"),
    }

    state.set_status_filter(StatusFilter::parse("rejected"));
    assert_eq!(state.view(), ListView::Empty);
}

#[tokio::test(flavor = "current_thread")]
async fn rejection_with_message_is_shown_verbatim() {
    let router = Router::new().route(
        "/api/bookings",
        get(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "message": "Service unavailable" })),
            )
        }),
    );
    let client = client_for(serve(router).await);

    let error = client.fetch_bookings().await.unwrap_err();
    assert_eq!(
        error,
        FetchError::Rejected {
            status: 503,
            message: Some("Service unavailable".to_string()),
        }
    );

    let mut state = BookingListState::new();
    state.finish_fetch(Err(error));
    assert!(!state.is_loading());
    assert_eq!(
        state.view(),
        ListView::Error("Service unavailable".to_string())
    );
}

#[tokio::test(flavor = "current_thread")]
async fn rejection_without_body_uses_fallback() {
    let router = Router::new().route(
        "/api/bookings",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = client_for(serve(router).await);

    let error = client.fetch_bookings().await.unwrap_err();
    assert_eq!(
        error,
        FetchError::Rejected {
            status: 500,
            message: None,
        }
    );
    assert_eq!(error.user_message(), FALLBACK_ERROR_MESSAGE);
}

#[tokio::test(flavor = "current_thread")]
async fn unexpected_success_body_is_a_decode_error() {
    let router = Router::new().route("/api/bookings", get(|| async { "not json" }));
    let client = client_for(serve(router).await);

    let error = client.fetch_bookings().await.unwrap_err();
    assert!(matches!(error, FetchError::Decode(_)));
    assert_eq!(error.user_message(), FALLBACK_ERROR_MESSAGE);
}

#[tokio::test(flavor = "current_thread")]
async fn unreachable_service_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let error = client_for(addr).fetch_bookings().await.unwrap_err();
    assert!(matches!(error, FetchError::Transport(_)));
    assert_eq!(error.user_message(), FALLBACK_ERROR_MESSAGE);
}

#[tokio::test(flavor = "current_thread")]
async fn cancellation_stops_waiting_for_slow_service() {
    let router = Router::new().route(
        "/api/bookings",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            "[]"
        }),
    );
    let client = client_for(serve(router).await);

    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let result = client.fetch_bookings_until_cancelled(&token).await;
    assert_eq!(result, Err(FetchError::Cancelled));

    let mut state = BookingListState::new();
    assert!(!state.finish_fetch(result));
    assert_eq!(state.view(), ListView::Loading);
}

#[tokio::test(flavor = "current_thread")]
async fn configured_timeout_fails_slow_requests() {
    let router = Router::new().route(
        "/api/bookings",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            "[]"
        }),
    );
    let addr = serve(router).await;
    let config = ServiceConfig::new(format!("http://{addr}"))
        .unwrap()
        .with_timeout(Some(Duration::from_millis(100)));
    let client = BookingsClient::new(config).unwrap();

    let error = client.fetch_bookings().await.unwrap_err();
    assert!(matches!(error, FetchError::Transport(_)));
}
