//! End-to-end session flow against the built-in menu

use std::sync::Arc;
use std::time::Duration;

use delizia_session::console::{self, ConsoleCommand};
use delizia_session::{CatalogProvider, Config, SessionError, SessionStore, StaticCatalog};
use shared::error::{AppError, ErrorCode};
use shared::message::SessionEventType;
use shared::models::{CategorySelection, ReservationStatus};

fn builtin_store() -> SessionStore {
    let config = Config::with_overrides(None, 4000);
    let catalog = StaticCatalog::load(&config).unwrap();
    SessionStore::new(Arc::new(catalog), &config)
}

fn run(store: &SessionStore, line: &str) -> Result<(), SessionError> {
    match console::parse_line(line).unwrap() {
        ConsoleCommand::Intent(intent) => store.dispatch(intent),
        other => panic!("not an intent: {:?}", other),
    }
}

async fn advance_ms(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

#[test]
fn test_browse_and_fill_cart() {
    let store = builtin_store();
    let categories = store.categories();
    assert_eq!(categories.first().map(String::as_str), Some("Pizza"));

    run(&store, "add p1").unwrap();
    run(&store, "add p1").unwrap();
    run(&store, "add d1").unwrap();
    run(&store, "category Salad").unwrap();

    let snapshot = store.snapshot();
    assert_eq!(
        snapshot.selection,
        CategorySelection::Only("Salad".to_string())
    );
    assert!(snapshot.visible_catalog.iter().all(|d| d.category == "Salad"));
    assert_eq!(snapshot.cart_item_count, 2);

    let p1 = store.catalog().find("p1").unwrap().price;
    let d1 = store.catalog().find("d1").unwrap().price;
    assert_eq!(snapshot.cart_subtotal, p1 * rust_decimal::Decimal::from(2) + d1);

    run(&store, "category Salad").unwrap();
    assert_eq!(store.visible_catalog().len(), store.catalog().dishes().len());
}

#[tokio::test(start_paused = true)]
async fn test_reservation_round_trip() {
    let store = builtin_store();
    let mut rx = store.subscribe();

    run(&store, "set name Ada Obi").unwrap();
    let err = run(&store, "reserve").unwrap_err();
    let app_error = AppError::from(err);
    assert_eq!(app_error.code, ErrorCode::ReservationIncomplete);
    assert_eq!(store.status(), ReservationStatus::Idle);

    run(&store, "set phone +234 123 456 789").unwrap();
    run(&store, "set date 2026-10-24").unwrap();
    run(&store, "time 8:00 PM").unwrap();
    run(&store, "guests +5").unwrap();
    run(&store, "reserve").unwrap();

    assert_eq!(store.status(), ReservationStatus::Confirmed);
    assert!(store.draft().is_default());
    assert!(console::render(&store.snapshot()).contains("Reservation received"));

    advance_ms(4001).await;
    assert_eq!(store.status(), ReservationStatus::Idle);

    store.close();
    assert!(matches!(run(&store, "add p1"), Err(SessionError::Closed)));

    let mut seen = Vec::new();
    while let Ok(event) = rx.try_recv() {
        seen.push(event.event_type);
    }
    assert_eq!(
        &seen[seen.len() - 3..],
        &[
            SessionEventType::ReservationConfirmed,
            SessionEventType::ReservationExpired,
            SessionEventType::SessionClosed,
        ]
    );
}
