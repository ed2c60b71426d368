mod common;

use classbook::booking::service::{self, SubmitOutcome};
use classbook::booking::{Advisory, BookingRequest, Rejection};
use classbook::store::{BookingStore, MemoryStore, StoreError};
use common::*;

#[tokio::test]
async fn test_submit_valid_request_books() {
    let store = MemoryStore::new();

    let outcome = service::submit(&store, identity(), &valid_request())
        .await
        .expect("submit");

    match outcome {
        SubmitOutcome::Booked { id, advisory } => {
            assert!(id > 0);
            assert_eq!(advisory, Some(Advisory::GroundFloor));
        }
        other => panic!("Expected Booked, got {other:?}"),
    }

    let stored = store.list().await.expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user_id, TEST_USER_ID);
    assert_eq!(stored[0].classroom, "G1");
    assert_eq!(stored[0].students_strength, 60);
}

#[tokio::test]
async fn test_submit_same_key_twice_conflicts() {
    let store = MemoryStore::new();
    let req = valid_request();

    let first = service::submit(&store, identity(), &req).await.expect("first");
    assert!(matches!(first, SubmitOutcome::Booked { .. }));

    // Different requester and strength, same classroom/date/slot.
    let second_req = BookingRequest {
        name: "Someone Else".to_string(),
        students_strength: "100".to_string(),
        ..req.clone()
    };
    let second = service::submit(&store, identity(), &second_req)
        .await
        .expect("second");
    assert_eq!(second, SubmitOutcome::Conflict);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_submit_other_classroom_same_slot_books() {
    let store = MemoryStore::new();
    service::submit(&store, identity(), &valid_request())
        .await
        .expect("first");

    let other_room = BookingRequest {
        classroom: "G2".to_string(),
        ..valid_request()
    };
    let outcome = service::submit(&store, identity(), &other_room)
        .await
        .expect("second");
    assert!(matches!(outcome, SubmitOutcome::Booked { .. }));
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_submit_rejected_request_not_stored() {
    let store = MemoryStore::new();

    let outcome = service::submit(&store, identity(), &with_times("09:00 AM", "09:30 AM"))
        .await
        .expect("submit");

    assert_eq!(outcome, SubmitOutcome::Rejected(Rejection::SlotNotAllowed));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_submit_unknown_classroom() {
    let store = MemoryStore::new();
    let req = BookingRequest {
        classroom: "Z99".to_string(),
        ..valid_request()
    };

    let outcome = service::submit(&store, identity(), &req).await.expect("submit");
    assert_eq!(outcome, SubmitOutcome::UnknownClassroom);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_rejection_does_not_touch_store() {
    let store = MemoryStore::new();
    store.set_unavailable(true);

    let outcome = service::submit(&store, identity(), &with_strength("181"))
        .await
        .expect("validation failure is not a store error");
    assert_eq!(outcome, SubmitOutcome::Rejected(Rejection::StrengthExceeded));
}

#[tokio::test]
async fn test_submit_store_unavailable_errors() {
    let store = MemoryStore::new();
    store.set_unavailable(true);

    let result = service::submit(&store, identity(), &valid_request()).await;
    assert!(matches!(result, Err(StoreError::Unavailable(_))));

    store.set_unavailable(false);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_remove_booking() {
    let store = MemoryStore::new();
    let id = match service::submit(&store, identity(), &valid_request())
        .await
        .expect("submit")
    {
        SubmitOutcome::Booked { id, .. } => id,
        other => panic!("Expected Booked, got {other:?}"),
    };

    assert!(service::remove(&store, id).await.expect("remove"));
    assert!(store.is_empty());
    assert!(!service::remove(&store, id).await.expect("remove again"));

    // The slot is free again.
    let rebooked = service::submit(&store, identity(), &valid_request())
        .await
        .expect("rebook");
    assert!(matches!(rebooked, SubmitOutcome::Booked { .. }));
}

#[tokio::test]
async fn test_capacity_strength_stored_exactly() {
    let store = MemoryStore::new();

    let outcome = service::submit(&store, identity(), &with_strength("180"))
        .await
        .expect("submit");
    assert!(matches!(outcome, SubmitOutcome::Booked { advisory: None, .. }));

    let stored = store.list().await.expect("list");
    assert_eq!(stored[0].students_strength, 180);
}
