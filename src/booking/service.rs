//! Submission and removal of bookings against a [`BookingStore`].
//!
//! The duplicate check and the insert are two separate store calls. Two
//! sessions submitting the same key at the same moment can both pass the
//! check and both insert; nothing here or in the schema prevents that.

use crate::models::booking::NewBooking;
use crate::models::classroom;
use crate::store::{BookingStore, StoreError};

use super::request::BookingRequest;
use super::validator::{Advisory, Rejection, Verdict, validate};

/// The signed-in user a booking is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Booked { id: i64, advisory: Option<Advisory> },
    Rejected(Rejection),
    /// The classroom is not one the catalog offers.
    UnknownClassroom,
    /// Another booking already holds this classroom, date and time range.
    Conflict,
}

/// Validate `request` and, when it passes, store it for `identity` unless the
/// slot is already taken.
pub async fn submit<S: BookingStore>(
    store: &S,
    identity: Identity,
    request: &BookingRequest,
) -> Result<SubmitOutcome, StoreError> {
    let (strength, advisory) = match validate(request) {
        Verdict::Accepted { strength, advisory } => (strength, advisory),
        Verdict::Rejected(rejection) => return Ok(SubmitOutcome::Rejected(rejection)),
    };

    if classroom::find(&request.classroom).is_none() {
        return Ok(SubmitOutcome::UnknownClassroom);
    }

    let existing = store.find_by_key(&request.key()).await?;
    if !existing.is_empty() {
        log::info!(
            "Booking conflict for {} on {} {}-{}",
            request.classroom,
            request.date,
            request.start_time,
            request.end_time
        );
        return Ok(SubmitOutcome::Conflict);
    }

    let new = NewBooking::from_request(identity.user_id, request, strength);
    let id = store.insert(&new).await?;
    log::info!("User {} booked {} (booking {id})", identity.user_id, request.classroom);

    Ok(SubmitOutcome::Booked { id, advisory })
}

/// Remove a booking. Returns `false` when it was already gone.
pub async fn remove<S: BookingStore>(store: &S, id: i64) -> Result<bool, StoreError> {
    let removed = store.delete(id).await?;
    if removed {
        log::info!("Deleted booking {id}");
    }
    Ok(removed)
}
