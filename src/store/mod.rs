//! Persistence seam for bookings.
//!
//! The booking service only needs four operations from a store. `PgPool`
//! implements them against PostgreSQL (see `models::booking::queries`);
//! [`MemoryStore`] keeps records in process.

mod memory;

pub use memory::MemoryStore;

use std::fmt;

use crate::booking::BookingKey;
use crate::models::booking::{Booking, NewBooking};

#[derive(Debug)]
pub enum StoreError {
    Db(sqlx::Error),
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Db(e) => write!(f, "Store database error: {e}"),
            StoreError::Unavailable(e) => write!(f, "Store unavailable: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Db(e)
    }
}

#[allow(async_fn_in_trait)]
pub trait BookingStore {
    /// Persist a booking and return its id.
    async fn insert(&self, booking: &NewBooking) -> Result<i64, StoreError>;

    /// All bookings occupying the same classroom, date and time range.
    async fn find_by_key(&self, key: &BookingKey) -> Result<Vec<Booking>, StoreError>;

    /// Every booking, oldest first.
    async fn list(&self) -> Result<Vec<Booking>, StoreError>;

    /// Remove a booking. `Ok(false)` when no booking had that id.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
