use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{BookingStore, StoreError};
use crate::booking::BookingKey;
use crate::models::booking::{Booking, NewBooking};

#[derive(Default)]
struct Inner {
    next_id: i64,
    bookings: Vec<Booking>,
}

/// In-process booking store. Clones share the same records.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`]
    /// until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.lock().bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store switched off".to_string()));
        }
        Ok(())
    }
}

impl BookingStore for MemoryStore {
    async fn insert(&self, booking: &NewBooking) -> Result<i64, StoreError> {
        self.check_available()?;
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.bookings.push(Booking::from_new(id, booking));
        Ok(id)
    }

    async fn find_by_key(&self, key: &BookingKey) -> Result<Vec<Booking>, StoreError> {
        self.check_available()?;
        Ok(self
            .lock()
            .bookings
            .iter()
            .filter(|b| b.key() == *key)
            .cloned()
            .collect())
    }

    async fn list(&self) -> Result<Vec<Booking>, StoreError> {
        self.check_available()?;
        Ok(self.lock().bookings.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut inner = self.lock();
        let before = inner.bookings.len();
        inner.bookings.retain(|b| b.id != id);
        Ok(inner.bookings.len() != before)
    }
}
