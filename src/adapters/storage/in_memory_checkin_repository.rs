//! In-memory Check-in Repository Adapter
//!
//! Keeps everything in process memory. Used in tests and when the service
//! runs with the `memory` storage backend.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::advice::AdviceResult;
use crate::domain::checkin::{DailyInteractionRecord, UserPreferences};
use crate::domain::foundation::CalendarDay;
use crate::ports::{CheckInRepository, RepositoryError};

#[derive(Debug, Default)]
struct Store {
    preferences: Option<UserPreferences>,
    records: BTreeMap<CalendarDay, DailyInteractionRecord>,
    advice: BTreeMap<CalendarDay, AdviceResult>,
    last_check_in: Option<CalendarDay>,
}

/// In-memory implementation of the CheckInRepository port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCheckInRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryCheckInRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored daily records.
    pub async fn record_count(&self) -> usize {
        self.store.read().await.records.len()
    }
}

#[async_trait]
impl CheckInRepository for InMemoryCheckInRepository {
    async fn load_preferences(&self) -> Result<Option<UserPreferences>, RepositoryError> {
        Ok(self.store.read().await.preferences.clone())
    }

    async fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), RepositoryError> {
        self.store.write().await.preferences = Some(preferences.clone());
        Ok(())
    }

    async fn list_records(&self) -> Result<Vec<DailyInteractionRecord>, RepositoryError> {
        Ok(self.store.read().await.records.values().cloned().collect())
    }

    async fn find_record(
        &self,
        day: CalendarDay,
    ) -> Result<Option<DailyInteractionRecord>, RepositoryError> {
        Ok(self.store.read().await.records.get(&day).cloned())
    }

    async fn save_record(&self, record: &DailyInteractionRecord) -> Result<(), RepositoryError> {
        self.store
            .write()
            .await
            .records
            .insert(record.date(), record.clone());
        Ok(())
    }

    async fn delete_records_for(&self, day: CalendarDay) -> Result<(), RepositoryError> {
        self.store.write().await.records.remove(&day);
        Ok(())
    }

    async fn load_advice(&self, day: CalendarDay) -> Result<Option<AdviceResult>, RepositoryError> {
        Ok(self.store.read().await.advice.get(&day).cloned())
    }

    async fn save_advice(&self, advice: &AdviceResult) -> Result<(), RepositoryError> {
        self.store
            .write()
            .await
            .advice
            .insert(advice.date, advice.clone());
        Ok(())
    }

    async fn delete_advice(&self, day: CalendarDay) -> Result<(), RepositoryError> {
        self.store.write().await.advice.remove(&day);
        Ok(())
    }

    async fn last_check_in(&self) -> Result<Option<CalendarDay>, RepositoryError> {
        Ok(self.store.read().await.last_check_in)
    }

    async fn mark_checked_in(&self, day: CalendarDay) -> Result<(), RepositoryError> {
        self.store.write().await.last_check_in = Some(day);
        Ok(())
    }

    async fn clear_check_in(&self) -> Result<(), RepositoryError> {
        self.store.write().await.last_check_in = None;
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), RepositoryError> {
        *self.store.write().await = Store::default();
        Ok(())
    }
}
