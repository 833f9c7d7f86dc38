//! Check-in Repository Port - Persistence for preferences, daily records,
//! cached advice and the last check-in marker.

use async_trait::async_trait;

use crate::domain::advice::AdviceResult;
use crate::domain::checkin::{DailyInteractionRecord, UserPreferences};
use crate::domain::foundation::{CalendarDay, DomainError, ErrorCode};

/// Errors that can occur during repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Failed to serialize {key}: {message}")]
    SerializationFailed { key: String, message: String },

    #[error("Failed to deserialize {key}: {message}")]
    DeserializationFailed { key: String, message: String },

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::IoError(err.to_string())
    }
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for everything the check-in flow persists.
///
/// `date` uniquely keys daily records and advice: saving for a day that
/// already has an entry replaces it.
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    async fn load_preferences(&self) -> Result<Option<UserPreferences>, RepositoryError>;

    async fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), RepositoryError>;

    /// All records, oldest first.
    async fn list_records(&self) -> Result<Vec<DailyInteractionRecord>, RepositoryError>;

    async fn find_record(
        &self,
        day: CalendarDay,
    ) -> Result<Option<DailyInteractionRecord>, RepositoryError> {
        Ok(self
            .list_records()
            .await?
            .into_iter()
            .find(|record| record.date() == day))
    }

    async fn save_record(&self, record: &DailyInteractionRecord) -> Result<(), RepositoryError>;

    async fn delete_records_for(&self, day: CalendarDay) -> Result<(), RepositoryError>;

    async fn load_advice(&self, day: CalendarDay) -> Result<Option<AdviceResult>, RepositoryError>;

    async fn save_advice(&self, advice: &AdviceResult) -> Result<(), RepositoryError>;

    async fn delete_advice(&self, day: CalendarDay) -> Result<(), RepositoryError>;

    async fn last_check_in(&self) -> Result<Option<CalendarDay>, RepositoryError>;

    async fn mark_checked_in(&self, day: CalendarDay) -> Result<(), RepositoryError>;

    async fn clear_check_in(&self) -> Result<(), RepositoryError>;

    /// Removes everything, preferences included.
    async fn clear_all(&self) -> Result<(), RepositoryError>;
}
