//! File-based Check-in Repository Adapter
//!
//! Stores state as JSON files under a base directory:
//!
//! ```text
//! <base>/user_preferences.json
//! <base>/daily_records.json
//! <base>/last_check_in
//! <base>/advice/<YYYY-MM-DD>.json
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::advice::AdviceResult;
use crate::domain::checkin::{DailyInteractionRecord, UserPreferences};
use crate::domain::foundation::CalendarDay;
use crate::ports::{CheckInRepository, RepositoryError};

const PREFERENCES_FILE: &str = "user_preferences.json";
const RECORDS_FILE: &str = "daily_records.json";
const CHECK_IN_FILE: &str = "last_check_in";
const ADVICE_DIR: &str = "advice";

/// File-based implementation of the CheckInRepository port.
#[derive(Debug)]
pub struct FileCheckInRepository {
    base_path: PathBuf,
    /// Serialises read-modify-write of the records file.
    records_lock: Mutex<()>,
}

impl FileCheckInRepository {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            records_lock: Mutex::new(()),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    fn advice_path(&self, day: CalendarDay) -> PathBuf {
        self.base_path.join(ADVICE_DIR).join(format!("{}.json", day))
    }

    async fn ensure_dir(&self, path: &Path) -> Result<(), RepositoryError> {
        fs::create_dir_all(path).await?;
        Ok(())
    }

    /// Reads a file, mapping "does not exist" to `None`.
    async fn read_optional(path: &Path) -> Result<Option<String>, RepositoryError> {
        match fs::read_to_string(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn remove_optional(path: &Path) -> Result<(), RepositoryError> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, RepositoryError> {
        match Self::read_optional(path).await? {
            Some(content) => serde_json::from_str(&content).map(Some).map_err(|e| {
                RepositoryError::DeserializationFailed {
                    key: path.display().to_string(),
                    message: e.to_string(),
                }
            }),
            None => Ok(None),
        }
    }

    async fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), RepositoryError> {
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent).await?;
        }
        let json = serde_json::to_string_pretty(value).map_err(|e| {
            RepositoryError::SerializationFailed {
                key: path.display().to_string(),
                message: e.to_string(),
            }
        })?;
        fs::write(path, json).await?;
        Ok(())
    }

    async fn read_records(&self) -> Result<Vec<DailyInteractionRecord>, RepositoryError> {
        Ok(self
            .read_json(&self.path(RECORDS_FILE))
            .await?
            .unwrap_or_default())
    }
}

#[async_trait]
impl CheckInRepository for FileCheckInRepository {
    async fn load_preferences(&self) -> Result<Option<UserPreferences>, RepositoryError> {
        self.read_json(&self.path(PREFERENCES_FILE)).await
    }

    async fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), RepositoryError> {
        self.write_json(&self.path(PREFERENCES_FILE), preferences).await
    }

    async fn list_records(&self) -> Result<Vec<DailyInteractionRecord>, RepositoryError> {
        let _guard = self.records_lock.lock().await;
        self.read_records().await
    }

    async fn save_record(&self, record: &DailyInteractionRecord) -> Result<(), RepositoryError> {
        let _guard = self.records_lock.lock().await;
        let mut records = self.read_records().await?;
        records.retain(|existing| existing.date() != record.date());
        records.push(record.clone());
        records.sort_by_key(|r| r.date());
        self.write_json(&self.path(RECORDS_FILE), &records).await
    }

    async fn delete_records_for(&self, day: CalendarDay) -> Result<(), RepositoryError> {
        let _guard = self.records_lock.lock().await;
        let mut records = self.read_records().await?;
        let before = records.len();
        records.retain(|existing| existing.date() != day);
        if records.len() == before {
            return Ok(());
        }
        self.write_json(&self.path(RECORDS_FILE), &records).await
    }

    async fn load_advice(&self, day: CalendarDay) -> Result<Option<AdviceResult>, RepositoryError> {
        self.read_json(&self.advice_path(day)).await
    }

    async fn save_advice(&self, advice: &AdviceResult) -> Result<(), RepositoryError> {
        self.write_json(&self.advice_path(advice.date), advice).await
    }

    async fn delete_advice(&self, day: CalendarDay) -> Result<(), RepositoryError> {
        Self::remove_optional(&self.advice_path(day)).await
    }

    async fn last_check_in(&self) -> Result<Option<CalendarDay>, RepositoryError> {
        let path = self.path(CHECK_IN_FILE);
        match Self::read_optional(&path).await? {
            Some(content) => content.trim().parse().map(Some).map_err(|e| {
                RepositoryError::DeserializationFailed {
                    key: path.display().to_string(),
                    message: format!("{}", e),
                }
            }),
            None => Ok(None),
        }
    }

    async fn mark_checked_in(&self, day: CalendarDay) -> Result<(), RepositoryError> {
        self.ensure_dir(&self.base_path).await?;
        fs::write(self.path(CHECK_IN_FILE), day.to_string()).await?;
        Ok(())
    }

    async fn clear_check_in(&self) -> Result<(), RepositoryError> {
        Self::remove_optional(&self.path(CHECK_IN_FILE)).await
    }

    async fn clear_all(&self) -> Result<(), RepositoryError> {
        let _guard = self.records_lock.lock().await;
        Self::remove_optional(&self.path(PREFERENCES_FILE)).await?;
        Self::remove_optional(&self.path(RECORDS_FILE)).await?;
        Self::remove_optional(&self.path(CHECK_IN_FILE)).await?;
        match fs::remove_dir_all(self.base_path.join(ADVICE_DIR)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
