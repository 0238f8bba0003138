use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::AppResult;
use crate::models::domain::ProgressRecord;

/// Durable store for the per-tier progress record. Single writer, whole-record
/// overwrite on every save.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressRepository: Send + Sync {
    /// Load the persisted record; missing or malformed data yields defaults.
    fn load(&self) -> AppResult<ProgressRecord>;
    fn save(&self, record: &ProgressRecord) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

pub struct JsonFileProgressRepository {
    path: PathBuf,
}

impl JsonFileProgressRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ProgressRepository for JsonFileProgressRepository {
    fn load(&self) -> AppResult<ProgressRecord> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ProgressRecord::default());
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&contents) {
            Ok(record) => Ok(record),
            Err(err) => {
                log::warn!(
                    "Discarding malformed progress record at {}: {}",
                    self.path.display(),
                    err
                );
                Ok(ProgressRecord::default())
            }
        }
    }

    fn save(&self, record: &ProgressRecord) -> AppResult<()> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        log::debug!("Saved progress record to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Tier;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("quiz-academy-{}-{}.json", name, uuid::Uuid::new_v4()))
    }

    #[test]
    fn missing_file_loads_defaults() {
        let repo = JsonFileProgressRepository::new(scratch_path("missing"));

        let record = repo.load().expect("load should succeed");
        assert_eq!(record, ProgressRecord::default());
    }

    #[test]
    fn malformed_file_loads_defaults() {
        let path = scratch_path("malformed");
        fs::write(&path, "{not json at all").unwrap();
        let repo = JsonFileProgressRepository::new(&path);

        let record = repo.load().expect("load should succeed");
        assert_eq!(record, ProgressRecord::default());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = scratch_path("roundtrip");
        let repo = JsonFileProgressRepository::new(&path);

        let mut record = ProgressRecord::default();
        record.tier_mut(Tier::Beginner).course_completed = true;
        record.tier_mut(Tier::Beginner).completed_at = Some(chrono::Utc::now());
        record.tier_mut(Tier::Beginner).quiz_taken = true;
        record.tier_mut(Tier::Beginner).quiz_score = Some(95);

        repo.save(&record).expect("save should succeed");
        let loaded = repo.load().expect("load should succeed");
        assert_eq!(record, loaded);

        repo.clear().expect("clear should succeed");
        assert_eq!(repo.load().unwrap(), ProgressRecord::default());
    }

    #[test]
    fn clear_on_missing_file_is_ok() {
        let repo = JsonFileProgressRepository::new(scratch_path("clear-missing"));

        assert!(repo.clear().is_ok());
    }
}
