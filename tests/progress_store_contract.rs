use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Utc;

use quiz_academy::errors::AppResult;
use quiz_academy::models::domain::{ProgressRecord, Tier};
use quiz_academy::repositories::{JsonFileProgressRepository, ProgressRepository};

/// Stores the serialized record in memory, mirroring what the file-backed
/// implementation persists to disk.
struct InMemoryProgressRepository {
    stored: Mutex<Option<String>>,
}

impl InMemoryProgressRepository {
    fn new() -> Self {
        Self {
            stored: Mutex::new(None),
        }
    }

    fn corrupt(&self) {
        *self.stored.lock().unwrap() = Some("{broken".to_string());
    }
}

impl ProgressRepository for InMemoryProgressRepository {
    fn load(&self) -> AppResult<ProgressRecord> {
        let stored = self.stored.lock().unwrap();
        match stored.as_deref() {
            None => Ok(ProgressRecord::default()),
            Some(json) => Ok(serde_json::from_str(json).unwrap_or_default()),
        }
    }

    fn save(&self, record: &ProgressRecord) -> AppResult<()> {
        let json = serde_json::to_string(record)?;
        *self.stored.lock().unwrap() = Some(json);
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.stored.lock().unwrap() = None;
        Ok(())
    }
}

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "quiz-academy-contract-{}-{}.json",
        name,
        uuid::Uuid::new_v4()
    ))
}

fn sample_record() -> ProgressRecord {
    let mut record = ProgressRecord::default();
    record.tier_mut(Tier::Beginner).course_completed = true;
    record.tier_mut(Tier::Beginner).completed_at = Some(Utc::now());
    record.tier_mut(Tier::Advanced).quiz_taken = true;
    record.tier_mut(Tier::Advanced).quiz_score = Some(80);
    record
}

fn assert_contract(repo: &dyn ProgressRepository) {
    // Empty store loads defaults
    assert_eq!(repo.load().unwrap(), ProgressRecord::default());

    // Round trip, including date fields
    let record = sample_record();
    repo.save(&record).unwrap();
    assert_eq!(repo.load().unwrap(), record);

    // Save overwrites, never appends
    let mut updated = record.clone();
    updated.tier_mut(Tier::Advanced).quiz_score = Some(95);
    repo.save(&updated).unwrap();
    assert_eq!(repo.load().unwrap(), updated);

    // Clear restores defaults
    repo.clear().unwrap();
    assert_eq!(repo.load().unwrap(), ProgressRecord::default());
}

#[test]
fn in_memory_repository_honours_the_contract() {
    let repo = InMemoryProgressRepository::new();
    assert_contract(&repo);
}

#[test]
fn file_repository_honours_the_contract() {
    let path = scratch_path("contract");
    let repo = JsonFileProgressRepository::new(&path);
    assert_contract(&repo);
    std::fs::remove_file(&path).ok();
}

#[test]
fn corrupt_data_resets_to_defaults_in_both_implementations() {
    let in_memory = InMemoryProgressRepository::new();
    in_memory.save(&sample_record()).unwrap();
    in_memory.corrupt();
    assert_eq!(in_memory.load().unwrap(), ProgressRecord::default());

    let path = scratch_path("corrupt");
    let file_repo = JsonFileProgressRepository::new(&path);
    file_repo.save(&sample_record()).unwrap();
    std::fs::write(&path, "{broken").unwrap();
    assert_eq!(file_repo.load().unwrap(), ProgressRecord::default());
    std::fs::remove_file(&path).ok();
}

#[test]
fn persisted_dates_survive_the_wire_format() {
    let path = scratch_path("dates");
    let repo = JsonFileProgressRepository::new(&path);

    let record = sample_record();
    repo.save(&record).unwrap();

    // Dates are ISO strings on disk
    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let completed_at = parsed["beginner"]["completed_at"]
        .as_str()
        .expect("completed_at should be an ISO string");
    assert!(completed_at.contains('T'));

    assert_eq!(repo.load().unwrap(), record);
    std::fs::remove_file(&path).ok();
}
