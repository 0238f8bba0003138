use std::sync::Arc;

use chrono::Utc;

use crate::errors::AppResult;
use crate::models::domain::{OverallProgress, ProgressRecord, Tier};
use crate::repositories::ProgressRepository;

/// The single persistence boundary: every mutation goes read, modify, save.
pub struct ProgressService {
    repository: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    pub fn new(repository: Arc<dyn ProgressRepository>) -> Self {
        Self { repository }
    }

    pub fn progress(&self) -> AppResult<ProgressRecord> {
        self.repository.load()
    }

    pub fn complete_course(&self, tier: Tier) -> AppResult<ProgressRecord> {
        let mut record = self.repository.load()?;
        let entry = record.tier_mut(tier);
        entry.course_completed = true;
        entry.completed_at = Some(Utc::now());
        self.repository.save(&record)?;
        log::info!("Recorded course completion for {} tier", tier);
        Ok(record)
    }

    pub fn complete_quiz(&self, tier: Tier, percentage: u8) -> AppResult<ProgressRecord> {
        let mut record = self.repository.load()?;
        let entry = record.tier_mut(tier);
        entry.quiz_taken = true;
        entry.quiz_score = Some(percentage);
        self.repository.save(&record)?;
        log::info!("Recorded {}% quiz score for {} tier", percentage, tier);
        Ok(record)
    }

    pub fn is_course_completed(&self, tier: Tier) -> AppResult<bool> {
        Ok(self.repository.load()?.tier(tier).course_completed)
    }

    /// A quiz is offered only once the tier's course has been completed.
    pub fn is_quiz_available(&self, tier: Tier) -> AppResult<bool> {
        self.is_course_completed(tier)
    }

    pub fn reset(&self) -> AppResult<()> {
        self.repository.clear()?;
        log::info!("Progress record reset");
        Ok(())
    }

    pub fn overall(&self) -> AppResult<OverallProgress> {
        Ok(self.repository.load()?.overall())
    }
}
