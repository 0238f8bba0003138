use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Difficulty tier. Each tier carries its own course, quiz and progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Beginner, Tier::Intermediate, Tier::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Beginner => "beginner",
            Tier::Intermediate => "intermediate",
            Tier::Advanced => "advanced",
        }
    }

    /// Display form with a leading capital, e.g. "Beginner Level".
    pub fn title_case(&self) -> &'static str {
        match self {
            Tier::Beginner => "Beginner",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TierProgress {
    pub course_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub quiz_taken: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_score: Option<u8>,
}

/// The one durable record: per-tier completion and score state.
/// Overwritten in place on every mutation, never appended to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProgressRecord {
    pub beginner: TierProgress,
    pub intermediate: TierProgress,
    pub advanced: TierProgress,
}

impl ProgressRecord {
    pub fn tier(&self, tier: Tier) -> &TierProgress {
        match tier {
            Tier::Beginner => &self.beginner,
            Tier::Intermediate => &self.intermediate,
            Tier::Advanced => &self.advanced,
        }
    }

    pub fn tier_mut(&mut self, tier: Tier) -> &mut TierProgress {
        match tier {
            Tier::Beginner => &mut self.beginner,
            Tier::Intermediate => &mut self.intermediate,
            Tier::Advanced => &mut self.advanced,
        }
    }

    pub fn overall(&self) -> OverallProgress {
        let total_courses = Tier::ALL.len();
        let courses_completed = Tier::ALL
            .iter()
            .filter(|t| self.tier(**t).course_completed)
            .count();
        let quizzes_completed = Tier::ALL
            .iter()
            .filter(|t| self.tier(**t).quiz_taken)
            .count();
        let overall_percentage = (((courses_completed + quizzes_completed) as f64
            / (total_courses * 2) as f64)
            * 100.0)
            .round() as u8;

        OverallProgress {
            courses_completed,
            quizzes_completed,
            total_courses,
            overall_percentage,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverallProgress {
    pub courses_completed: usize,
    pub quizzes_completed: usize,
    pub total_courses: usize,
    pub overall_percentage: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Beginner).unwrap(), "\"beginner\"");
        assert_eq!(serde_json::to_string(&Tier::Advanced).unwrap(), "\"advanced\"");
    }

    #[test]
    fn tier_rejects_unknown_variant() {
        let parsed = serde_json::from_str::<Tier>("\"expert\"");

        assert!(parsed.is_err());
    }

    #[test]
    fn progress_record_round_trip_preserves_dates_and_scores() {
        let mut record = ProgressRecord::default();
        record.intermediate.course_completed = true;
        record.intermediate.completed_at = Some(Utc::now());
        record.intermediate.quiz_taken = true;
        record.intermediate.quiz_score = Some(85);

        let json = serde_json::to_string(&record).expect("record should serialize");
        let parsed: ProgressRecord =
            serde_json::from_str(&json).expect("record should deserialize");

        assert_eq!(record, parsed);
    }

    #[test]
    fn default_record_has_no_completions() {
        let record = ProgressRecord::default();

        for tier in Tier::ALL {
            assert!(!record.tier(tier).course_completed);
            assert!(!record.tier(tier).quiz_taken);
            assert!(record.tier(tier).quiz_score.is_none());
        }
    }

    #[test]
    fn overall_percentage_counts_courses_and_quizzes() {
        let mut record = ProgressRecord::default();
        assert_eq!(record.overall().overall_percentage, 0);

        record.beginner.course_completed = true;
        record.beginner.quiz_taken = true;
        record.beginner.quiz_score = Some(90);

        let overall = record.overall();
        assert_eq!(overall.courses_completed, 1);
        assert_eq!(overall.quizzes_completed, 1);
        assert_eq!(overall.total_courses, 3);
        // 2 of 6 milestones
        assert_eq!(overall.overall_percentage, 33);
    }
}
