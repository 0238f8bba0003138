use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::progress::Tier;

/// Inputs to the certificate renderer. Derived from a passing quiz outcome,
/// never persisted; the image is regenerated on demand.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CertificateData {
    pub score: usize,
    pub total_questions: usize,
    pub percentage: u8,
    pub completion_date: String,
    pub tier: Tier,
}

/// Summary of one submitted quiz attempt, handed to the progress store and,
/// past the threshold, to the certificate renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOutcome {
    pub attempt_id: Uuid,
    pub tier: Tier,
    pub score: usize,
    pub total: usize,
    pub percentage: u8,
    pub submitted_at: DateTime<Utc>,
}

impl QuizOutcome {
    pub fn certificate_data(&self) -> CertificateData {
        CertificateData {
            score: self.score,
            total_questions: self.total,
            percentage: self.percentage,
            completion_date: self.submitted_at.format("%Y-%m-%d").to_string(),
            tier: self.tier,
        }
    }
}
