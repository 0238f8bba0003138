use crate::errors::AppResult;
use crate::models::domain::{CertificateData, QuizOutcome};
use crate::render;

/// A rendered certificate ready to be saved or shared.
pub struct Certificate {
    pub data: CertificateData,
    pub png: Vec<u8>,
    pub filename: String,
}

/// Gates certificate generation on the pass threshold and drives the
/// renderer. Certificates are derived artifacts; nothing here persists.
pub struct CertificateService {
    pass_threshold: u8,
}

impl CertificateService {
    pub fn new(pass_threshold: u8) -> Self {
        Self { pass_threshold }
    }

    pub fn is_earned(&self, percentage: u8) -> bool {
        percentage >= self.pass_threshold
    }

    /// Render a certificate for a passing outcome; `None` below threshold.
    /// Renderer failure propagates so the caller can surface a one-time
    /// warning and keep the results screen usable.
    pub fn generate(&self, outcome: &QuizOutcome) -> AppResult<Option<Certificate>> {
        if !self.is_earned(outcome.percentage) {
            return Ok(None);
        }

        let data = outcome.certificate_data();
        let png = render::render(&data)?;
        let filename = format!("quiz-academy-{}-certificate.png", outcome.tier);
        log::info!(
            "Generated certificate {} ({} bytes)",
            filename,
            png.len()
        );
        Ok(Some(Certificate {
            data,
            png,
            filename,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Tier;
    use chrono::Utc;
    use uuid::Uuid;

    fn outcome(score: usize, percentage: u8) -> QuizOutcome {
        QuizOutcome {
            attempt_id: Uuid::new_v4(),
            tier: Tier::Beginner,
            score,
            total: 20,
            percentage,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn eighty_percent_earns_a_certificate() {
        let service = CertificateService::new(80);

        let certificate = service
            .generate(&outcome(16, 80))
            .expect("generation should succeed")
            .expect("80% should earn a certificate");

        assert_eq!(certificate.data.score, 16);
        assert_eq!(certificate.filename, "quiz-academy-beginner-certificate.png");
        assert!(!certificate.png.is_empty());
    }

    #[test]
    fn seventy_nine_percent_does_not() {
        let service = CertificateService::new(80);

        let certificate = service.generate(&outcome(15, 79)).unwrap();

        assert!(certificate.is_none());
    }

    #[test]
    fn zero_score_does_not() {
        let service = CertificateService::new(80);

        assert!(service.generate(&outcome(0, 0)).unwrap().is_none());
        assert!(!service.is_earned(0));
    }
}
