use url::Url;

use crate::errors::{AppError, AppResult};
use crate::models::domain::QuizOutcome;

const INTENT_BASE: &str = "https://twitter.com/intent/tweet";
const QUIZ_LINK: &str = "https://quiz-academy.example.com/";
const HASHTAGS: &str = "#PrivacyFirst #Cryptography";

/// The share text for one outcome: literal score, percentage and tier plus
/// the fixed link and hashtags.
pub fn share_text(outcome: &QuizOutcome) -> String {
    format!(
        "Just completed the Privacy Academy Quiz ({} Level) with a score of {}/{} ({}%)!\n\n\
         Test your privacy knowledge: {}\n\n{}",
        outcome.tier.title_case(),
        outcome.score,
        outcome.total,
        outcome.percentage,
        QUIZ_LINK,
        HASHTAGS,
    )
}

/// Platform share-intent URL carrying the share text, percent-encoded.
pub fn share_intent_url(outcome: &QuizOutcome) -> AppResult<Url> {
    Url::parse_with_params(INTENT_BASE, &[("text", share_text(outcome))])
        .map_err(|err| AppError::ValidationError(format!("Invalid share URL: {}", err)))
}
