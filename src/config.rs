use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub progress_path: String,
    pub questions_per_quiz: usize,
    pub pass_threshold: u8,
    pub per_question_seconds: u64,
    pub quiz_budget_seconds: u64,
    pub slide_dwell_seconds: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            progress_path: env::var("QUIZ_PROGRESS_PATH")
                .unwrap_or_else(|_| "quiz-academy-progress.json".to_string()),
            questions_per_quiz: env::var("QUIZ_QUESTION_COUNT")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(20),
            pass_threshold: env::var("QUIZ_PASS_THRESHOLD")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(80),
            per_question_seconds: env::var("QUIZ_PER_QUESTION_SECONDS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(30),
            quiz_budget_seconds: env::var("QUIZ_BUDGET_SECONDS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(1200),
            slide_dwell_seconds: env::var("COURSE_SLIDE_DWELL_SECONDS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(3),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            progress_path: "quiz-academy-test-progress.json".to_string(),
            questions_per_quiz: 20,
            pass_threshold: 80,
            per_question_seconds: 30,
            quiz_budget_seconds: 1200,
            slide_dwell_seconds: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.progress_path.is_empty());
        assert!(config.questions_per_quiz > 0);
        assert!(config.pass_threshold <= 100);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.questions_per_quiz, 20);
        assert_eq!(config.pass_threshold, 80);
        assert_eq!(config.quiz_budget_seconds, 1200);
        assert_eq!(config.slide_dwell_seconds, 3);
    }
}
