use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Course, Question, Tier};

/// Bundled course and question content for one tier.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TierContent {
    pub course: Course,
    pub questions: Vec<Question>,
}

/// All tier content, loaded once at startup and never mutated.
pub struct ContentLibrary {
    beginner: TierContent,
    intermediate: TierContent,
    advanced: TierContent,
}

const BEGINNER_JSON: &str = include_str!("../../data/beginner.json");
const INTERMEDIATE_JSON: &str = include_str!("../../data/intermediate.json");
const ADVANCED_JSON: &str = include_str!("../../data/advanced.json");

impl ContentLibrary {
    /// Load the bundled per-tier content, rejecting any question that does
    /// not carry exactly one correct option.
    pub fn bundled() -> AppResult<Self> {
        let library = Self {
            beginner: parse_tier(Tier::Beginner, BEGINNER_JSON)?,
            intermediate: parse_tier(Tier::Intermediate, INTERMEDIATE_JSON)?,
            advanced: parse_tier(Tier::Advanced, ADVANCED_JSON)?,
        };
        log::info!(
            "Loaded content library: {} / {} / {} questions",
            library.beginner.questions.len(),
            library.intermediate.questions.len(),
            library.advanced.questions.len()
        );
        Ok(library)
    }

    pub fn from_parts(
        beginner: TierContent,
        intermediate: TierContent,
        advanced: TierContent,
    ) -> AppResult<Self> {
        for content in [&beginner, &intermediate, &advanced] {
            validate_content(content)?;
        }
        Ok(Self {
            beginner,
            intermediate,
            advanced,
        })
    }

    pub fn tier(&self, tier: Tier) -> &TierContent {
        match tier {
            Tier::Beginner => &self.beginner,
            Tier::Intermediate => &self.intermediate,
            Tier::Advanced => &self.advanced,
        }
    }

    pub fn course(&self, tier: Tier) -> &Course {
        &self.tier(tier).course
    }

    pub fn questions(&self, tier: Tier) -> &[Question] {
        &self.tier(tier).questions
    }
}

fn parse_tier(tier: Tier, json: &str) -> AppResult<TierContent> {
    let content: TierContent = serde_json::from_str(json).map_err(|err| {
        AppError::SerializationError(format!("{} content is invalid: {}", tier, err))
    })?;
    validate_content(&content)?;
    Ok(content)
}

fn validate_content(content: &TierContent) -> AppResult<()> {
    if content.course.slides.is_empty() {
        return Err(AppError::ValidationError(format!(
            "Course '{}' has no slides",
            content.course.title
        )));
    }
    if content.questions.is_empty() {
        return Err(AppError::ValidationError(format!(
            "Course '{}' has no questions",
            content.course.title
        )));
    }
    for question in &content.questions {
        question.validate()?;
    }
    Ok(())
}
