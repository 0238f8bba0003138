use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Question, QuizOutcome, Tier};
use crate::services::shuffle;

/// How the countdown is budgeted for one attempt.
///
/// The quick-quiz entry point times each question separately; tier quizzes
/// give one budget for the whole set. Both are product variants, not modes of
/// the same screen, so the session supports either.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerMode {
    PerQuestion(u64),
    WholeQuiz(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress,
    Submitted,
}

/// Grading detail for one question, revealed when the question (or the whole
/// attempt) locks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionReview {
    pub question_index: usize,
    pub selected: Option<usize>,
    pub correct_index: usize,
    pub is_correct: bool,
    pub explanation: String,
}

/// One run through a drawn question set: answers, navigation, countdown and
/// final grading. Discarded wholesale on restart; nothing leaks between
/// attempts.
pub struct QuizSession {
    tier: Tier,
    mode: TimerMode,
    phase: QuizPhase,
    questions: Vec<Question>,
    selected: HashMap<usize, usize>,
    locked: Vec<bool>,
    current: usize,
    remaining_seconds: u64,
    timer_armed: bool,
    outcome: Option<QuizOutcome>,
}

impl QuizSession {
    pub fn new(tier: Tier, mode: TimerMode) -> Self {
        Self {
            tier,
            mode,
            phase: QuizPhase::NotStarted,
            questions: Vec::new(),
            selected: HashMap::new(),
            locked: Vec::new(),
            current: 0,
            remaining_seconds: 0,
            timer_armed: false,
            outcome: None,
        }
    }

    /// Draw a fresh shuffled question set from the bank and arm the countdown.
    pub fn start(&mut self, bank: &[Question], count: usize) -> AppResult<()> {
        if self.phase != QuizPhase::NotStarted {
            return Err(AppError::ValidationError(
                "Quiz has already started".to_string(),
            ));
        }
        if bank.is_empty() {
            return Err(AppError::ValidationError(
                "Question bank is empty".to_string(),
            ));
        }

        self.questions = shuffle::draw_questions(bank, count);
        self.locked = vec![false; self.questions.len()];
        self.current = 0;
        self.phase = QuizPhase::InProgress;
        self.arm_timer();
        log::info!(
            "Started {} quiz with {} questions",
            self.tier,
            self.questions.len()
        );
        Ok(())
    }

    /// A new session over the same tier and timer mode. The old attempt is
    /// simply dropped by the caller.
    pub fn restart(&self) -> QuizSession {
        QuizSession::new(self.tier, self.mode)
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn selected_answer(&self, question_index: usize) -> Option<usize> {
        self.selected.get(&question_index).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_locked(&self, question_index: usize) -> bool {
        self.locked.get(question_index).copied().unwrap_or(false)
    }

    pub fn outcome(&self) -> Option<&QuizOutcome> {
        self.outcome.as_ref()
    }

    /// Record an answer for the current question. Only overwrites; never
    /// advances or locks.
    pub fn select(&mut self, option_index: usize) -> AppResult<()> {
        self.ensure_in_progress()?;
        if self.locked[self.current] {
            return Err(AppError::ValidationError(
                "Question is already graded".to_string(),
            ));
        }
        let question = &self.questions[self.current];
        if option_index >= question.options.len() {
            return Err(AppError::ValidationError(format!(
                "Option index {} out of range",
                option_index
            )));
        }
        self.selected.insert(self.current, option_index);
        Ok(())
    }

    /// Lock and grade the current question. Per-question variant only; the
    /// whole-quiz variant grades everything at submit.
    pub fn submit_current(&mut self) -> AppResult<QuestionReview> {
        self.ensure_in_progress()?;
        match self.mode {
            TimerMode::PerQuestion(_) => {
                if self.locked[self.current] {
                    return Err(AppError::ValidationError(
                        "Question is already graded".to_string(),
                    ));
                }
                self.lock_current()
            }
            TimerMode::WholeQuiz(_) => Err(AppError::ValidationError(
                "Per-question grading is not available in a timed-budget quiz".to_string(),
            )),
        }
    }

    /// Advance to the next question; past the last one the attempt finalizes.
    pub fn next(&mut self) -> AppResult<()> {
        self.ensure_in_progress()?;
        if let TimerMode::PerQuestion(_) = self.mode {
            if !self.locked[self.current] {
                return Err(AppError::ValidationError(
                    "Submit the current question first".to_string(),
                ));
            }
        }
        if self.current + 1 >= self.questions.len() {
            match self.mode {
                // Advancing past the last graded question ends the attempt.
                TimerMode::PerQuestion(_) => self.finalize(),
                // With free navigation the attempt ends only on explicit
                // submit or budget exhaustion.
                TimerMode::WholeQuiz(_) => {}
            }
            return Ok(());
        }
        self.current += 1;
        self.arm_timer();
        Ok(())
    }

    /// Move back one question. Free navigation belongs to the timed-budget
    /// variant only.
    pub fn previous(&mut self) -> AppResult<()> {
        self.ensure_free_navigation()?;
        if self.current > 0 {
            self.current -= 1;
        }
        Ok(())
    }

    pub fn jump(&mut self, question_index: usize) -> AppResult<()> {
        self.ensure_free_navigation()?;
        if question_index >= self.questions.len() {
            return Err(AppError::ValidationError(format!(
                "Question index {} out of range",
                question_index
            )));
        }
        self.current = question_index;
        Ok(())
    }

    /// Grade the whole attempt. Timed-budget variant; also invoked when the
    /// budget runs out.
    pub fn submit(&mut self) -> AppResult<&QuizOutcome> {
        self.ensure_in_progress()?;
        match self.mode {
            TimerMode::WholeQuiz(_) => {
                self.finalize();
                self.outcome.as_ref().ok_or_else(|| {
                    AppError::ValidationError("Attempt was not graded".to_string())
                })
            }
            TimerMode::PerQuestion(_) => Err(AppError::ValidationError(
                "Per-question quizzes are submitted one question at a time".to_string(),
            )),
        }
    }

    /// Drive the countdown. The timer is disarmed on every transition out of
    /// the state that owns it, so a stale tick never grades a later session.
    pub fn tick(&mut self, elapsed_seconds: u64) -> AppResult<()> {
        if self.phase != QuizPhase::InProgress || !self.timer_armed {
            return Ok(());
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(elapsed_seconds);
        if self.remaining_seconds > 0 {
            return Ok(());
        }

        self.timer_armed = false;
        match self.mode {
            TimerMode::PerQuestion(_) => {
                // Time up on this question: lock it as-is (unanswered counts
                // as wrong) and reveal the explanation.
                if !self.locked[self.current] {
                    self.lock_current()?;
                }
            }
            TimerMode::WholeQuiz(_) => {
                log::info!("{} quiz budget exhausted, grading attempt", self.tier);
                self.finalize();
            }
        }
        Ok(())
    }

    /// Reviews for every question, in presentation order. Meaningful once the
    /// attempt is submitted (or per-question, once each question locks).
    pub fn reviews(&self) -> Vec<QuestionReview> {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, question)| self.review_at(i, question))
            .collect()
    }

    fn review_at(&self, index: usize, question: &Question) -> QuestionReview {
        // Bank validation guarantees one correct option per question.
        let correct_index = question.correct_index().unwrap_or(0);
        let selected = self.selected.get(&index).copied();
        QuestionReview {
            question_index: index,
            selected,
            correct_index,
            is_correct: selected == Some(correct_index),
            explanation: question.explanation.clone(),
        }
    }

    fn lock_current(&mut self) -> AppResult<QuestionReview> {
        self.locked[self.current] = true;
        self.timer_armed = false;
        let review = self.review_at(self.current, &self.questions[self.current]);
        Ok(review)
    }

    fn arm_timer(&mut self) {
        self.remaining_seconds = match self.mode {
            TimerMode::PerQuestion(secs) => secs,
            TimerMode::WholeQuiz(secs) => {
                // The whole-quiz budget keeps counting across navigation;
                // only the first arm sets it.
                if self.timer_armed {
                    self.remaining_seconds
                } else {
                    secs
                }
            }
        };
        self.timer_armed = true;
    }

    fn finalize(&mut self) {
        let total = self.questions.len();
        let score = self
            .questions
            .iter()
            .enumerate()
            .filter(|(i, question)| {
                self.selected.get(i).copied() == question.correct_index()
            })
            .count();
        let percentage = if total == 0 {
            0
        } else {
            ((score as f64 / total as f64) * 100.0).round() as u8
        };

        self.timer_armed = false;
        self.phase = QuizPhase::Submitted;
        self.outcome = Some(QuizOutcome {
            attempt_id: Uuid::new_v4(),
            tier: self.tier,
            score,
            total,
            percentage,
            submitted_at: Utc::now(),
        });
        log::info!(
            "{} quiz submitted: {}/{} ({}%)",
            self.tier,
            score,
            total,
            percentage
        );
    }

    fn ensure_in_progress(&self) -> AppResult<()> {
        match self.phase {
            QuizPhase::InProgress => Ok(()),
            QuizPhase::NotStarted => Err(AppError::ValidationError(
                "Quiz has not started".to_string(),
            )),
            QuizPhase::Submitted => Err(AppError::ValidationError(
                "Quiz is already submitted".to_string(),
            )),
        }
    }

    fn ensure_free_navigation(&self) -> AppResult<()> {
        self.ensure_in_progress()?;
        match self.mode {
            TimerMode::WholeQuiz(_) => Ok(()),
            TimerMode::PerQuestion(_) => Err(AppError::ValidationError(
                "Navigation is locked in a per-question quiz".to_string(),
            )),
        }
    }
}
