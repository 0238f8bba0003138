use std::collections::HashSet;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Course, Slide, Tier};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoursePhase {
    NotStarted,
    InProgress,
    Completed,
}

/// One pass through a course's slides. A slide counts as viewed after the
/// reader dwells on it uninterrupted for the configured number of seconds;
/// navigating away first discards the pending dwell. The session completes
/// exactly when every slide has been viewed.
pub struct CourseSession {
    tier: Tier,
    course: Course,
    dwell_seconds: u64,
    phase: CoursePhase,
    current: usize,
    viewed: HashSet<usize>,
    pending_dwell: u64,
}

impl CourseSession {
    pub fn new(tier: Tier, course: Course, dwell_seconds: u64) -> Self {
        Self {
            tier,
            course,
            dwell_seconds,
            phase: CoursePhase::NotStarted,
            current: 0,
            viewed: HashSet::new(),
            pending_dwell: 0,
        }
    }

    pub fn start(&mut self) -> AppResult<()> {
        if self.phase != CoursePhase::NotStarted {
            return Err(AppError::ValidationError(
                "Course has already started".to_string(),
            ));
        }
        if self.course.slides.is_empty() {
            return Err(AppError::ValidationError(
                "Course has no slides".to_string(),
            ));
        }
        self.phase = CoursePhase::InProgress;
        log::info!(
            "Started {} course '{}' with {} slides",
            self.tier,
            self.course.title,
            self.course.slides.len()
        );
        Ok(())
    }

    pub fn phase(&self) -> CoursePhase {
        self.phase
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.course.slides.get(self.current)
    }

    pub fn viewed_count(&self) -> usize {
        self.viewed.len()
    }

    pub fn is_viewed(&self, slide_index: usize) -> bool {
        self.viewed.contains(&slide_index)
    }

    pub fn next(&mut self) -> AppResult<()> {
        self.ensure_in_progress()?;
        let target = (self.current + 1).min(self.course.slides.len() - 1);
        self.jump(target)
    }

    pub fn previous(&mut self) -> AppResult<()> {
        self.ensure_in_progress()?;
        let target = self.current.saturating_sub(1);
        self.jump(target)
    }

    pub fn jump(&mut self, slide_index: usize) -> AppResult<()> {
        self.ensure_in_progress()?;
        if slide_index >= self.course.slides.len() {
            return Err(AppError::ValidationError(format!(
                "Slide index {} out of range",
                slide_index
            )));
        }
        if slide_index != self.current {
            // Leaving the slide cancels its pending view mark.
            self.pending_dwell = 0;
            self.current = slide_index;
        }
        Ok(())
    }

    /// Accumulate dwell time on the current slide. Returns true when this
    /// tick completed the course.
    pub fn tick(&mut self, elapsed_seconds: u64) -> AppResult<bool> {
        if self.phase != CoursePhase::InProgress {
            return Ok(false);
        }
        if self.viewed.contains(&self.current) {
            return Ok(false);
        }

        self.pending_dwell += elapsed_seconds;
        if self.pending_dwell < self.dwell_seconds {
            return Ok(false);
        }

        self.viewed.insert(self.current);
        self.pending_dwell = 0;
        log::debug!(
            "Slide {} of {} course marked viewed ({}/{})",
            self.current,
            self.tier,
            self.viewed.len(),
            self.course.slides.len()
        );

        if self.viewed.len() == self.course.slides.len() {
            self.phase = CoursePhase::Completed;
            log::info!("{} course '{}' completed", self.tier, self.course.title);
            return Ok(true);
        }
        Ok(false)
    }

    fn ensure_in_progress(&self) -> AppResult<()> {
        match self.phase {
            CoursePhase::InProgress => Ok(()),
            CoursePhase::NotStarted => Err(AppError::ValidationError(
                "Course has not started".to_string(),
            )),
            CoursePhase::Completed => Err(AppError::ValidationError(
                "Course is already completed".to_string(),
            )),
        }
    }
}
