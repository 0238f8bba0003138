//! Terminal navigation surface: home, instructions and per-tier pages with
//! the overview/course/quiz view modes swapped in-process.

use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::domain::Tier;
use crate::repositories::JsonFileProgressRepository;
use crate::services::{
    CertificateService, ContentLibrary, CoursePhase, CourseSession, ProgressService, QuizPhase,
    QuizSession, TimerMode,
};
use crate::services::share;

pub struct App {
    config: Config,
    library: ContentLibrary,
    progress: ProgressService,
    certificates: CertificateService,
}

pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

impl App {
    pub fn new(config: Config) -> AppResult<Self> {
        let library = ContentLibrary::bundled()?;
        let repository = Arc::new(JsonFileProgressRepository::new(&config.progress_path));
        let progress = ProgressService::new(repository);
        let certificates = CertificateService::new(config.pass_threshold);
        Ok(Self {
            config,
            library,
            progress,
            certificates,
        })
    }

    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> AppResult<()> {
        loop {
            self.render_home(output)?;
            let line = match read_line(input)? {
                Some(line) => line,
                None => return Ok(()),
            };
            match line.trim() {
                "1" => self.tier_page(Tier::Beginner, input, output)?,
                "2" => self.tier_page(Tier::Intermediate, input, output)?,
                "3" => self.tier_page(Tier::Advanced, input, output)?,
                "k" => self.quick_quiz_mode(input, output)?,
                "i" => self.instructions(output)?,
                "r" => {
                    self.progress.reset()?;
                    writeln!(output, "Progress reset.")?;
                }
                "q" => return Ok(()),
                other => writeln!(output, "Unknown choice: {}", other)?,
            }
        }
    }

    fn render_home<W: Write>(&self, output: &mut W) -> AppResult<()> {
        let overall = self.progress.overall()?;
        writeln!(output, "\n=== Privacy Academy ===")?;
        writeln!(
            output,
            "Overall progress: {}% ({} of {} courses, {} quizzes)",
            overall.overall_percentage,
            overall.courses_completed,
            overall.total_courses,
            overall.quizzes_completed
        )?;
        let record = self.progress.progress()?;
        for (n, tier) in Tier::ALL.iter().enumerate() {
            let entry = record.tier(*tier);
            let course = if entry.course_completed { "done" } else { "open" };
            let quiz = match entry.quiz_score {
                Some(score) => format!("{}%", score),
                None => "-".to_string(),
            };
            writeln!(
                output,
                "  [{}] {:<12} course: {:<4} quiz: {}",
                n + 1,
                tier.title_case(),
                course,
                quiz
            )?;
        }
        writeln!(
            output,
            "  [k] quick quiz  [i] instructions  [r] reset progress  [q] quit"
        )?;
        write!(output, "> ")?;
        output.flush()?;
        Ok(())
    }

    fn instructions<W: Write>(&self, output: &mut W) -> AppResult<()> {
        writeln!(output, "\nHow to play:")?;
        writeln!(
            output,
            "  1. Read each tier's course; a slide counts once you stay on it {} seconds.",
            self.config.slide_dwell_seconds
        )?;
        writeln!(
            output,
            "  2. Finishing the course unlocks that tier's quiz: {} questions in {}.",
            self.config.questions_per_quiz,
            format_time(self.config.quiz_budget_seconds)
        )?;
        writeln!(
            output,
            "  3. Score {}% or higher to earn a downloadable certificate.",
            self.config.pass_threshold
        )?;
        Ok(())
    }

    fn tier_page<R: BufRead, W: Write>(
        &self,
        tier: Tier,
        input: &mut R,
        output: &mut W,
    ) -> AppResult<()> {
        loop {
            let record = self.progress.progress()?;
            let entry = record.tier(tier);
            let course = self.library.course(tier);
            writeln!(output, "\n--- {} Level: {} ---", tier.title_case(), course.title)?;
            writeln!(output, "{}", course.description)?;
            writeln!(
                output,
                "  [c] course ({} slides{})",
                course.slide_count(),
                if entry.course_completed { ", completed" } else { "" }
            )?;
            if entry.course_completed {
                writeln!(output, "  [z] quiz")?;
            } else {
                writeln!(output, "  [z] quiz (locked until the course is completed)")?;
            }
            writeln!(output, "  [b] back")?;
            write!(output, "> ")?;
            output.flush()?;

            let line = match read_line(input)? {
                Some(line) => line,
                None => return Ok(()),
            };
            match line.trim() {
                "c" => self.course_mode(tier, input, output)?,
                "z" => {
                    if self.progress.is_quiz_available(tier)? {
                        self.quiz_mode(tier, input, output)?;
                    } else {
                        writeln!(output, "Complete the course first.")?;
                    }
                }
                "b" => return Ok(()),
                other => writeln!(output, "Unknown choice: {}", other)?,
            }
        }
    }

    fn course_mode<R: BufRead, W: Write>(
        &self,
        tier: Tier,
        input: &mut R,
        output: &mut W,
    ) -> AppResult<()> {
        let course = self.library.course(tier).clone();
        let mut session = CourseSession::new(tier, course, self.config.slide_dwell_seconds);
        session.start()?;

        let mut shown_at = Instant::now();
        loop {
            let slide = session
                .current_slide()
                .ok_or_else(|| AppError::NotFound("current slide".to_string()))?
                .clone();
            writeln!(
                output,
                "\nSlide {}/{}: {}",
                session.current_index() + 1,
                session.course().slide_count(),
                slide.title
            )?;
            writeln!(output, "{}", slide.content)?;
            for point in &slide.key_points {
                writeln!(output, "  * {}", point)?;
            }
            writeln!(
                output,
                "Viewed {}/{}. [n] next [p] previous [1-{}] jump [b] back",
                session.viewed_count(),
                session.course().slide_count(),
                session.course().slide_count()
            )?;
            write!(output, "> ")?;
            output.flush()?;

            let line = match read_line(input)? {
                Some(line) => line,
                None => return Ok(()),
            };
            let completed = session.tick(shown_at.elapsed().as_secs())?;
            shown_at = Instant::now();
            if completed {
                self.progress.complete_course(tier)?;
                writeln!(output, "\nCourse completed! The {} quiz is now unlocked.", tier)?;
                return Ok(());
            }
            if session.phase() == CoursePhase::Completed {
                return Ok(());
            }

            match line.trim() {
                "n" => session.next()?,
                "p" => session.previous()?,
                "b" => return Ok(()),
                other => {
                    if let Ok(index) = other.parse::<usize>() {
                        if index >= 1 && session.jump(index - 1).is_ok() {
                            continue;
                        }
                    }
                    writeln!(output, "Unknown choice: {}", other)?;
                }
            }
        }
    }

    fn quiz_mode<R: BufRead, W: Write>(
        &self,
        tier: Tier,
        input: &mut R,
        output: &mut W,
    ) -> AppResult<()> {
        let bank = self.library.questions(tier);
        let mut session = QuizSession::new(
            tier,
            TimerMode::WholeQuiz(self.config.quiz_budget_seconds),
        );
        session.start(bank, self.config.questions_per_quiz)?;
        writeln!(
            output,
            "\n{} quiz: {} questions, {} on the clock. Answer with option numbers.",
            tier.title_case(),
            session.questions().len(),
            format_time(session.remaining_seconds())
        )?;

        let mut asked_at = Instant::now();
        while session.phase() == QuizPhase::InProgress {
            let index = session.current_index();
            let question = session
                .current_question()
                .ok_or_else(|| AppError::NotFound("current question".to_string()))?
                .clone();
            writeln!(
                output,
                "\n[{}] Q{}/{} ({} answered): {}",
                format_time(session.remaining_seconds()),
                index + 1,
                session.questions().len(),
                session.answered_count(),
                question.text
            )?;
            for (i, option) in question.options.iter().enumerate() {
                let marker = if session.selected_answer(index) == Some(i) {
                    "*"
                } else {
                    " "
                };
                writeln!(output, "  {}[{}] {}", marker, i + 1, option.text)?;
            }
            writeln!(output, "  [n] next [p] previous [g N] go to [s] submit [b] abandon")?;
            write!(output, "> ")?;
            output.flush()?;

            let line = match read_line(input)? {
                Some(line) => line,
                None => return Ok(()),
            };
            session.tick(asked_at.elapsed().as_secs())?;
            asked_at = Instant::now();
            if session.phase() != QuizPhase::InProgress {
                break;
            }

            let trimmed = line.trim();
            let result = match trimmed {
                "n" => session.next(),
                "p" => session.previous(),
                "s" => session.submit().map(|_| ()),
                "b" => return Ok(()),
                other => {
                    if let Some(target) = other.strip_prefix("g ") {
                        match target.trim().parse::<usize>() {
                            Ok(n) if n >= 1 => session.jump(n - 1),
                            _ => Err(AppError::ValidationError(format!(
                                "Not a question number: {}",
                                target
                            ))),
                        }
                    } else {
                        match other.parse::<usize>() {
                            Ok(n) if n >= 1 => session.select(n - 1),
                            _ => Err(AppError::ValidationError(format!(
                                "Unknown choice: {}",
                                other
                            ))),
                        }
                    }
                }
            };
            if let Err(err) = result {
                writeln!(output, "{}", err)?;
            }
        }

        self.show_results(&session, output)
    }

    /// Untimed-entry variant: one countdown per question, graded as you go.
    /// Draws from every tier's bank and does not touch tier progress.
    fn quick_quiz_mode<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> AppResult<()> {
        let mut bank = Vec::new();
        for tier in Tier::ALL {
            bank.extend_from_slice(self.library.questions(tier));
        }

        let mut session = QuizSession::new(
            Tier::Beginner,
            TimerMode::PerQuestion(self.config.per_question_seconds),
        );
        session.start(&bank, self.config.questions_per_quiz)?;
        writeln!(
            output,
            "\nQuick quiz: {} questions, {} seconds each.",
            session.questions().len(),
            self.config.per_question_seconds
        )?;

        let mut asked_at = Instant::now();
        while session.phase() == QuizPhase::InProgress {
            let index = session.current_index();
            let question = session
                .current_question()
                .ok_or_else(|| AppError::NotFound("current question".to_string()))?
                .clone();

            if !session.is_locked(index) {
                writeln!(
                    output,
                    "\n[{}] Q{}/{}: {}",
                    format_time(session.remaining_seconds()),
                    index + 1,
                    session.questions().len(),
                    question.text
                )?;
                for (i, option) in question.options.iter().enumerate() {
                    writeln!(output, "  [{}] {}", i + 1, option.text)?;
                }
                write!(output, "answer (1-{}) or [b] abandon > ", question.options.len())?;
                output.flush()?;

                let line = match read_line(input)? {
                    Some(line) => line,
                    None => return Ok(()),
                };
                session.tick(asked_at.elapsed().as_secs())?;
                asked_at = Instant::now();

                match line.trim() {
                    "b" => return Ok(()),
                    other => match other.parse::<usize>() {
                        Ok(n) if n >= 1 && !session.is_locked(index) => {
                            if let Err(err) = session.select(n - 1) {
                                writeln!(output, "{}", err)?;
                                continue;
                            }
                        }
                        _ if !session.is_locked(index) => {
                            writeln!(output, "Unknown choice: {}", other)?;
                            continue;
                        }
                        _ => {}
                    },
                }
                if !session.is_locked(index) {
                    let review = session.submit_current()?;
                    let verdict = if review.is_correct { "Correct!" } else { "Wrong." };
                    writeln!(output, "{} {}", verdict, review.explanation)?;
                }
            } else {
                writeln!(output, "Time is up on this question. {}", question.explanation)?;
            }
            session.next()?;
            asked_at = Instant::now();
        }

        if let Some(outcome) = session.outcome() {
            writeln!(
                output,
                "\nQuick quiz done: {}/{} ({}%).",
                outcome.score, outcome.total, outcome.percentage
            )?;
        }
        Ok(())
    }

    fn show_results<W: Write>(&self, session: &QuizSession, output: &mut W) -> AppResult<()> {
        let outcome = match session.outcome() {
            Some(outcome) => outcome.clone(),
            None => return Ok(()),
        };

        writeln!(
            output,
            "\nQuiz complete! You scored {}/{} ({}%).",
            outcome.score, outcome.total, outcome.percentage
        )?;
        for review in session.reviews() {
            let question = &session.questions()[review.question_index];
            let mark = if review.is_correct { "correct" } else { "wrong" };
            let answer = match review.selected {
                Some(i) => question.options[i].text.as_str(),
                None => "(not answered)",
            };
            writeln!(
                output,
                "  Q{}: {} - your answer: {}",
                review.question_index + 1,
                mark,
                answer
            )?;
            if !review.is_correct {
                writeln!(
                    output,
                    "      correct: {}",
                    question.options[review.correct_index].text
                )?;
            }
            writeln!(output, "      {}", review.explanation)?;
        }

        self.progress.complete_quiz(outcome.tier, outcome.percentage)?;

        if self.certificates.is_earned(outcome.percentage) {
            match self.certificates.generate(&outcome) {
                Ok(Some(certificate)) => {
                    std::fs::write(&certificate.filename, &certificate.png)?;
                    writeln!(
                        output,
                        "\nCongratulations! Certificate saved to {}",
                        certificate.filename
                    )?;
                }
                Ok(None) => {}
                Err(err) => {
                    // Results stay usable without the image
                    log::warn!("Certificate generation failed: {}", err);
                    writeln!(output, "\nCertificate rendering unavailable: {}", err)?;
                }
            }
        }

        let share_url = share::share_intent_url(&outcome)?;
        writeln!(output, "\nShare your result: {}", share_url)?;
        Ok(())
    }
}

/// `None` on end of input, which every screen treats as leaving.
fn read_line<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(1200), "20:00");
    }
}
