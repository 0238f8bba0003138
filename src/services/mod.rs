pub mod certificate_service;
pub mod course_session;
pub mod progress_service;
pub mod question_bank;
pub mod quiz_session;
pub mod share;
pub mod shuffle;

pub use certificate_service::{Certificate, CertificateService};
pub use course_session::{CoursePhase, CourseSession};
pub use progress_service::ProgressService;
pub use question_bank::{ContentLibrary, TierContent};
pub use quiz_session::{QuizPhase, QuizSession, TimerMode};
