pub mod certificate;
pub mod course;
pub mod progress;
pub mod question;
pub use certificate::{CertificateData, QuizOutcome};
pub use course::{Course, Slide};
pub use progress::{OverallProgress, ProgressRecord, Tier, TierProgress};
pub use question::{AnswerOption, Question};
