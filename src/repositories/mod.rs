pub mod progress_repository;

pub use progress_repository::{JsonFileProgressRepository, ProgressRepository};

#[cfg(test)]
pub use progress_repository::MockProgressRepository;
