use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::models::domain::Question;

/// Uniformly-random permutation of a borrowed sequence. The input is left
/// untouched; every call draws fresh randomness.
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(&mut thread_rng());
    out
}

/// Draw up to `count` questions from the bank in random order, then permute
/// each question's options. The correctness flag travels with its option, so
/// the correct index is recomputed by the caller, never assumed fixed.
pub fn draw_questions(bank: &[Question], count: usize) -> Vec<Question> {
    let mut drawn = shuffled(bank);
    drawn.truncate(count);
    drawn
        .into_iter()
        .map(|question| shuffle_options(&question))
        .collect()
}

pub fn shuffle_options(question: &Question) -> Question {
    Question {
        id: question.id,
        text: question.text.clone(),
        options: shuffled(&question.options),
        explanation: question.explanation.clone(),
    }
}
