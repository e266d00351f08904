//! Fisher-Yates shuffling of questions and options.

use crate::quiz::entities::Quiz;
use rand::Rng;

/// Shuffle `items` in place.
///
/// Walks from the last index down to 1 and swaps each element with a
/// uniformly chosen index in `[0, i]`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle question order, then option order within every question.
pub fn shuffle_quiz<R: Rng + ?Sized>(quiz: &mut Quiz, rng: &mut R) {
    fisher_yates(&mut quiz.questions, rng);
    for question in &mut quiz.questions {
        fisher_yates(&mut question.options, rng);
    }
}
