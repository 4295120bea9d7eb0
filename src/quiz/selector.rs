use std::collections::HashSet;

use rand::{Rng, seq::IndexedRandom};

use crate::question::models::Question;

#[derive(Debug, Clone, PartialEq)]
pub enum QuizPick {
    Next(Question),
    /// Every question in the pool was already served.
    NotAvailable,
}

/// Picks uniformly at random among the pool questions whose id is not in `excluded`.
pub fn next_question<R>(pool: Vec<Question>, excluded: &HashSet<i32>, rng: &mut R) -> QuizPick
where
    R: Rng + ?Sized,
{
    let candidates: Vec<Question> = pool
        .into_iter()
        .filter(|question| !excluded.contains(&question.id))
        .collect();

    match candidates.choose(rng) {
        Some(question) => QuizPick::Next(question.clone()),
        None => QuizPick::NotAvailable,
    }
}
