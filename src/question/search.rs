use crate::question::models::Question;

/// Keeps the questions whose text contains `term` verbatim. Case-sensitive.
pub fn filter_by_term(questions: Vec<Question>, term: &str) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|question| question.question.contains(term))
        .collect()
}
