use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{common::models::LooseInt, question::models::Question, server::error::ServerError};

#[derive(Debug, Deserialize, Default)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<LooseInt>,
}

impl QuizRequest {
    pub fn excluded_ids(&self) -> HashSet<i32> {
        self.previous_questions
            .iter()
            .flatten()
            .copied()
            .collect()
    }

    /// `None` means every question is eligible. Both a missing filter and `0`
    /// select all questions, so a real category with id 0 cannot be targeted.
    pub fn category_filter(&self) -> Result<Option<i32>, ServerError> {
        let Some(raw) = &self.quiz_category else {
            return Ok(None);
        };

        let category_id = raw.as_i32().ok_or_else(|| {
            ServerError::BadRequest(format!("Invalid quiz category: {:?}", raw))
        })?;

        match category_id {
            0 => Ok(None),
            id => Ok(Some(id)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: Option<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl QuizResponse {
    pub fn next(question: Question) -> Self {
        Self {
            question: Some(question),
            message: None,
        }
    }

    pub fn exhausted() -> Self {
        Self {
            question: None,
            message: Some("No more questions"),
        }
    }
}
