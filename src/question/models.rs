use serde::{Deserialize, Serialize};

use crate::{category::models::Category, common::models::LooseInt, server::error::ServerError};

#[derive(Debug, Serialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

/// Body of `POST /questions`, which either searches or creates.
#[derive(Debug, Deserialize, Default)]
pub struct QuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<LooseInt>,
    pub category: Option<LooseInt>,
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, ServerError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ServerError::MissingField(field)),
    }
}

fn required_int(value: Option<LooseInt>, field: &'static str) -> Result<i32, ServerError> {
    let Some(value) = value.filter(LooseInt::is_truthy) else {
        return Err(ServerError::MissingField(field));
    };

    value
        .as_i32()
        .ok_or_else(|| ServerError::BadRequest(format!("Field {} must be an integer", field)))
}

impl TryFrom<QuestionsRequest> for NewQuestion {
    type Error = ServerError;

    fn try_from(request: QuestionsRequest) -> Result<Self, Self::Error> {
        let question = required_text(request.question, "question")?;
        let answer = required_text(request.answer, "answer")?;
        let difficulty = required_int(request.difficulty, "difficulty")?;
        let category = required_int(request.category, "category")?;

        if difficulty <= 0 {
            return Err(ServerError::BadRequest(
                "Field difficulty must be a positive integer".into(),
            ));
        }

        Ok(Self {
            question,
            answer,
            difficulty,
            category,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    pub current_category: Option<String>,
}

impl QuestionPage {
    pub fn new(questions: Vec<Question>, total_questions: usize) -> Self {
        Self {
            questions,
            total_questions,
            categories: None,
            current_category: None,
        }
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn in_category(mut self, category: Category) -> Self {
        self.current_category = Some(category.kind);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub status: &'static str,
    pub message: String,
}

impl DeletedResponse {
    pub fn for_question(question_id: i32) -> Self {
        Self {
            status: "success",
            message: format!("Question {} was deleted successfully", question_id),
        }
    }
}
