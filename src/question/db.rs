use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::{
    question::models::{NewQuestion, Question},
    server::error::ServerError,
};

pub async fn get_all_questions(pool: &Pool<Postgres>) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_questions_by_category(
    pool: &Pool<Postgres>,
    category_id: i32,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        WHERE category = $1
        ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(pool)
    .await
}

pub async fn get_question_by_id(
    pool: &Pool<Postgres>,
    question_id: i32,
) -> Result<Option<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        WHERE id = $1
        "#,
    )
    .bind(question_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_question(
    pool: &Pool<Postgres>,
    question: &NewQuestion,
) -> Result<Question, ServerError> {
    let created = sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO "questions" (question, answer, difficulty, category)
        VALUES ($1, $2, $3, $4)
        RETURNING id, question, answer, category, difficulty
        "#,
    )
    .bind(&question.question)
    .bind(&question.answer)
    .bind(question.difficulty)
    .bind(question.category)
    .fetch_optional(pool)
    .await?
    .ok_or(ServerError::Internal("Failed to create question".into()))?;

    debug!("Created question {}", created.id);
    Ok(created)
}

pub async fn delete_question_by_id(
    pool: &Pool<Postgres>,
    question_id: i32,
) -> Result<bool, sqlx::Error> {
    let row = sqlx::query(
        r#"
        DELETE FROM "questions"
        WHERE id = $1
        "#,
    )
    .bind(question_id)
    .execute(pool)
    .await?;

    Ok(row.rows_affected() != 0)
}
