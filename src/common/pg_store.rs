use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use tracing::info;

use crate::{
    category::{self, models::Category},
    common::store::TriviaStore,
    health,
    question::{
        self,
        models::{NewQuestion, Question},
    },
    server::error::ServerError,
};

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub async fn connect(connection_string: &str, max_connections: u32) -> Result<Self, ServerError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(connection_string)
            .await?;

        info!("Connected to database with {} max connections", max_connections);
        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

impl TriviaStore for PgStore {
    async fn all_categories(&self) -> Result<Vec<Category>, ServerError> {
        Ok(category::db::get_all_categories(&self.pool).await?)
    }

    async fn category_by_id(&self, category_id: i32) -> Result<Option<Category>, ServerError> {
        Ok(category::db::get_category_by_id(&self.pool, category_id).await?)
    }

    async fn all_questions(&self) -> Result<Vec<Question>, ServerError> {
        Ok(question::db::get_all_questions(&self.pool).await?)
    }

    async fn questions_by_category(&self, category_id: i32) -> Result<Vec<Question>, ServerError> {
        Ok(question::db::get_questions_by_category(&self.pool, category_id).await?)
    }

    async fn question_by_id(&self, question_id: i32) -> Result<Option<Question>, ServerError> {
        Ok(question::db::get_question_by_id(&self.pool, question_id).await?)
    }

    async fn insert_question(&self, new_question: NewQuestion) -> Result<Question, ServerError> {
        question::db::create_question(&self.pool, &new_question).await
    }

    async fn delete_question(&self, question_id: i32) -> Result<bool, ServerError> {
        Ok(question::db::delete_question_by_id(&self.pool, question_id).await?)
    }

    async fn health_check(&self) -> Result<(), ServerError> {
        Ok(health::db::health_check(&self.pool).await?)
    }
}
