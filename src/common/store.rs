use crate::{
    category::models::Category,
    question::models::{NewQuestion, Question},
    server::error::ServerError,
};

/// Storage seam for every handler. `PgStore` is the production implementation.
pub trait TriviaStore: Send + Sync + 'static {
    /// All categories in storage order.
    fn all_categories(&self) -> impl Future<Output = Result<Vec<Category>, ServerError>> + Send;

    fn category_by_id(
        &self,
        category_id: i32,
    ) -> impl Future<Output = Result<Option<Category>, ServerError>> + Send;

    /// All questions in storage order.
    fn all_questions(&self) -> impl Future<Output = Result<Vec<Question>, ServerError>> + Send;

    fn questions_by_category(
        &self,
        category_id: i32,
    ) -> impl Future<Output = Result<Vec<Question>, ServerError>> + Send;

    fn question_by_id(
        &self,
        question_id: i32,
    ) -> impl Future<Output = Result<Option<Question>, ServerError>> + Send;

    fn insert_question(
        &self,
        new_question: NewQuestion,
    ) -> impl Future<Output = Result<Question, ServerError>> + Send;

    /// Returns false when no row matched the id.
    fn delete_question(
        &self,
        question_id: i32,
    ) -> impl Future<Output = Result<bool, ServerError>> + Send;

    fn health_check(&self) -> impl Future<Output = Result<(), ServerError>> + Send;
}
