use tracing::debug;

use crate::{
    category::models::Category, common::store::TriviaStore, server::error::ServerError,
};

/// Every category in storage order. An empty table is reported as `Empty`,
/// which callers cannot tell apart from a missing resource once it is on the wire.
pub async fn all_categories<S: TriviaStore>(store: &S) -> Result<Vec<Category>, ServerError> {
    let categories = store.all_categories().await?;
    if categories.is_empty() {
        return Err(ServerError::Empty("No categories are stored".into()));
    }

    debug!("Resolved {} categories", categories.len());
    Ok(categories)
}
