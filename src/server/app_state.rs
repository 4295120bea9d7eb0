use std::sync::Arc;

use crate::{
    common::{pg_store::PgStore, store::TriviaStore},
    config::config::CONFIG,
    server::error::ServerError,
};

pub struct AppState<S> {
    store: S,
    echo_created_question: bool,
}

impl AppState<PgStore> {
    pub async fn from_connection_string(connection_string: &str) -> Result<Arc<Self>, ServerError> {
        let store = PgStore::connect(connection_string, CONFIG.database.max_connections).await?;
        let state = Arc::new(Self::new(store, CONFIG.server.echo_created_question));

        Ok(state)
    }
}

impl<S: TriviaStore> AppState<S> {
    pub fn new(store: S, echo_created_question: bool) -> Self {
        Self {
            store,
            echo_created_question,
        }
    }

    pub fn get_store(&self) -> &S {
        &self.store
    }

    pub fn echo_created_question(&self) -> bool {
        self.echo_created_question
    }
}
