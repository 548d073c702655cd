use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::run_with_listener;

mod characters;
mod favorites;
mod planets;
mod server;
mod user;

pub mod types {
    pub mod user {
        pub use api_types::user::{SignUpNew, UserMessage, UserView};
    }

    pub mod catalog {
        pub use api_types::catalog::{CharacterView, PlanetView};
    }

    pub mod favorite {
        pub use api_types::favorite::{FavoriteMessage, FavoriteNew, FavoriteTarget};
    }

    pub mod sitemap {
        pub use api_types::sitemap::Sitemap;
    }
}

/// Wraps the engine error so handlers can `?` straight into an HTTP
/// response. Every failure this service reports originates in the engine.
pub struct ServerError(EngineError);

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let status = status_for_engine_error(&self.0);
        let error = message_for_engine_error(self.0);

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self(value)
    }
}
