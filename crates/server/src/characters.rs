//! Character API endpoints (read-only reference data).

use api_types::catalog::CharacterView;
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, server::ServerState};

fn view(model: engine::characters::Model) -> CharacterView {
    CharacterView {
        id: model.id,
        name: model.name,
        gender: model.gender,
        birth_year: model.birth_year,
        eye_color: model.eye_color,
        hair_color: model.hair_color,
    }
}

/// Handle requests for listing all characters.
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<CharacterView>>, ServerError> {
    let characters = state.engine.characters().await?;

    Ok(Json(characters.into_iter().map(view).collect()))
}

/// Handle requests for a single character by id.
pub async fn get_single(
    State(state): State<ServerState>,
    Path(character_id): Path<i32>,
) -> Result<Json<CharacterView>, ServerError> {
    let character = state.engine.character(character_id).await?;

    Ok(Json(view(character)))
}
