//! Favorite API endpoints.
//!
//! The target id comes from the path, the owning user id from the body,
//! matching the original wire contract.

use api_types::favorite::{FavoriteMessage, FavoriteNew};
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, server::ServerState};

fn added() -> Json<FavoriteMessage> {
    Json(FavoriteMessage {
        message: "Favorite added".to_string(),
    })
}

fn deleted() -> Json<FavoriteMessage> {
    Json(FavoriteMessage {
        message: "Favorite deleted".to_string(),
    })
}

/// Handle requests for adding a character to a user's favorites.
pub async fn add_character(
    State(state): State<ServerState>,
    Path(character_id): Path<i32>,
    Json(payload): Json<FavoriteNew>,
) -> Result<Json<FavoriteMessage>, ServerError> {
    state
        .engine
        .add_favorite_character(payload.user_id, character_id)
        .await?;

    Ok(added())
}

/// Handle requests for removing a character from a user's favorites.
pub async fn remove_character(
    State(state): State<ServerState>,
    Path(character_id): Path<i32>,
    Json(payload): Json<FavoriteNew>,
) -> Result<Json<FavoriteMessage>, ServerError> {
    state
        .engine
        .remove_favorite_character(payload.user_id, character_id)
        .await?;

    Ok(deleted())
}

/// Handle requests for adding a planet to a user's favorites.
pub async fn add_planet(
    State(state): State<ServerState>,
    Path(planet_id): Path<i32>,
    Json(payload): Json<FavoriteNew>,
) -> Result<Json<FavoriteMessage>, ServerError> {
    state
        .engine
        .add_favorite_planet(payload.user_id, planet_id)
        .await?;

    Ok(added())
}

/// Handle requests for removing a planet from a user's favorites.
pub async fn remove_planet(
    State(state): State<ServerState>,
    Path(planet_id): Path<i32>,
    Json(payload): Json<FavoriteNew>,
) -> Result<Json<FavoriteMessage>, ServerError> {
    state
        .engine
        .remove_favorite_planet(payload.user_id, planet_id)
        .await?;

    Ok(deleted())
}
