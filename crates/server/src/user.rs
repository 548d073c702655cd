//! User API endpoints: listing, lookup, sign-up, favorites listing, deletion.

use api_types::favorite::FavoriteTarget;
use api_types::user::{SignUpNew, UserMessage, UserView};
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, server::ServerState};

fn view(model: engine::users::Model) -> UserView {
    UserView {
        id: model.id,
        username: model.username,
        email: model.email,
        is_active: model.is_active,
    }
}

/// Handle requests for listing all users.
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<UserView>>, ServerError> {
    let users = state.engine.users().await?;

    Ok(Json(users.into_iter().map(view).collect()))
}

/// Handle requests for a single user by id.
pub async fn get_single(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserView>, ServerError> {
    let user = state.engine.user(user_id).await?;

    Ok(Json(view(user)))
}

/// Handle sign-up requests.
pub async fn sign_up(
    State(state): State<ServerState>,
    Json(payload): Json<SignUpNew>,
) -> Result<Json<UserMessage>, ServerError> {
    state
        .engine
        .sign_up(
            &payload.name,
            &payload.email,
            &payload.password,
            payload.is_active,
        )
        .await?;

    Ok(Json(UserMessage {
        msg: "User successfully created".to_string(),
    }))
}

/// Handle requests for a user's favorites, as `{id, name}` of each target.
pub async fn favorites(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<FavoriteTarget>>, ServerError> {
    let favorites = state.engine.user_favorites(user_id).await?;

    Ok(Json(
        favorites
            .into_iter()
            .map(|(id, name)| FavoriteTarget { id, name })
            .collect(),
    ))
}

/// Handle requests for deleting a user (cascades to its favorites).
pub async fn delete_single(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserMessage>, ServerError> {
    state.engine.delete_user(user_id).await?;

    Ok(Json(UserMessage {
        msg: "User successfully deleted".to_string(),
    }))
}
