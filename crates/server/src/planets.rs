//! Planet API endpoints (read-only reference data).

use api_types::catalog::PlanetView;
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, server::ServerState};

fn view(model: engine::planets::Model) -> PlanetView {
    PlanetView {
        id: model.id,
        name: model.name,
        climate: model.climate,
        terrain: model.terrain,
        population: model.population,
        diameter_km: model.diameter_km,
    }
}

/// Handle requests for listing all planets.
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<PlanetView>>, ServerError> {
    let planets = state.engine.planets().await?;

    Ok(Json(planets.into_iter().map(view).collect()))
}

/// Handle requests for a single planet by id.
pub async fn get_single(
    State(state): State<ServerState>,
    Path(planet_id): Path<i32>,
) -> Result<Json<PlanetView>, ServerError> {
    let planet = state.engine.planet(planet_id).await?;

    Ok(Json(view(planet)))
}
