//! Read-only lookups for the reference data (characters and planets).

use sea_orm::{TransactionTrait, prelude::*};

use crate::{EngineError, ResultEngine, characters, planets};

use super::{Engine, with_tx};

impl Engine {
    /// List all characters.
    pub async fn characters(&self) -> ResultEngine<Vec<characters::Model>> {
        with_tx!(self, |db_tx| {
            let models = characters::Entity::find().all(&db_tx).await?;
            Ok(models)
        })
    }

    /// Return a single character by id.
    pub async fn character(&self, character_id: i32) -> ResultEngine<characters::Model> {
        with_tx!(self, |db_tx| {
            let model = characters::Entity::find_by_id(character_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("character not exists".to_string()))?;
            Ok(model)
        })
    }

    /// List all planets.
    pub async fn planets(&self) -> ResultEngine<Vec<planets::Model>> {
        with_tx!(self, |db_tx| {
            let models = planets::Entity::find().all(&db_tx).await?;
            Ok(models)
        })
    }

    /// Return a single planet by id.
    pub async fn planet(&self, planet_id: i32) -> ResultEngine<planets::Model> {
        with_tx!(self, |db_tx| {
            let model = planets::Entity::find_by_id(planet_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("planet not exists".to_string()))?;
            Ok(model)
        })
    }
}
