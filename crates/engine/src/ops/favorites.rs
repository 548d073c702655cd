use std::collections::HashMap;

use sea_orm::{ActiveValue, QueryFilter, QueryOrder, SqlErr, TransactionTrait, prelude::*};

use crate::{EngineError, ResultEngine, characters, favorites, planets};

use super::{Engine, with_tx};

/// The single target a favorite points at.
#[derive(Clone, Copy, Debug)]
enum Target {
    Character(i32),
    Planet(i32),
}

impl Engine {
    /// Return the `(id, name)` of every favorite target owned by a user, in
    /// favorite insertion order (`favorites.id` ascending).
    pub async fn user_favorites(&self, user_id: i32) -> ResultEngine<Vec<(i32, String)>> {
        with_tx!(self, |db_tx| {
            self.require_user(&db_tx, user_id).await?;

            let favorite_models = favorites::Entity::find()
                .filter(favorites::Column::UserId.eq(user_id))
                .order_by_asc(favorites::Column::Id)
                .all(&db_tx)
                .await?;

            let character_ids: Vec<i32> = favorite_models
                .iter()
                .filter_map(|fav| fav.character_id)
                .collect();
            let planet_ids: Vec<i32> = favorite_models
                .iter()
                .filter_map(|fav| fav.planet_id)
                .collect();

            let mut names: HashMap<(bool, i32), String> = HashMap::new();
            if !character_ids.is_empty() {
                for model in characters::Entity::find()
                    .filter(characters::Column::Id.is_in(character_ids))
                    .all(&db_tx)
                    .await?
                {
                    names.insert((true, model.id), model.name);
                }
            }
            if !planet_ids.is_empty() {
                for model in planets::Entity::find()
                    .filter(planets::Column::Id.is_in(planet_ids))
                    .all(&db_tx)
                    .await?
                {
                    names.insert((false, model.id), model.name);
                }
            }

            let mut out = Vec::with_capacity(favorite_models.len());
            for fav in favorite_models {
                let key = match (fav.character_id, fav.planet_id) {
                    (Some(id), _) => (true, id),
                    (_, Some(id)) => (false, id),
                    // Unreachable through the typed create operations.
                    (None, None) => continue,
                };
                match names.get(&key) {
                    Some(name) => out.push((key.1, name.clone())),
                    None => {
                        tracing::warn!(
                            favorite_id = fav.id,
                            "favorite references a missing target, skipping"
                        );
                    }
                }
            }

            Ok(out)
        })
    }

    /// Add a character to a user's favorites.
    pub async fn add_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> ResultEngine<i32> {
        self.add_favorite(user_id, Target::Character(character_id))
            .await
    }

    /// Add a planet to a user's favorites.
    pub async fn add_favorite_planet(&self, user_id: i32, planet_id: i32) -> ResultEngine<i32> {
        self.add_favorite(user_id, Target::Planet(planet_id)).await
    }

    /// Remove a character from a user's favorites.
    pub async fn remove_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> ResultEngine<()> {
        self.remove_favorite(user_id, Target::Character(character_id))
            .await
    }

    /// Remove a planet from a user's favorites.
    pub async fn remove_favorite_planet(&self, user_id: i32, planet_id: i32) -> ResultEngine<()> {
        self.remove_favorite(user_id, Target::Planet(planet_id))
            .await
    }

    /// Insert a favorite row for the given target.
    ///
    /// User and target must both exist; an already-favorited pair fails with
    /// [`EngineError::ExistingKey`]. The pre-check runs in the transaction
    /// and the unique `(user_id, target)` indexes close the concurrent-add
    /// race.
    async fn add_favorite(&self, user_id: i32, target: Target) -> ResultEngine<i32> {
        with_tx!(self, |db_tx| {
            self.require_user(&db_tx, user_id).await?;
            let (column, target_id) = match target {
                Target::Character(id) => {
                    self.require_character(&db_tx, id).await?;
                    (favorites::Column::CharacterId, id)
                }
                Target::Planet(id) => {
                    self.require_planet(&db_tx, id).await?;
                    (favorites::Column::PlanetId, id)
                }
            };

            let exists = favorites::Entity::find()
                .filter(favorites::Column::UserId.eq(user_id))
                .filter(column.eq(target_id))
                .one(&db_tx)
                .await?
                .is_some();
            if exists {
                return Err(EngineError::ExistingKey("favorite".to_string()));
            }

            let favorite = favorites::ActiveModel {
                id: ActiveValue::NotSet,
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(match target {
                    Target::Character(id) => Some(id),
                    Target::Planet(_) => None,
                }),
                planet_id: ActiveValue::Set(match target {
                    Target::Planet(id) => Some(id),
                    Target::Character(_) => None,
                }),
            };
            match favorite.insert(&db_tx).await {
                Ok(model) => Ok(model.id),
                Err(err) => {
                    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                        return Err(EngineError::ExistingKey("favorite".to_string()));
                    }
                    Err(err.into())
                }
            }
        })
    }

    /// Delete the favorite row matching `(user_id, target)`.
    ///
    /// Deletes the first match by `favorites.id`; with the unique indexes in
    /// place there is at most one.
    async fn remove_favorite(&self, user_id: i32, target: Target) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            self.require_user(&db_tx, user_id).await?;
            let (column, target_id) = match target {
                Target::Character(id) => (favorites::Column::CharacterId, id),
                Target::Planet(id) => (favorites::Column::PlanetId, id),
            };

            let favorite = favorites::Entity::find()
                .filter(favorites::Column::UserId.eq(user_id))
                .filter(column.eq(target_id))
                .order_by_asc(favorites::Column::Id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("favorite not exists".to_string()))?;

            favorites::Entity::delete_by_id(favorite.id)
                .exec(&db_tx)
                .await?;

            Ok(())
        })
    }
}
