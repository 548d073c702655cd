use sea_orm::{ActiveValue, QueryFilter, SqlErr, TransactionTrait, prelude::*};

use crate::{EngineError, ResultEngine, favorites, users};

use super::{Engine, normalize_email, normalize_required_field, with_tx};

impl Engine {
    /// List all users.
    pub async fn users(&self) -> ResultEngine<Vec<users::Model>> {
        with_tx!(self, |db_tx| {
            let models = users::Entity::find().all(&db_tx).await?;
            Ok(models)
        })
    }

    /// Return a single user by id.
    pub async fn user(&self, user_id: i32) -> ResultEngine<users::Model> {
        with_tx!(self, |db_tx| {
            let model = users::Entity::find_by_id(user_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("user not exists".to_string()))?;
            Ok(model)
        })
    }

    /// Create a new account.
    ///
    /// The email is the uniqueness key: an already-registered email fails
    /// with [`EngineError::ExistingKey`] and writes nothing. The pre-check
    /// runs inside the transaction, and the unique index on `users.email`
    /// closes the race between two concurrent sign-ups with the same email.
    pub async fn sign_up(
        &self,
        username: &str,
        email: &str,
        password: &str,
        is_active: bool,
    ) -> ResultEngine<i32> {
        let username = normalize_required_field(username, "name")?;
        let email = normalize_email(email)?;
        let password = normalize_required_field(password, "password")?;

        with_tx!(self, |db_tx| {
            let exists = users::Entity::find()
                .filter(users::Column::Email.eq(email.clone()))
                .one(&db_tx)
                .await?
                .is_some();
            if exists {
                return Err(EngineError::ExistingKey(email));
            }

            let user = users::ActiveModel {
                id: ActiveValue::NotSet,
                username: ActiveValue::Set(username),
                email: ActiveValue::Set(email.clone()),
                password: ActiveValue::Set(password),
                is_active: ActiveValue::Set(is_active),
            };
            let model = match user.insert(&db_tx).await {
                Ok(model) => model,
                Err(err) => {
                    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                        return Err(EngineError::ExistingKey(email));
                    }
                    return Err(err.into());
                }
            };

            Ok(model.id)
        })
    }

    /// Delete a user and, in the same transaction, every favorite it owns.
    ///
    /// Cascade is the chosen deletion policy: the favorites rows are removed
    /// explicitly here, and the `ON DELETE CASCADE` foreign key backs the
    /// same policy at the storage layer.
    pub async fn delete_user(&self, user_id: i32) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            self.require_user(&db_tx, user_id).await?;

            favorites::Entity::delete_many()
                .filter(favorites::Column::UserId.eq(user_id))
                .exec(&db_tx)
                .await?;
            users::Entity::delete_by_id(user_id).exec(&db_tx).await?;

            Ok(())
        })
    }
}
