use sea_orm::{DatabaseTransaction, prelude::*};

use crate::{EngineError, ResultEngine, characters, planets, users};

use super::Engine;

/// Generates `_exists` and `require_` methods for an entity looked up by its
/// integer primary key.
macro_rules! impl_require_by_id {
    ($exists_fn:ident, $require_fn:ident, $entity:path, $err_msg:literal) => {
        async fn $exists_fn(&self, db: &DatabaseTransaction, id: i32) -> ResultEngine<bool> {
            <$entity>::find_by_id(id)
                .one(db)
                .await
                .map(|model| model.is_some())
                .map_err(Into::into)
        }

        pub(super) async fn $require_fn(
            &self,
            db: &DatabaseTransaction,
            id: i32,
        ) -> ResultEngine<()> {
            if !self.$exists_fn(db, id).await? {
                return Err(EngineError::KeyNotFound($err_msg.to_string()));
            }
            Ok(())
        }
    };
}

impl Engine {
    impl_require_by_id!(
        user_exists,
        require_user,
        users::Entity,
        "user not exists"
    );

    impl_require_by_id!(
        character_exists,
        require_character,
        characters::Entity,
        "character not exists"
    );

    impl_require_by_id!(
        planet_exists,
        require_planet,
        planets::Entity,
        "planet not exists"
    );
}
