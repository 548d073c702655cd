use serde::{Deserialize, Serialize};

pub mod user {
    use super::*;

    /// Request body for `POST /sign_up`.
    ///
    /// `name` maps to the stored `username`; `email` is the uniqueness key
    /// for account creation.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SignUpNew {
        pub name: String,
        pub email: String,
        pub password: String,
        pub is_active: bool,
    }

    /// A user as serialized out of the API.
    ///
    /// The stored password is never part of this view.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserView {
        pub id: i32,
        pub username: String,
        pub email: String,
        pub is_active: bool,
    }

    /// Response body for user mutations (`{"msg": ...}`).
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserMessage {
        pub msg: String,
    }
}

pub mod catalog {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CharacterView {
        pub id: i32,
        pub name: String,
        pub gender: Option<String>,
        pub birth_year: Option<String>,
        pub eye_color: Option<String>,
        pub hair_color: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PlanetView {
        pub id: i32,
        pub name: String,
        pub climate: Option<String>,
        pub terrain: Option<String>,
        pub population: Option<i64>,
        pub diameter_km: Option<i32>,
    }
}

pub mod favorite {
    use super::*;

    /// Request body for adding/removing a favorite; the target id comes from
    /// the path.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct FavoriteNew {
        pub user_id: i32,
    }

    /// One entry of a user's favorites list: the id and name of the
    /// referenced character or planet.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct FavoriteTarget {
        pub id: i32,
        pub name: String,
    }

    /// Response body for favorite mutations (`{"message": ...}`).
    #[derive(Debug, Serialize, Deserialize)]
    pub struct FavoriteMessage {
        pub message: String,
    }
}

pub mod sitemap {
    use super::*;

    /// Machine-readable index of the routes the service exposes.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Sitemap {
        pub routes: Vec<String>,
    }
}
