use axum::{
    Json, Router,
    routing::{get, post},
};

use std::sync::Arc;

use api_types::sitemap::Sitemap;
use engine::Engine;

use crate::{characters, favorites, planets, user};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Routes advertised by `GET /`.
const ROUTES: [&str; 14] = [
    "GET /",
    "GET /users",
    "GET /user/{id}",
    "DELETE /user/{id}",
    "POST /sign_up",
    "GET /users/favorites/{id}",
    "GET /characters",
    "GET /character/{id}",
    "POST /favorite/character/{id}",
    "DELETE /favorite/character/{id}",
    "GET /planets",
    "GET /planets/{id}",
    "POST /favorite/planet/{id}",
    "DELETE /favorite/planet/{id}",
];

/// Machine-readable index of the available routes.
async fn sitemap() -> Json<Sitemap> {
    Json(Sitemap {
        routes: ROUTES.iter().map(|route| route.to_string()).collect(),
    })
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(sitemap))
        .route("/users", get(user::list))
        .route(
            "/user/{id}",
            get(user::get_single).delete(user::delete_single),
        )
        .route("/sign_up", post(user::sign_up))
        .route("/users/favorites/{id}", get(user::favorites))
        .route("/characters", get(characters::list))
        .route("/character/{id}", get(characters::get_single))
        .route(
            "/favorite/character/{id}",
            post(favorites::add_character).delete(favorites::remove_character),
        )
        .route("/planets", get(planets::list))
        .route("/planets/{id}", get(planets::get_single))
        .route(
            "/favorite/planet/{id}",
            post(favorites::add_planet).delete(favorites::remove_planet),
        )
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use migration::MigratorTrait;
    use sea_orm::{ConnectionTrait, Database, Statement};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn test_router() -> Router {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();

        let backend = db.get_database_backend();
        db.execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO characters (name, gender, birth_year, eye_color, hair_color) \
             VALUES (?, ?, ?, ?, ?)",
            vec![
                "Luke Skywalker".into(),
                "male".into(),
                "19BBY".into(),
                "blue".into(),
                "blond".into(),
            ],
        ))
        .await
        .unwrap();
        db.execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO planets (name, climate, terrain, population, diameter_km) \
             VALUES (?, ?, ?, ?, ?)",
            vec![
                "Tatooine".into(),
                "arid".into(),
                "desert".into(),
                200000i64.into(),
                10465.into(),
            ],
        ))
        .await
        .unwrap();

        let engine = Engine::builder().database(db).build().await.unwrap();
        router(ServerState {
            engine: Arc::new(engine),
        })
    }

    async fn send(
        router: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn sign_up_body(email: &str) -> Value {
        json!({
            "name": "Ana",
            "email": email,
            "password": "p",
            "is_active": true,
        })
    }

    async fn sign_up_user(router: &Router, email: &str) -> i32 {
        let (status, _) = send(router, "POST", "/sign_up", Some(sign_up_body(email))).await;
        assert_eq!(status, StatusCode::OK);

        let (_, users) = send(router, "GET", "/users", None).await;
        users
            .as_array()
            .unwrap()
            .iter()
            .find(|user| user["email"] == email)
            .unwrap()["id"]
            .as_i64()
            .unwrap() as i32
    }

    #[tokio::test]
    async fn sitemap_lists_routes() {
        let router = test_router().await;

        let (status, body) = send(&router, "GET", "/", None).await;
        assert_eq!(status, StatusCode::OK);
        let routes = body["routes"].as_array().unwrap();
        assert!(routes.iter().any(|r| r == "POST /sign_up"));
        assert_eq!(routes.len(), 14);
    }

    #[tokio::test]
    async fn sign_up_then_lookup_roundtrips() {
        let router = test_router().await;

        let user_id = sign_up_user(&router, "a@x.com").await;

        let (status, user) = send(&router, "GET", &format!("/user/{user_id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(user["username"], "Ana");
        assert_eq!(user["email"], "a@x.com");
        assert_eq!(user["is_active"], true);
        assert!(user.get("password").is_none());
    }

    #[tokio::test]
    async fn sign_up_existing_email_conflicts() {
        let router = test_router().await;

        sign_up_user(&router, "a@x.com").await;
        let (status, _) = send(&router, "POST", "/sign_up", Some(sign_up_body("a@x.com"))).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (_, users) = send(&router, "GET", "/users", None).await;
        assert_eq!(users.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn sign_up_empty_email_fails_closed() {
        let router = test_router().await;

        let (status, _) = send(&router, "POST", "/sign_up", Some(sign_up_body("   "))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let router = test_router().await;

        let (status, body) = send(&router, "GET", "/user/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.get("error").is_some());

        let (status, _) = send(&router, "DELETE", "/user/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn favorite_scenario_roundtrip() {
        let router = test_router().await;
        let user_id = sign_up_user(&router, "a@x.com").await;

        let (status, favorites) =
            send(&router, "GET", &format!("/users/favorites/{user_id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(favorites, json!([]));

        let (status, body) = send(
            &router,
            "POST",
            "/favorite/character/1",
            Some(json!({"user_id": user_id})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Favorite added");

        let (_, favorites) =
            send(&router, "GET", &format!("/users/favorites/{user_id}"), None).await;
        assert_eq!(favorites, json!([{"id": 1, "name": "Luke Skywalker"}]));

        let (status, body) = send(
            &router,
            "DELETE",
            "/favorite/character/1",
            Some(json!({"user_id": user_id})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Favorite deleted");

        let (_, favorites) =
            send(&router, "GET", &format!("/users/favorites/{user_id}"), None).await;
        assert_eq!(favorites, json!([]));
    }

    #[tokio::test]
    async fn favorite_missing_user_or_target_is_not_found() {
        let router = test_router().await;
        let user_id = sign_up_user(&router, "a@x.com").await;

        let (status, _) = send(
            &router,
            "POST",
            "/favorite/character/99",
            Some(json!({"user_id": user_id})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &router,
            "POST",
            "/favorite/character/1",
            Some(json!({"user_id": 99})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &router,
            "DELETE",
            "/favorite/planet/1",
            Some(json!({"user_id": user_id})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn duplicate_favorite_conflicts() {
        let router = test_router().await;
        let user_id = sign_up_user(&router, "a@x.com").await;

        let (status, _) = send(
            &router,
            "POST",
            "/favorite/planet/1",
            Some(json!({"user_id": user_id})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            &router,
            "POST",
            "/favorite/planet/1",
            Some(json!({"user_id": user_id})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn deleting_user_removes_its_favorites() {
        let router = test_router().await;
        let user_id = sign_up_user(&router, "a@x.com").await;

        send(
            &router,
            "POST",
            "/favorite/character/1",
            Some(json!({"user_id": user_id})),
        )
        .await;

        let (status, _) = send(&router, "DELETE", &format!("/user/{user_id}"), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) =
            send(&router, "GET", &format!("/users/favorites/{user_id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // Reference data is untouched by user deletion.
        let (status, characters) = send(&router, "GET", "/characters", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(characters.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn planets_read_surface() {
        let router = test_router().await;

        let (status, planets) = send(&router, "GET", "/planets", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(planets[0]["name"], "Tatooine");

        let (status, planet) = send(&router, "GET", "/planets/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(planet["climate"], "arid");

        let (status, _) = send(&router, "GET", "/planets/7", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
