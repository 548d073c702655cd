//! Domain operations for the catalog service.
//!
//! The [`Engine`] owns a database connection and exposes every operation the
//! HTTP layer needs: user CRUD, read-only character/planet lookups, and
//! favorite create/delete. Each operation runs inside a single database
//! transaction so check-then-act sequences stay consistent.

pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};

pub mod characters;
mod error;
pub mod favorites;
mod ops;
pub mod planets;
pub mod users;

type ResultEngine<T> = Result<T, EngineError>;
