use sea_orm::DatabaseConnection;

use crate::{EngineError, ResultEngine};

mod access;
mod catalog;
mod favorites;
mod users;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

fn normalize_required_field(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidInput(format!(
            "{label} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// Emails are compared case-insensitively, so they are stored lowercased.
fn normalize_email(value: &str) -> ResultEngine<String> {
    Ok(normalize_required_field(value, "email")?.to_lowercase())
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_field_is_trimmed() {
        assert_eq!(
            normalize_required_field("  Ana ", "name").unwrap(),
            "Ana".to_string()
        );
    }

    #[test]
    fn empty_required_field_is_rejected() {
        let err = normalize_required_field("   ", "name").unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidInput("name must not be empty".to_string())
        );
    }

    #[test]
    fn email_is_lowercased() {
        assert_eq!(normalize_email(" A@X.Com ").unwrap(), "a@x.com".to_string());
    }
}
