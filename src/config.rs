use crate::error::AppError;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:data/app.db".to_string());

        Self { database_url }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !self.database_url.starts_with("sqlite:") {
            return Err(AppError::Config(
                "DATABASE_URL must be a sqlite: URL".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_sqlite_url() {
        let config = Config {
            database_url: "sqlite:data/app.db".to_string(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_accepts_in_memory_url() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_other_schemes() {
        let config = Config {
            database_url: "postgres://localhost/app".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
