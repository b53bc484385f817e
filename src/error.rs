use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown weapon: {0:?} (pick a name from `splat-tracker weapons`)")]
    UnknownWeapon(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}
