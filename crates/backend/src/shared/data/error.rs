use thiserror::Error;

/// Ошибки загрузки данных дашборда
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Cannot read fixture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in fixture {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fixture store has not been initialized")]
    NotInitialized,

    #[error("Fixture store is already initialized")]
    AlreadyInitialized,
}
