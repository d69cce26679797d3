use thiserror::Error;

#[derive(Debug, Error)]
pub enum UtilError {
    #[error("invalid ISO-8601 timestamp {input:?}: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}
