use sea_orm::DbErr;
use thiserror::Error;

/// Failures produced by student operations, tagged so the HTTP layer can
/// pick the matching status code and message.
#[derive(Debug, Error)]
pub enum StudentError {
    /// A record with the same matricula already exists.
    #[error("Já Cadastrado: {matricula} already belongs to a registered student")]
    AlreadyRegistered { matricula: String },

    /// No record carries the requested matricula.
    #[error("Student not found: {matricula}")]
    NotFound { matricula: String },

    /// The photo URL could not be fetched, or answered with a non-2xx status.
    #[error("failed to retrieve photo: {0}")]
    PhotoFetch(#[from] reqwest::Error),

    /// The fetched bytes carry neither a JPEG nor a PNG signature.
    #[error("Unsupported image extension.")]
    UnsupportedImage,

    /// Any other failure from the store.
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}
