#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("unknown severity tag: {0:?}")]
    UnknownSeverity(String),
    #[error("cannot compute statistics over an empty case collection")]
    InsufficientData,
    #[error("invalid kudos submission: {0}")]
    InvalidKudosSubmission(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("caseload schema mismatch at {path}: {message}")]
    CaseloadSchema { path: String, message: String },
    #[error("failed to read caseload file: {0}")]
    CaseloadRead(std::io::Error),
}

pub type TriageResult<T> = std::result::Result<T, TriageError>;
