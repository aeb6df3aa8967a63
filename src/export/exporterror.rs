use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no days off selected")]
    EmptySelection,
    #[error("unknown calendar target '{0}', expected 'gmail' or 'outlook'")]
    UnknownTarget(String),
    #[error(transparent)]
    IOError(#[from] std::io::Error)
}
