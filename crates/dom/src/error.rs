use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("markup parsing error: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("markup writing error: {0}")]
    Write(String),

    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
