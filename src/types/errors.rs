use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Archive error: {0}")]
    Archive(String),
    #[error("Entry not found in archive: {0}")]
    EntryNotFound(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for ToolError {
    fn from(error: std::io::Error) -> Self {
        ToolError::Io(error.to_string())
    }
}

impl From<zip::result::ZipError> for ToolError {
    fn from(error: zip::result::ZipError) -> Self {
        match error {
            zip::result::ZipError::FileNotFound => ToolError::EntryNotFound(error.to_string()),
            other => ToolError::Archive(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(error: serde_json::Error) -> Self {
        ToolError::Config(error.to_string())
    }
}

pub type ToolResult<T> = Result<T, ToolError>;
