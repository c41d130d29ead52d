use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Store request failed: {0}")]
    Store(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Unknown(String),
}

pub type SyncResult<T> = Result<T, SyncError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> SyncResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> SyncResult<T> {
        self.map_err(|e| SyncError::Unknown(format!("{}: {}", msg, e)))
    }
}

#[macro_export]
macro_rules! sync_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::SyncError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::SyncError::$error_type(format!($fmt, $($arg)*))
    };
}
