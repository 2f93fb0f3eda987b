//! Application error type carrying a process exit code.
//!
//! Exit code conventions used throughout:
//!
//! - `2`: usage, schema, or configuration errors (bad flags, missing columns)
//! - `3`: no usable data (unknown customer id, nothing left after validation)
//! - `4`: internal errors (export I/O failures, etc.)

#[derive(Debug, Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}
