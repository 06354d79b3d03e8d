use std::fmt;

/// Raised when pg_dump exits with a non-zero status. Carries the stderr text
/// exactly as the tool produced it so the consuming tool can display it
/// unchanged and callers can match on it (eg. "no matching schemas were
/// found" when the requested schema does not exist).
#[derive(Debug)]
pub struct PgDumpError {
    message: String,
}

impl PgDumpError {
    pub fn new<T: Into<String>>(stderr: T) -> Self {
        PgDumpError {
            message: stderr.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::error::Error for PgDumpError {}

impl fmt::Display for PgDumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
