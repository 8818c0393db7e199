//! Application-wide error types.
//!
//! Config loading and the utility helpers are total by design and never
//! produce one of these; only bootstrap concerns (logging) can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("logger error: {0}")]
    Logger(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn logger_error_display() {
        let e = AppError::Logger("already initialized".into());
        assert!(e.to_string().contains("already initialized"));
        assert!(e.to_string().starts_with("logger error"));
        // satisfies std::error::Error trait
        let _: &dyn Error = &e;
    }
}
