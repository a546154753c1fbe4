//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(e.into())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                ApplicationError::EndOfInput => crate::exitcode::NOINPUT,
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_radius;

    #[test]
    fn test_exit_code_for_parse_failure() {
        let err: CliError = parse_radius("abc").unwrap_err().into();
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn test_exit_code_for_overflow() {
        let err: CliError = DomainError::Overflow { radius: 1e200 }.into();
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn test_exit_code_for_end_of_input() {
        let err = CliError::Application(ApplicationError::EndOfInput);
        assert_eq!(err.exit_code(), crate::exitcode::NOINPUT);
    }

    #[test]
    fn test_exit_code_for_io_and_config() {
        let io = CliError::Application(ApplicationError::io(
            "write report line",
            std::io::Error::from(std::io::ErrorKind::BrokenPipe),
        ));
        assert_eq!(io.exit_code(), crate::exitcode::IOERR);

        let config = CliError::Application(ApplicationError::Config {
            message: "bad".into(),
        });
        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn test_parse_failure_message_is_passed_through() {
        let err: CliError = parse_radius("abc").unwrap_err().into();
        assert_eq!(err.to_string(), "could not convert string to float: 'abc'");
    }
}
