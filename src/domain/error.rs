//! Domain-level errors (no external dependencies)

use std::num::ParseFloatError;
use thiserror::Error;

/// Domain errors represent invalid numbers or arithmetic that cannot be carried out.
/// These are independent of console and configuration concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("could not convert string to float: '{input}'")]
    InvalidRadius {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    /// Squaring a finite radius left the double range.
    #[error("(34, 'Numerical result out of range')")]
    Overflow { radius: f64 },
}
