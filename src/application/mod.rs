//! Application layer: the circle area report
//!
//! This layer orchestrates domain logic over generic console handles.

pub mod error;
pub mod error_ext;
pub mod reporter;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use reporter::CircleAreaReporter;
