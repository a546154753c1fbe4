//! Domain layer: radius parsing, area arithmetic and number rendering
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod circle;
pub mod error;
pub mod float_fmt;
pub mod radius;

pub use circle::{CircleArea, AREA_DECIMALS};
pub use error::DomainError;
pub use float_fmt::{format_float, round_to};
pub use radius::parse_radius;
