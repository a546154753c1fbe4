use std::f64::consts::PI;
use std::hint::black_box;

use crate::domain::float_fmt::round_to;
use crate::domain::DomainError;

/// Decimal places shown for the final area.
pub const AREA_DECIMALS: usize = 2;

/// Every value taking part in one area computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleArea {
    pub radius: f64,
    pub radius_squared: f64,
    pub pi: f64,
    pub area: f64,
}

impl CircleArea {
    /// Compute `π × radius²` in double precision.
    ///
    /// A finite radius whose square leaves the double range is an
    /// [`DomainError::Overflow`]; infinite and NaN radii are carried through.
    pub fn compute(radius: f64) -> Result<Self, DomainError> {
        // An opaque exponent keeps this a libm `pow` call; a literal 2.0 is folded
        // into `radius * radius`, which rounds exact ties differently.
        let radius_squared = radius.powf(black_box(2.0));
        if radius.is_finite() && radius_squared.is_infinite() {
            return Err(DomainError::Overflow { radius });
        }

        Ok(Self {
            radius,
            radius_squared,
            pi: PI,
            area: PI * radius_squared,
        })
    }

    /// Area rounded for display.
    pub fn rounded_area(&self) -> f64 {
        round_to(self.area, AREA_DECIMALS)
    }
}
