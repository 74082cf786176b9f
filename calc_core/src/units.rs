//! # Unit Types
//!
//! Type-safe wrappers for the metric quantities the estimator works with.
//! They stay lightweight (just f64 wrappers) and serialize as bare numbers.
//!
//! `Display` on each wrapper produces the fixed report formatting, so a
//! report line can write `Meters(3.0)` and get `3.0 m`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Meters, SquareMeters, CubicMeters, Reais};
//!
//! let area: SquareMeters = Meters(20.0) * Meters(30.0);
//! assert_eq!(area.0, 600.0);
//!
//! let volume: CubicMeters = area * Meters(0.5);
//! assert_eq!(volume.to_string(), "300.0 m³");
//!
//! assert_eq!(Reais(29700.0).to_string(), "R$ 29700.00");
//! ```

use std::fmt;
use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::report::{fmt_currency, fmt_measure};

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

/// Money in Brazilian reais
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reais(pub f64);

impl Mul for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Meters) -> SquareMeters {
        SquareMeters(self.0 * rhs.0)
    }
}

impl Mul<Meters> for SquareMeters {
    type Output = CubicMeters;
    fn mul(self, rhs: Meters) -> CubicMeters {
        CubicMeters(self.0 * rhs.0)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_measure(self.0, "m"))
    }
}

impl fmt::Display for SquareMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_measure(self.0, "m²"))
    }
}

impl fmt::Display for CubicMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_measure(self.0, "m³"))
    }
}

impl fmt::Display for Reais {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_currency(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_times_length_is_area() {
        let area = Meters(3.0) * Meters(4.0);
        assert_eq!(area, SquareMeters(12.0));
    }

    #[test]
    fn test_area_times_length_is_volume() {
        let volume = SquareMeters(600.0) * Meters(0.5);
        assert_eq!(volume, CubicMeters(300.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Meters(3.24).to_string(), "3.2 m");
        assert_eq!(SquareMeters(21.0).to_string(), "21.0 m²");
        assert_eq!(CubicMeters(300.0).to_string(), "300.0 m³");
        assert_eq!(Reais(18000.0).to_string(), "R$ 18000.00");
    }

    #[test]
    fn test_serialization() {
        let m = Meters(12.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
