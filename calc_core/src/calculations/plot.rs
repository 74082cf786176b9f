//! # Land Plot
//!
//! A rectangular plot of land described by width and length in meters.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::{Area, Plot};
//!
//! let plot = Plot::new(20.0, 30.0);
//! assert_eq!(plot.area_m2(), 600.0);
//! assert_eq!(plot.perimeter_m(), 100.0);
//! ```

use serde::{Deserialize, Serialize};

use super::Area;
use crate::units::{Meters, SquareMeters};

/// Rectangular land plot.
///
/// ## JSON Example
///
/// ```json
/// { "width_m": 20.0, "length_m": 30.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Plot {
    /// Plot width in meters
    pub width_m: f64,

    /// Plot length in meters
    pub length_m: f64,
}

impl Plot {
    pub fn new(width_m: f64, length_m: f64) -> Self {
        Plot { width_m, length_m }
    }

    /// Perimeter P = 2(w + l)
    pub fn perimeter_m(&self) -> f64 {
        2.0 * (self.width_m + self.length_m)
    }

    pub fn width(&self) -> Meters {
        Meters(self.width_m)
    }

    pub fn length(&self) -> Meters {
        Meters(self.length_m)
    }

    pub fn area(&self) -> SquareMeters {
        self.width() * self.length()
    }
}

impl Area for Plot {
    fn area_m2(&self) -> f64 {
        self.width_m * self.length_m
    }
}
