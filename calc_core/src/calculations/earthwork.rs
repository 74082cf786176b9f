//! # Earthwork (Cut/Fill)
//!
//! Simple earthmoving volume: the plot area times an average depth (or fill
//! height). The earthwork borrows its plot; the same plot is reported on its
//! own as well.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::{Earthwork, Plot};
//!
//! let plot = Plot::new(20.0, 30.0);
//! let earthwork = Earthwork::new(&plot, 0.5);
//! assert_eq!(earthwork.volume_m3(), 300.0);
//! ```

use serde::Serialize;

use super::Plot;
use crate::units::{CubicMeters, Meters};

/// Earthwork over a whole plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Earthwork<'a> {
    /// Plot the earthwork covers (borrowed)
    pub plot: &'a Plot,

    /// Average cut depth / fill height in meters (expected >= 0)
    pub average_depth_m: f64,
}

impl<'a> Earthwork<'a> {
    pub fn new(plot: &'a Plot, average_depth_m: f64) -> Self {
        Earthwork {
            plot,
            average_depth_m,
        }
    }

    /// Volume V = A × d
    pub fn volume(&self) -> CubicMeters {
        self.plot.area() * Meters(self.average_depth_m)
    }

    pub fn volume_m3(&self) -> f64 {
        self.volume().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume() {
        let plot = Plot::new(20.0, 30.0);
        let earthwork = Earthwork::new(&plot, 0.5);
        assert_eq!(earthwork.volume_m3(), 300.0);
        assert_eq!(earthwork.volume(), CubicMeters(300.0));
    }

    #[test]
    fn test_zero_depth() {
        let plot = Plot::new(10.0, 10.0);
        assert_eq!(Earthwork::new(&plot, 0.0).volume_m3(), 0.0);
    }

    #[test]
    fn test_plot_is_shared() {
        let plot = Plot::new(10.0, 12.0);
        let shallow = Earthwork::new(&plot, 0.2);
        let deep = Earthwork::new(&plot, 1.0);
        assert!(std::ptr::eq(shallow.plot, deep.plot));
        assert!((deep.volume_m3() - 120.0).abs() < 1e-9);
    }
}
