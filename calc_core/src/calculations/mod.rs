//! # Estimation Calculations
//!
//! Value objects and the pure formulas computed over them:
//!
//! - Value types carry dimensions in meters (JSON-serializable)
//! - Derived measures are plain methods (`area_m2`, `perimeter_m`, `volume_m3`)
//! - Cost functions live in [`estimate`] and never validate their input
//!
//! ## Available Calculations
//!
//! - [`plot`] - Land plot area and perimeter
//! - [`room`] - Room areas and their total
//! - [`earthwork`] - Cut/fill volume over a plot
//! - [`estimate`] - Area/volume costs and contingency

pub mod earthwork;
pub mod estimate;
pub mod plot;
pub mod room;

// Re-export commonly used types
pub use earthwork::Earthwork;
pub use estimate::EarthworkEstimate;
pub use plot::Plot;
pub use room::Room;

/// Anything with a plan area in square meters.
pub trait Area {
    fn area_m2(&self) -> f64;
}
