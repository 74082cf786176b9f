//! # Cost Estimation
//!
//! Area/volume based cost estimates and contingency scaling.
//!
//! None of these functions validate their input. A negative volume gives a
//! negative cost; rejecting it is the caller's job.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::{estimate, Earthwork, Plot};
//!
//! let plot = Plot::new(20.0, 30.0);
//! let earthwork = Earthwork::new(&plot, 0.5);
//!
//! let result = estimate::estimate_earthwork(&earthwork, "areia", 60.0, 30.0, 10.0);
//! assert_eq!(result.material_cost, 18000.0);
//! assert!((result.total - 29700.0).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use super::{Area, Earthwork, Plot};

/// Area of any shape (plot or room).
pub fn area<T: Area + ?Sized>(shape: &T) -> f64 {
    shape.area_m2()
}

pub fn perimeter(plot: &Plot) -> f64 {
    plot.perimeter_m()
}

pub fn volume(earthwork: &Earthwork<'_>) -> f64 {
    earthwork.volume_m3()
}

/// Cost = area × unit cost per m²
pub fn cost_by_area(area_m2: f64, unit_cost_m2: f64) -> f64 {
    area_m2 * unit_cost_m2
}

/// Cost = volume × unit cost per m³
pub fn cost_by_volume(volume_m3: f64, unit_cost_m3: f64) -> f64 {
    volume_m3 * unit_cost_m3
}

/// Scale an amount by a contingency percentage: `amount × (1 + pct/100)`.
///
/// Any percentage is accepted, including negative ones.
pub fn apply_contingency(amount: f64, percent: f64) -> f64 {
    amount * (1.0 + percent / 100.0)
}

/// Full cost breakdown of an earthwork job.
///
/// ## JSON Example
///
/// ```json
/// {
///   "average_depth_m": 0.5,
///   "volume_m3": 300.0,
///   "material": "areia",
///   "material_unit_cost": 60.0,
///   "material_cost": 18000.0,
///   "labor_unit_cost": 30.0,
///   "labor_cost": 9000.0,
///   "subtotal": 27000.0,
///   "contingency_pct": 10.0,
///   "total": 29700.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthworkEstimate {
    pub average_depth_m: f64,
    pub volume_m3: f64,
    pub material: String,
    /// Material cost per m³ (R$)
    pub material_unit_cost: f64,
    pub material_cost: f64,
    /// Labor cost per m³ (R$)
    pub labor_unit_cost: f64,
    pub labor_cost: f64,
    /// Material + labor, before contingency
    pub subtotal: f64,
    pub contingency_pct: f64,
    /// Subtotal with contingency applied
    pub total: f64,
}

/// Estimate material, labor and contingency for an earthwork job.
pub fn estimate_earthwork(
    earthwork: &Earthwork<'_>,
    material: &str,
    material_unit_cost: f64,
    labor_unit_cost: f64,
    contingency_pct: f64,
) -> EarthworkEstimate {
    let volume_m3 = volume(earthwork);
    let material_cost = cost_by_volume(volume_m3, material_unit_cost);
    let labor_cost = cost_by_volume(volume_m3, labor_unit_cost);
    let subtotal = material_cost + labor_cost;

    EarthworkEstimate {
        average_depth_m: earthwork.average_depth_m,
        volume_m3,
        material: material.to_string(),
        material_unit_cost,
        material_cost,
        labor_unit_cost,
        labor_cost,
        subtotal,
        contingency_pct,
        total: apply_contingency(subtotal, contingency_pct),
    }
}
