//! # Estimate Requests
//!
//! An `EstimateRequest` bundles everything one estimate needs (plot, rooms,
//! optional plot cost and optional earthwork) and renders all report blocks
//! in one call. Both front ends build one of these per command or form post
//! and discard it afterwards.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::Plot;
//! use calc_core::request::{EarthworkOptions, EstimateRequest};
//!
//! let request = EstimateRequest::new(Plot::new(20.0, 30.0))
//!     .with_earthwork(EarthworkOptions::new(0.5, "areia", 30.0, 10.0));
//!
//! let report = request.run();
//! assert!(report.earthwork.unwrap().contains("R$ 29700.00"));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{estimate, Earthwork, EarthworkEstimate, Plot, Room};
use crate::errors::CalcResult;
use crate::materials::{MaterialCatalog, DEFAULT_CATALOG, DEFAULT_MATERIAL};
use crate::report;

/// Earthwork parameters as entered by the user.
///
/// ## JSON Example
///
/// ```json
/// {
///   "average_depth_m": 0.5,
///   "material": "areia",
///   "labor_cost_m3": 30.0,
///   "contingency_pct": 10.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthworkOptions {
    pub average_depth_m: f64,

    /// Catalog material name; unknown names resolve to `aterro`
    #[serde(default = "default_material")]
    pub material: String,

    /// Labor cost in R$ per m³
    #[serde(default)]
    pub labor_cost_m3: f64,

    #[serde(default)]
    pub contingency_pct: f64,
}

fn default_material() -> String {
    DEFAULT_MATERIAL.to_string()
}

impl EarthworkOptions {
    pub fn new(
        average_depth_m: f64,
        material: impl Into<String>,
        labor_cost_m3: f64,
        contingency_pct: f64,
    ) -> Self {
        EarthworkOptions {
            average_depth_m,
            material: material.into(),
            labor_cost_m3,
            contingency_pct,
        }
    }
}

/// Everything needed for one estimate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub plot: Plot,

    /// Optional construction cost per m² of plot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost_m2: Option<f64>,

    #[serde(default)]
    pub rooms: Vec<Room>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earthwork: Option<EarthworkOptions>,
}

/// Rendered report blocks. `earthwork` is `None` when no earthwork was
/// requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateReport {
    pub plot: String,
    pub rooms: String,
    pub earthwork: Option<String>,
}

impl EstimateRequest {
    pub fn new(plot: Plot) -> Self {
        EstimateRequest {
            plot,
            ..Default::default()
        }
    }

    pub fn with_unit_cost_m2(mut self, unit_cost_m2: f64) -> Self {
        self.unit_cost_m2 = Some(unit_cost_m2);
        self
    }

    pub fn with_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.rooms = rooms;
        self
    }

    pub fn with_earthwork(mut self, options: EarthworkOptions) -> Self {
        self.earthwork = Some(options);
        self
    }

    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Earthwork cost breakdown priced from `catalog`, if earthwork was
    /// requested.
    pub fn earthwork_estimate_with(&self, catalog: &MaterialCatalog) -> Option<EarthworkEstimate> {
        self.earthwork.as_ref().map(|options| {
            let material = catalog.resolve(&options.material);
            let earthwork = Earthwork::new(&self.plot, options.average_depth_m);
            estimate::estimate_earthwork(
                &earthwork,
                &material.name,
                material.cost_per_m3,
                options.labor_cost_m3,
                options.contingency_pct,
            )
        })
    }

    pub fn earthwork_estimate(&self) -> Option<EarthworkEstimate> {
        self.earthwork_estimate_with(&DEFAULT_CATALOG)
    }

    /// Render all report blocks, pricing materials from `catalog`.
    pub fn run_with(&self, catalog: &MaterialCatalog) -> EstimateReport {
        EstimateReport {
            plot: report::plot_report(&self.plot, self.unit_cost_m2),
            rooms: report::rooms_report(&self.rooms),
            earthwork: self
                .earthwork_estimate_with(catalog)
                .map(|result| report::earthwork_estimate_report(&result)),
        }
    }

    /// Render all report blocks with the default material catalog.
    pub fn run(&self) -> EstimateReport {
        self.run_with(&DEFAULT_CATALOG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_without_earthwork() {
        let report = EstimateRequest::new(Plot::new(10.0, 20.0)).run();
        assert!(report.plot.contains("Área: 200.0 m²"));
        assert_eq!(report.rooms, "Nenhum cômodo informado.");
        assert!(report.earthwork.is_none());
    }

    #[test]
    fn test_run_full() {
        let request = EstimateRequest::new(Plot::new(20.0, 30.0))
            .with_unit_cost_m2(120.0)
            .with_rooms(vec![Room::new("quarto", 3.0, 3.0), Room::new("sala", 4.0, 3.0)])
            .with_earthwork(EarthworkOptions::new(0.5, "areia", 30.0, 10.0));

        let report = request.run();
        assert!(report.plot.contains("R$ 72000.00"));
        assert!(report.rooms.ends_with("Área total: 21.0 m²"));
        let earthwork = report.earthwork.unwrap();
        assert!(earthwork.contains("Material: areia — R$ 60.00/m³"));
        assert!(earthwork.ends_with("Total estimado: R$ 29700.00"));
    }

    #[test]
    fn test_unknown_material_uses_aterro() {
        let request = EstimateRequest::new(Plot::new(10.0, 10.0))
            .with_earthwork(EarthworkOptions::new(1.0, "cimento", 0.0, 0.0));

        let result = request.earthwork_estimate().unwrap();
        assert_eq!(result.material, "aterro");
        assert_eq!(result.material_cost, 8000.0);
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = MaterialCatalog::default().with_material("areia", 100.0).unwrap();
        let request = EstimateRequest::new(Plot::new(10.0, 10.0))
            .with_earthwork(EarthworkOptions::new(1.0, "areia", 0.0, 0.0));

        let result = request.earthwork_estimate_with(&catalog).unwrap();
        assert_eq!(result.material_cost, 10000.0);
    }

    #[test]
    fn test_from_json_defaults() {
        let json = r#"{
            "plot": { "width_m": 20.0, "length_m": 30.0 },
            "earthwork": { "average_depth_m": 0.5 }
        }"#;
        let request = EstimateRequest::from_json(json).unwrap();
        assert!(request.rooms.is_empty());
        assert_eq!(request.unit_cost_m2, None);

        let options = request.earthwork.as_ref().unwrap();
        assert_eq!(options.material, "aterro");
        assert_eq!(options.labor_cost_m3, 0.0);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = EstimateRequest::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
