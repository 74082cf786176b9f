//! # calc_core - Civil Estimation Engine
//!
//! `calc_core` is the computational heart of the estimator: plot area and
//! perimeter, room-area aggregation and earthwork (cut/fill) volume and cost.
//! Front ends (the interactive CLI and the web form) only collect input and
//! print the text blocks produced here.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over plain value objects
//! - **JSON-First**: Inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Parse failures say which text failed and why
//! - **Lenient formulas**: Validation is the caller's job, never the formula's
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::{Earthwork, Plot};
//! use calc_core::parsing::parse_dimensions;
//! use calc_core::report::earthwork_report;
//!
//! let (width, length) = parse_dimensions("20 x 30").unwrap();
//! let plot = Plot::new(width, length);
//! let earthwork = Earthwork::new(&plot, 0.5);
//!
//! let text = earthwork_report(&earthwork, "areia", 60.0, 30.0, 10.0);
//! assert!(text.contains("Total estimado: R$ 29700.00"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Plot, room and earthwork types and cost formulas
//! - [`parsing`] - Dimension, number and room-line parsing
//! - [`report`] - Text report formatters
//! - [`materials`] - Material unit-cost catalog
//! - [`presets`] - Ready-made floor plans
//! - [`request`] - One-shot estimate bundle used by the front ends
//! - [`units`] - Type-safe metric unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod parsing;
pub mod presets;
pub mod report;
pub mod request;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{Area, Earthwork, EarthworkEstimate, Plot, Room};
pub use errors::{CalcError, CalcResult};
pub use materials::{MaterialCatalog, DEFAULT_CATALOG};
pub use request::{EarthworkOptions, EstimateReport, EstimateRequest};
