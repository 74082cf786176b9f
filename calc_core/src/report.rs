//! # Text Reports
//!
//! Deterministic, human-readable text blocks for plots, rooms and
//! earthwork. Formatters are pure: same input, byte-identical output, no
//! I/O. The CLI prints them as-is and the web page embeds them in `<pre>`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::Plot;
//! use calc_core::report::plot_report;
//!
//! let report = plot_report(&Plot::new(20.0, 30.0), None);
//! assert!(report.contains("Área: 600.0 m²"));
//! ```

use crate::calculations::room::total_area_m2;
use crate::calculations::{estimate, Area, Earthwork, EarthworkEstimate, Plot, Room};
use crate::units::{CubicMeters, Meters, Reais, SquareMeters};

/// Decimal places for lengths, areas and volumes
pub const MEASURE_DECIMALS: usize = 1;

/// Decimal places for money
pub const CURRENCY_DECIMALS: usize = 2;

/// Marker prefixed to every amount of money
pub const CURRENCY_MARKER: &str = "R$";

/// Sentence returned for an empty room list
pub const NO_ROOMS: &str = "Nenhum cômodo informado.";

/// `fmt_measure(3.0, "m") == "3.0 m"`; an empty unit adds no suffix.
pub fn fmt_measure(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{:.*}", MEASURE_DECIMALS, value)
    } else {
        format!("{:.*} {}", MEASURE_DECIMALS, value, unit)
    }
}

/// `fmt_currency(1500.0) == "R$ 1500.00"`
pub fn fmt_currency(value: f64) -> String {
    format!("{} {:.*}", CURRENCY_MARKER, CURRENCY_DECIMALS, value)
}

/// Plot dimensions, area and perimeter.
///
/// With a unit cost per m², two more lines give the unit cost and the
/// estimate without contingency.
pub fn plot_report(plot: &Plot, unit_cost_m2: Option<f64>) -> String {
    let area = plot.area_m2();
    let mut lines = vec![
        "----- RELATÓRIO DO TERRENO -----".to_string(),
        format!("Largura: {}", plot.width()),
        format!("Comprimento: {}", plot.length()),
        format!("Área: {}", plot.area()),
        format!("Perímetro: {}", Meters(estimate::perimeter(plot))),
    ];

    if let Some(unit_cost) = unit_cost_m2 {
        lines.push(format!("Custo unitário (m²): {}", Reais(unit_cost)));
        lines.push(format!(
            "Estimativa (sem contingência): {}",
            Reais(estimate::cost_by_area(area, unit_cost))
        ));
    }

    lines.join("\n")
}

/// One line per room, in input order, plus the total area.
pub fn rooms_report(rooms: &[Room]) -> String {
    if rooms.is_empty() {
        return NO_ROOMS.to_string();
    }

    let mut lines = Vec::with_capacity(rooms.len() + 2);
    lines.push("----- RELATÓRIO DE CÔMODOS -----".to_string());

    for room in rooms {
        lines.push(format!(
            "{}: {} x {} -> Área: {}",
            room.name,
            room.width(),
            room.length(),
            SquareMeters(room.area_m2())
        ));
    }
    lines.push(format!("Área total: {}", SquareMeters(total_area_m2(rooms))));

    lines.join("\n")
}

/// Earthwork volume and cost breakdown.
///
/// Lines, in order: depth, volume, material with its unit cost, material
/// cost, labor unit cost, labor cost, subtotal, contingency, total.
pub fn earthwork_report(
    earthwork: &Earthwork<'_>,
    material: &str,
    material_unit_cost: f64,
    labor_unit_cost: f64,
    contingency_pct: f64,
) -> String {
    let result = estimate::estimate_earthwork(
        earthwork,
        material,
        material_unit_cost,
        labor_unit_cost,
        contingency_pct,
    );
    earthwork_estimate_report(&result)
}

/// Render an already computed [`EarthworkEstimate`].
pub fn earthwork_estimate_report(result: &EarthworkEstimate) -> String {
    [
        "----- RELATÓRIO DE TERRAPLENAGEM -----".to_string(),
        format!("Profundidade média: {}", Meters(result.average_depth_m)),
        format!("Volume estimado: {}", CubicMeters(result.volume_m3)),
        format!(
            "Material: {} — {}/m³",
            result.material,
            Reais(result.material_unit_cost)
        ),
        format!("Custo material: {}", Reais(result.material_cost)),
        format!("Custo mão-de-obra (R$/m³): {}", Reais(result.labor_unit_cost)),
        format!("Custo mão-de-obra: {}", Reais(result.labor_cost)),
        format!("Subtotal: {}", Reais(result.subtotal)),
        format!("Contingência: {}%", fmt_measure(result.contingency_pct, "")),
        format!("Total estimado: {}", Reais(result.total)),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_measure() {
        assert_eq!(fmt_measure(3.0, "m"), "3.0 m");
        assert_eq!(fmt_measure(12.345, "m²"), "12.3 m²");
        assert_eq!(fmt_measure(10.0, ""), "10.0");
    }

    #[test]
    fn test_fmt_currency() {
        assert_eq!(fmt_currency(1500.0), "R$ 1500.00");
        assert_eq!(fmt_currency(0.5), "R$ 0.50");
    }

    #[test]
    fn test_plot_report_without_cost() {
        let report = plot_report(&Plot::new(20.0, 30.0), None);
        let expected = "----- RELATÓRIO DO TERRENO -----\n\
                        Largura: 20.0 m\n\
                        Comprimento: 30.0 m\n\
                        Área: 600.0 m²\n\
                        Perímetro: 100.0 m";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_plot_report_with_cost() {
        let report = plot_report(&Plot::new(20.0, 30.0), Some(120.0));
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[5], "Custo unitário (m²): R$ 120.00");
        assert_eq!(lines[6], "Estimativa (sem contingência): R$ 72000.00");
    }

    #[test]
    fn test_rooms_report_empty() {
        assert_eq!(rooms_report(&[]), "Nenhum cômodo informado.");
    }

    #[test]
    fn test_rooms_report() {
        let rooms = vec![Room::new("quarto", 3.0, 3.0), Room::new("sala", 4.0, 3.0)];
        let report = rooms_report(&rooms);
        let expected = "----- RELATÓRIO DE CÔMODOS -----\n\
                        quarto: 3.0 m x 3.0 m -> Área: 9.0 m²\n\
                        sala: 4.0 m x 3.0 m -> Área: 12.0 m²\n\
                        Área total: 21.0 m²";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_rooms_report_keeps_input_order() {
        let rooms = vec![Room::new("sala", 4.0, 3.0), Room::new("banheiro", 2.0, 1.5)];
        let report = rooms_report(&rooms);
        let sala = report.find("sala").unwrap();
        let banheiro = report.find("banheiro").unwrap();
        assert!(sala < banheiro);
    }

    #[test]
    fn test_earthwork_report_end_to_end() {
        let plot = Plot::new(20.0, 30.0);
        let earthwork = Earthwork::new(&plot, 0.5);
        let report = earthwork_report(&earthwork, "areia", 60.0, 30.0, 10.0);

        let expected = "----- RELATÓRIO DE TERRAPLENAGEM -----\n\
                        Profundidade média: 0.5 m\n\
                        Volume estimado: 300.0 m³\n\
                        Material: areia — R$ 60.00/m³\n\
                        Custo material: R$ 18000.00\n\
                        Custo mão-de-obra (R$/m³): R$ 30.00\n\
                        Custo mão-de-obra: R$ 9000.00\n\
                        Subtotal: R$ 27000.00\n\
                        Contingência: 10.0%\n\
                        Total estimado: R$ 29700.00";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_formatters_are_idempotent() {
        let plot = Plot::new(12.3, 45.6);
        let rooms = vec![Room::new("quarto", 3.3, 2.7)];
        let earthwork = Earthwork::new(&plot, 0.35);

        assert_eq!(plot_report(&plot, Some(99.9)), plot_report(&plot, Some(99.9)));
        assert_eq!(rooms_report(&rooms), rooms_report(&rooms));
        assert_eq!(
            earthwork_report(&earthwork, "brita", 150.0, 25.0, 7.5),
            earthwork_report(&earthwork, "brita", 150.0, 25.0, 7.5)
        );
    }
}
