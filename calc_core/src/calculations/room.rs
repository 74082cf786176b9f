//! # Rooms
//!
//! A named rectangular room. Rooms are independent of the plot: nothing
//! checks that their combined area fits inside it.

use serde::{Deserialize, Serialize};

use super::Area;
use crate::errors::{CalcError, CalcResult};
use crate::units::Meters;

/// A single room of a floor plan.
///
/// ## JSON Example
///
/// ```json
/// { "name": "quarto", "width_m": 3.0, "length_m": 4.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Room label as typed by the user (e.g., "quarto", "sala")
    pub name: String,

    /// Room width in meters
    pub width_m: f64,

    /// Room length in meters
    pub length_m: f64,
}

impl Room {
    pub fn new(name: impl Into<String>, width_m: f64, length_m: f64) -> Self {
        Room {
            name: name.into(),
            width_m,
            length_m,
        }
    }

    /// Reject rooms with zero or negative dimensions.
    ///
    /// Only the interactive prompt applies this; batch input accepts any
    /// parsed value.
    pub fn validate(&self) -> CalcResult<()> {
        if self.width_m <= 0.0 || self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "dimensions",
                format!("{} x {}", self.width_m, self.length_m),
                "Dimensões devem ser maiores que zero.",
            ));
        }
        Ok(())
    }

    pub fn width(&self) -> Meters {
        Meters(self.width_m)
    }

    pub fn length(&self) -> Meters {
        Meters(self.length_m)
    }
}

impl Area for Room {
    fn area_m2(&self) -> f64 {
        self.width_m * self.length_m
    }
}

/// Sum of the areas of all rooms, in input order.
pub fn total_area_m2(rooms: &[Room]) -> f64 {
    rooms.iter().map(Area::area_m2).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_area() {
        let room = Room::new("sala", 4.0, 3.0);
        assert_eq!(room.area_m2(), 12.0);
    }

    #[test]
    fn test_total_area() {
        let rooms = vec![Room::new("quarto", 3.0, 3.0), Room::new("sala", 4.0, 3.0)];
        assert_eq!(total_area_m2(&rooms), 21.0);
        assert_eq!(total_area_m2(&[]), 0.0);
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        assert!(Room::new("quarto", 3.0, 3.0).validate().is_ok());
        assert!(Room::new("quarto", 0.0, 3.0).validate().is_err());
        assert!(Room::new("quarto", 3.0, -1.0).validate().is_err());
    }

    #[test]
    fn test_negative_dimensions_still_compute() {
        // Formulas never reject input; validation belongs to the caller.
        let room = Room::new("erro", -2.0, 3.0);
        assert_eq!(room.area_m2(), -6.0);
    }
}
