//! # Input Parsing
//!
//! Turns free text typed by a user into dimensions, numbers and rooms.
//!
//! Decimal commas are accepted everywhere (`3,5` == `3.5`). Positivity is
//! NOT checked here: the interactive prompt checks it separately, batch
//! input accepts whatever parses.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::parsing::parse_dimensions;
//!
//! assert_eq!(parse_dimensions("3x4").unwrap(), (3.0, 4.0));
//! assert_eq!(parse_dimensions("3,5 X 4.2").unwrap(), (3.5, 4.2));
//! assert_eq!(parse_dimensions("3 4").unwrap(), (3.0, 4.0));
//! assert!(parse_dimensions("3").is_err());
//! ```

use crate::calculations::Room;
use crate::errors::{CalcError, CalcResult};

/// Lines that end room entry (compared trimmed, case-insensitive)
pub const ROOM_TERMINATORS: [&str; 5] = ["fim", "fim dos comodos", "f", "done", "end"];

/// Parse a `(width, length)` pair from `"3x4"`, `"3,5 x 4.2"` or `"3 4"`.
///
/// # Errors
///
/// * `InvalidFormat` - fewer than two parts after splitting
/// * `InvalidNumber` - one of the first two parts is not a number
pub fn parse_dimensions(text: &str) -> CalcResult<(f64, f64)> {
    let normalized = text.trim().to_lowercase().replace(',', ".");

    let parts: Vec<&str> = if normalized.contains('x') {
        normalized
            .split('x')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    } else {
        normalized.split_whitespace().collect()
    };

    if parts.len() < 2 {
        return Err(CalcError::invalid_format(
            text,
            "Formato de dimensões inválido. Use LxC ou \"L C\".",
        ));
    }

    let width = parse_real(parts[0])?;
    let length = parse_real(parts[1])?;
    Ok((width, length))
}

/// Parse a single number, accepting `,` as decimal separator.
pub fn parse_number(text: &str) -> CalcResult<f64> {
    parse_real(&text.trim().replace(',', "."))
}

/// Parse a number and enforce an optional lower bound.
///
/// This is one attempt of the interactive read-validate-retry loop; the
/// caller owns the loop.
pub fn validate_number(text: &str, min: Option<f64>) -> CalcResult<f64> {
    let value = parse_number(text)?;
    match min {
        Some(min) if value < min => Err(CalcError::below_minimum(value, min)),
        _ => Ok(value),
    }
}

/// Form-field leniency: missing, blank or unparseable text counts as zero.
pub fn lenient_number(text: Option<&str>) -> f64 {
    text.and_then(|t| parse_number(t).ok()).unwrap_or(0.0)
}

/// True if the line asks to stop entering rooms.
pub fn is_room_terminator(line: &str) -> bool {
    let line = line.trim().to_lowercase();
    ROOM_TERMINATORS.contains(&line.as_str())
}

/// Parse `"<name> <dimensions>"`, e.g. `"quarto 3x4"` or `"sala 4 3,5"`.
///
/// The first whitespace-separated token is the name; everything after it
/// is handed to [`parse_dimensions`].
pub fn parse_room_line(line: &str) -> CalcResult<Room> {
    let mut tokens = line.split_whitespace();
    let name = tokens
        .next()
        .ok_or_else(|| CalcError::invalid_format(line, "Linha vazia."))?;

    let dims = tokens.collect::<Vec<_>>().join(" ");
    if dims.is_empty() {
        return Err(CalcError::invalid_format(
            line,
            "Informe: nome dimensões (ex: quarto 3x4)",
        ));
    }

    let (width_m, length_m) = parse_dimensions(&dims)?;
    Ok(Room::new(name, width_m, length_m))
}

/// Parse a multi-line block of rooms with batch tolerance.
///
/// Blank lines are ignored, the first terminator line stops parsing and
/// lines that fail to parse are skipped without error. Dimensions are not
/// checked for positivity.
pub fn parse_room_block(text: &str) -> Vec<Room> {
    let mut rooms = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_room_terminator(line) {
            break;
        }
        match parse_room_line(line) {
            Ok(room) => rooms.push(room),
            Err(e) => tracing::debug!(line, error = %e, "Skipping room line"),
        }
    }

    rooms
}

fn parse_real(part: &str) -> CalcResult<f64> {
    match part.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::invalid_number(part)),
    }
}
